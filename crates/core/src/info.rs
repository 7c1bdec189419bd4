//! Colour reports across representations, and free-form colour parsing.

use crate::color::{round_to, Argb, Cmyk, Hsv};
use crate::error::SwatchError;
use crate::named;
use serde::Serialize;
use std::fmt;

/// One colour described in every representation the tool shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb_hex: String,
    /// `[a, r, g, b]` bytes.
    pub bytes: [u8; 4],
    /// `[a, r, g, b]` over 255, 4 dp.
    pub normalised: [f64; 4],
    /// `[a, r, g, b]` as percentages, 1 dp.
    pub percent: [f64; 4],
    pub cmyk: Cmyk,
    pub cmyk_percent: [f64; 4],
    pub hsv: Hsv,
    pub hue_degrees: f64,
    pub value_byte: u8,
    pub hsv_percent: [f64; 3],
    pub negative: String,
}

impl ColorInfo {
    pub fn of(c: Argb) -> Self {
        let bytes = [c.a, c.r, c.g, c.b];
        let cmyk = c.to_cmyk();
        let hsv = c.to_hsv();
        Self {
            hex: c.to_hex(),
            rgb_hex: c.to_rgb_hex(),
            bytes,
            normalised: bytes.map(|v| round_to(v as f64 / 255.0, 4)),
            percent: bytes.map(|v| round_to(v as f64 / 255.0 * 100.0, 1)),
            cmyk,
            cmyk_percent: [cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key].map(percent),
            hsv,
            hue_degrees: round_to(hsv.hue_degrees(), 1),
            value_byte: hsv.value_as_byte(),
            hsv_percent: [hsv.hue, hsv.saturation, hsv.value].map(percent),
            negative: c.negative().to_hex(),
        }
    }
}

fn percent(v: f64) -> f64 {
    round_to(v * 100.0, 1)
}

impl fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, r, g, b] = self.bytes;
        writeln!(f, "{} ({})", self.hex, self.rgb_hex)?;
        writeln!(f, "  ARGB      {a} {r} {g} {b}")?;
        writeln!(
            f,
            "  ARGB %    {} {} {} {}",
            self.percent[0], self.percent[1], self.percent[2], self.percent[3]
        )?;
        writeln!(f, "  CMYK      {}", self.cmyk)?;
        writeln!(
            f,
            "  CMYK %    {} {} {} {}",
            self.cmyk_percent[0], self.cmyk_percent[1], self.cmyk_percent[2], self.cmyk_percent[3]
        )?;
        writeln!(f, "  HSV       {}", self.hsv)?;
        writeln!(
            f,
            "  HSV (deg) {} {} {}",
            self.hue_degrees, self.hsv.saturation, self.value_byte
        )?;
        writeln!(
            f,
            "  HSV %     {} {} {}",
            self.hsv_percent[0], self.hsv_percent[1], self.hsv_percent[2]
        )?;
        write!(f, "  Negative  {}", self.negative)
    }
}

/// Parses a colour written as hex (`#AARRGGBB`, `#RRGGBB`), `cmyk:c,m,y,k`,
/// `hsv:h,s,v` (all components normalised), or a named colour.
pub fn parse_color(input: &str) -> Result<Argb, SwatchError> {
    let input = input.trim();
    if let Some(rest) = strip_prefix_ignore_case(input, "cmyk:") {
        let [c, m, y, k] = components::<4>(rest)?;
        return Ok(Cmyk::new(c, m, y, k).to_argb());
    }
    if let Some(rest) = strip_prefix_ignore_case(input, "hsv:") {
        let [h, s, v] = components::<3>(rest)?;
        return Ok(Hsv::new(h, s, v).to_argb());
    }
    if input.starts_with('#') || input.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Argb::from_hex(input);
    }
    named::lookup(input).map_err(|_| SwatchError::InvalidColor(input.to_string()))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

fn components<const N: usize>(list: &str) -> Result<[f64; N], SwatchError> {
    let parts: Vec<&str> = list.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(SwatchError::InvalidColor(format!(
            "expected {N} components, got {}",
            parts.len()
        )));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        let v: f64 = part
            .parse()
            .map_err(|_| SwatchError::InvalidColor(format!("not a number: {part}")))?;
        if !(0.0..=1.0).contains(&v) {
            return Err(SwatchError::InvalidColor(format!(
                "component {v} is outside 0.0 - 1.0"
            )));
        }
        *slot = v;
    }
    Ok(out)
}
