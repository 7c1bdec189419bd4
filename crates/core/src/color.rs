//! Colour types and conversion functions for the swatch core.
//!
//! `Argb` is the canonical byte representation of a swatch. `Cmyk` and `Hsv`
//! are derived views produced by pure conversion functions. Derived
//! components are rounded to four decimal places, so conversions round-trip
//! approximately (within one byte per channel), not bit-exactly.
//!
//! Equality on the derived views goes through [`approx_eq`], which uses the
//! smallest representable positive difference as its tolerance.

use crate::error::SwatchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Smallest positive `f64` (the first subnormal). Used as the equality tolerance.
pub const SMALLEST_DIFFERENCE: f64 = 5e-324;

/// Decimal places kept by every derived colour component.
const COMPONENT_PLACES: i32 = 4;

/// Returns true if `a` and `b` differ by less than [`SMALLEST_DIFFERENCE`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < SMALLEST_DIFFERENCE
}

/// Rounds `value` to `places` decimal places, resolving ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// A colour with four independent byte channels.
///
/// Serializes as `"#AARRGGBB"`. Deserializes from `#AARRGGBB` or `#RRGGBB`
/// (opaque), with or without the leading `#`, in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour expressed as normalised cyan, magenta, yellow, and key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

/// A colour expressed as normalised hue, saturation, and value.
///
/// `hue` is in [0, 1) and represents 0 to 360 degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Argb = Argb::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Argb = Argb::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Argb = Argb::rgb(0, 0, 0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Parses `"#AARRGGBB"` or `"#RRGGBB"` (case insensitive, `#` optional).
    ///
    /// Six-digit input yields an opaque colour.
    pub fn from_hex(hex: &str) -> Result<Argb, SwatchError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SwatchError::InvalidColor(format!("{bad:?} is not a hex digit")));
        }
        let byte = |i: usize, what: &str| {
            hex.get(i..i + 2)
                .ok_or_else(|| SwatchError::InvalidColor(format!("missing {what} component")))
                .and_then(|s| {
                    u8::from_str_radix(s, 16).map_err(|e| {
                        SwatchError::InvalidColor(format!("invalid {what} component: {e}"))
                    })
                })
        };
        match hex.len() {
            6 => Ok(Argb::rgb(byte(0, "red")?, byte(2, "green")?, byte(4, "blue")?)),
            8 => Ok(Argb::new(
                byte(0, "alpha")?,
                byte(2, "red")?,
                byte(4, "green")?,
                byte(6, "blue")?,
            )),
            n => Err(SwatchError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {n}"
            ))),
        }
    }

    /// Formats as `"#AARRGGBB"` in upper case.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Formats as `"#RRGGBB"` in upper case, dropping alpha.
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// True when the three colour channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub fn to_cmyk(self) -> Cmyk {
        argb_to_cmyk(self)
    }

    pub fn to_hsv(self) -> Hsv {
        argb_to_hsv(self)
    }

    pub fn negative(self) -> Argb {
        negative(self)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Argb::from_hex(s.trim())
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Argb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Cmyk {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Components scaled to percentages, space separated.
    pub fn to_percentage_string(self) -> String {
        format!(
            "{} {} {} {}",
            self.cyan * 100.0,
            self.magenta * 100.0,
            self.yellow * 100.0,
            self.key * 100.0
        )
    }

    pub fn to_argb(self) -> Argb {
        cmyk_to_argb(self)
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.cyan, other.cyan)
            && approx_eq(self.magenta, other.magenta)
            && approx_eq(self.yellow, other.yellow)
            && approx_eq(self.key, other.key)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Hue in degrees, [0, 360).
    pub fn hue_degrees(self) -> f64 {
        360.0 * self.hue
    }

    /// Value on the byte scale, rounded to the nearest integer.
    pub fn value_as_byte(self) -> u8 {
        (255.0 * self.value).round_ties_even().clamp(0.0, 255.0) as u8
    }

    /// Components scaled to percentages, space separated.
    pub fn to_percentage_string(self) -> String {
        format!(
            "{} {} {}",
            self.hue * 100.0,
            self.saturation * 100.0,
            self.value * 100.0
        )
    }

    pub fn to_argb(self) -> Argb {
        hsv_to_argb(self)
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.hue, other.hue)
            && approx_eq(self.saturation, other.saturation)
            && approx_eq(self.value, other.value)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hue, self.saturation, self.value)
    }
}

/// Converts ARGB to CMYK. Alpha is ignored.
///
/// Pure white maps to (0, 0, 0, 0) and pure black to (1, 1, 1, 1); both are
/// special-cased so the general formula never divides by zero.
pub fn argb_to_cmyk(c: Argb) -> Cmyk {
    if c.r == 255 && c.g == 255 && c.b == 255 {
        return Cmyk::new(0.0, 0.0, 0.0, 0.0);
    }
    if c.r == 0 && c.g == 0 && c.b == 0 {
        return Cmyk::new(1.0, 1.0, 1.0, 1.0);
    }

    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;
    let key = (1.0 - r).min(1.0 - g).min(1.0 - b);

    Cmyk::new(
        round_to((1.0 - r - key) / (1.0 - key), COMPONENT_PLACES),
        round_to((1.0 - g - key) / (1.0 - key), COMPONENT_PLACES),
        round_to((1.0 - b - key) / (1.0 - key), COMPONENT_PLACES),
        round_to(key, COMPONENT_PLACES),
    )
}

/// Converts CMYK to an opaque ARGB colour, truncating each channel to a byte.
pub fn cmyk_to_argb(c: Cmyk) -> Argb {
    let cyan = c.cyan * (1.0 - c.key) + c.key;
    let magenta = c.magenta * (1.0 - c.key) + c.key;
    let yellow = c.yellow * (1.0 - c.key) + c.key;
    Argb::rgb(
        to_byte((1.0 - cyan) * 255.0),
        to_byte((1.0 - magenta) * 255.0),
        to_byte((1.0 - yellow) * 255.0),
    )
}

/// Converts ARGB to HSV. Alpha is ignored.
///
/// Black yields hue 0 and saturation 0. Achromatic colours (all channels
/// equal) yield hue 0 rather than an indeterminate `0 / 0`.
pub fn argb_to_hsv(c: Argb) -> Hsv {
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let (hue, saturation) = if approx_eq(max, 0.0) || approx_eq(delta, 0.0) {
        (0.0, 0.0)
    } else {
        let sector = if approx_eq(max, r) {
            (g - b) / delta
        } else if approx_eq(max, g) {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let degrees = sector * 60.0;
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
        (degrees, delta / max)
    };

    Hsv::new(
        round_to(hue / 360.0, COMPONENT_PLACES),
        round_to(saturation, COMPONENT_PLACES),
        round_to(max / 255.0, COMPONENT_PLACES),
    )
}

/// Converts HSV to an opaque ARGB colour using the six-sector algorithm.
///
/// Zero saturation yields opaque white.
pub fn hsv_to_argb(c: Hsv) -> Argb {
    if approx_eq(c.saturation, 0.0) {
        return Argb::WHITE;
    }

    let v = c.value;
    let s = c.saturation;
    let sector = c.hue_degrees() / 60.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = if approx_eq(i, 0.0) {
        (v, t, p)
    } else if approx_eq(i, 1.0) {
        (q, v, p)
    } else if approx_eq(i, 2.0) {
        (p, v, t)
    } else if approx_eq(i, 3.0) {
        (p, q, v)
    } else if approx_eq(i, 4.0) {
        (t, p, v)
    } else {
        (v, p, q)
    };

    Argb::rgb(to_byte(255.0 * r), to_byte(255.0 * g), to_byte(255.0 * b))
}

/// Inverts each colour channel, keeping alpha.
pub fn negative(c: Argb) -> Argb {
    Argb::new(c.a, 255 - c.r, 255 - c.g, 255 - c.b)
}

/// Truncates toward zero into the byte range.
fn to_byte(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
