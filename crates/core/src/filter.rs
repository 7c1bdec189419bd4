//! Dominance-based swatch filters.
//!
//! A [`DominanceMode`] names the class of colour that a filter pass discards.
//! Channel dominance is measured as the spread (max - min) over a channel
//! triad: R, G, B on the byte scale, or C, M, Y on the normalised scale.

use crate::color::{argb_to_cmyk, Argb};
use crate::error::SwatchError;
use serde::{Deserialize, Serialize};

const MODE_NAMES: &[&str] = &[
    "non-dominant-rgb",
    "dominant-rgb",
    "non-dominant-cmy",
    "dominant-cmy",
    "gray",
    "non-gray",
];

/// Default dominance threshold offered to users.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Which swatches a filter pass discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DominanceMode {
    /// Keeps RGB spread at or above the threshold, discarding balanced colours.
    NonDominantRgb,
    /// Keeps RGB spread below the threshold, discarding colours with a dominant channel.
    DominantRgb,
    /// Keeps CMY spread at or above the threshold.
    NonDominantCmy,
    /// Keeps CMY spread below the threshold.
    DominantCmy,
    /// Discards greys (R = G = B).
    Gray,
    /// Discards everything that is not grey.
    NonGray,
}

impl DominanceMode {
    pub fn from_name(name: &str) -> Result<Self, SwatchError> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "non-dominant-rgb" => Ok(DominanceMode::NonDominantRgb),
            "dominant-rgb" => Ok(DominanceMode::DominantRgb),
            "non-dominant-cmy" => Ok(DominanceMode::NonDominantCmy),
            "dominant-cmy" => Ok(DominanceMode::DominantCmy),
            "gray" | "grey" => Ok(DominanceMode::Gray),
            "non-gray" | "non-grey" => Ok(DominanceMode::NonGray),
            _ => Err(SwatchError::UnknownName {
                kind: "filter mode",
                name: name.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DominanceMode::NonDominantRgb => "non-dominant-rgb",
            DominanceMode::DominantRgb => "dominant-rgb",
            DominanceMode::NonDominantCmy => "non-dominant-cmy",
            DominanceMode::DominantCmy => "dominant-cmy",
            DominanceMode::Gray => "gray",
            DominanceMode::NonGray => "non-gray",
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        MODE_NAMES
    }

    /// Whether the mode reads the threshold at all.
    pub fn uses_threshold(self) -> bool {
        !matches!(self, DominanceMode::Gray | DominanceMode::NonGray)
    }
}

/// `max(a, b, c) - min(a, b, c)`.
pub fn spread(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c) - a.min(b).min(c)
}

/// A validated filter: a mode plus its threshold on the scale the mode compares at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominanceFilter {
    mode: DominanceMode,
    scaled: f64,
}

impl DominanceFilter {
    /// Validates `threshold` in [0, 1] and rescales it to bytes for the RGB modes.
    ///
    /// Out-of-range or NaN thresholds are rejected, never clamped.
    pub fn new(mode: DominanceMode, threshold: f64) -> Result<Self, SwatchError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SwatchError::InvalidThreshold(threshold));
        }
        let scaled = match mode {
            DominanceMode::DominantRgb | DominanceMode::NonDominantRgb => 255.0 * threshold,
            _ => threshold,
        };
        Ok(Self { mode, scaled })
    }

    pub fn mode(&self) -> DominanceMode {
        self.mode
    }

    /// Threshold on the comparison scale (bytes for RGB modes).
    pub fn scaled_threshold(&self) -> f64 {
        self.scaled
    }

    /// Whether `c` survives this filter.
    pub fn keeps(&self, c: Argb) -> bool {
        match self.mode {
            DominanceMode::DominantRgb => rgb_spread(c) < self.scaled,
            DominanceMode::NonDominantRgb => rgb_spread(c) >= self.scaled,
            DominanceMode::DominantCmy => cmy_spread(c) < self.scaled,
            DominanceMode::NonDominantCmy => cmy_spread(c) >= self.scaled,
            DominanceMode::Gray => !c.is_gray(),
            DominanceMode::NonGray => c.is_gray(),
        }
    }
}

fn rgb_spread(c: Argb) -> f64 {
    spread(c.r as f64, c.g as f64, c.b as f64)
}

fn cmy_spread(c: Argb) -> f64 {
    let cmyk = argb_to_cmyk(c);
    spread(cmyk.cyan, cmyk.magenta, cmyk.yellow)
}
