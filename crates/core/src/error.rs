//! Error types for the swatch core.

use thiserror::Error;

/// Errors produced by colour parsing, palette operations, and settings I/O.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// A colour string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A dominance threshold was outside the normalised range.
    #[error("dominance threshold {0} is outside of normalised range (0.0 - 1.0)")]
    InvalidThreshold(f64),

    /// A mode, order, or table name was not recognised.
    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    /// The operation needs at least one swatch.
    #[error("palette is empty")]
    EmptyPalette,

    /// A gather region does not fit inside the pixel source.
    #[error(
        "region ({left}, {top})-({right}, {bottom}) is not valid for a source of size ({width}, {height})"
    )]
    InvalidRegion {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },

    /// An (x, y) sample position was outside the pixel source.
    #[error("position ({x}, {y}) out of bounds for source of size ({width}, {height})")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The file extension does not name a supported image encoding.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// The settings file could not be parsed, or a setting value was rejected.
    #[error("settings error: {0}")]
    Settings(String),

    /// The pixel source failed to produce a sample.
    #[error("sampling failed: {0}")]
    Sample(String),
}

impl From<std::io::Error> for SwatchError {
    fn from(e: std::io::Error) -> Self {
        SwatchError::Io(e.to_string())
    }
}
