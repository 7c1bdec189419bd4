#![deny(unsafe_code)]
//! Core types for the swatch palette utility.
//!
//! Provides the colour model (`Argb`, `Cmyk`, `Hsv`) and its conversions,
//! sort comparators, dominance filters, the `Palette` store with its
//! cancellable bulk operations, population generators, named colour tables,
//! value adjustment helpers, and persisted `Settings`.

pub mod adjust;
pub mod cancel;
pub mod color;
pub mod compare;
pub mod error;
pub mod filter;
pub mod info;
pub mod named;
pub mod palette;
pub mod populate;
pub mod prng;
pub mod settings;

pub use cancel::CancelToken;
pub use color::{Argb, Cmyk, Hsv};
pub use compare::{SortOrder, SwatchComparator};
pub use error::SwatchError;
pub use filter::{DominanceFilter, DominanceMode};
pub use info::{parse_color, ColorInfo};
pub use palette::{Outcome, Palette, Swatch};
pub use populate::PopulationMode;
pub use prng::Xorshift64;
pub use settings::{ColorSpace, GridMode, Settings};
