#![deny(unsafe_code)]
//! Long-running palette operations and pixel plumbing.
//!
//! This crate sits between `swatch-core` (colour model and the palette store)
//! and front ends such as the CLI. It runs palette operations on a background
//! thread, samples pixel sources (polling picker, region gather), lays palettes
//! out as pixel grids, and reads and writes palette images.

pub mod gather;
pub mod picker;
pub mod pixel;
pub mod runner;
pub mod source;

#[cfg(feature = "image")]
pub mod image_io;

pub use gather::{gather, Region};
pub use picker::{pick, Pick};
pub use runner::{Operation, OperationHandle, OperationKind, Report, Worker};
pub use source::{PixelGrid, PixelSource};
