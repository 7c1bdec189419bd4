//! Pixel sources: anything that can be sampled at an (x, y) position.

use swatch_core::{Argb, SwatchError};

/// A 2-D grid of pixels that can be sampled one position at a time.
///
/// Screen capture, decoded images and in-memory grids all sit behind this.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The colour at `(x, y)`. Positions outside the source are an error.
    fn sample(&self, x: u32, y: u32) -> Result<Argb, SwatchError>;
}

/// An owned, row-major pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl PixelGrid {
    /// Requires `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Argb>) -> Result<Self, SwatchError> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return Err(SwatchError::Sample(format!(
                "{} pixels do not fill a {width}x{height} grid",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grid from an RGBA8 byte buffer.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, SwatchError> {
        if rgba.len() % 4 != 0 {
            return Err(SwatchError::Sample("RGBA buffer length is not a multiple of 4".into()));
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|p| Argb::new(p[3], p[0], p[1], p[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Flattens to an RGBA8 byte buffer.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }
}

impl PixelSource for PixelGrid {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn sample(&self, x: u32, y: u32) -> Result<Argb, SwatchError> {
        if x >= self.width || y >= self.height {
            return Err(SwatchError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }
}
