//! Pure-computation layout of a palette onto a square pixel grid.
//!
//! Always available (no feature gate) so that export and any in-memory
//! preview share the same layout.

use crate::source::PixelGrid;
use swatch_core::{Argb, Palette, SwatchError};

/// Side length of the smallest square holding `n` swatches: `ceil(sqrt(n))`.
pub fn grid_side(n: usize) -> u32 {
    let mut side = (n as f64).sqrt() as u32;
    // Float sqrt can land one off for large n.
    while (side as u64) * (side as u64) < n as u64 {
        side += 1;
    }
    while side > 0 && ((side - 1) as u64) * ((side - 1) as u64) >= n as u64 {
        side -= 1;
    }
    side
}

/// Lays the palette out row-major on a `side x side` grid, one pixel per
/// swatch. Cells past the last swatch are transparent.
///
/// Returns `SwatchError::EmptyPalette` for an empty palette.
pub fn palette_to_grid(palette: &Palette) -> Result<PixelGrid, SwatchError> {
    if palette.is_empty() {
        return Err(SwatchError::EmptyPalette);
    }
    let side = grid_side(palette.len());
    let cells = side as usize * side as usize;
    let pixels: Vec<Argb> = palette
        .colors()
        .iter()
        .copied()
        .chain(std::iter::repeat(Argb::TRANSPARENT))
        .take(cells)
        .collect();
    PixelGrid::new(side, side, pixels)
}

/// [`palette_to_grid`] flattened to RGBA8 bytes, with the grid side.
pub fn palette_to_rgba(palette: &Palette) -> Result<(u32, Vec<u8>), SwatchError> {
    let grid = palette_to_grid(palette)?;
    Ok((grid.width(), grid.to_rgba()))
}
