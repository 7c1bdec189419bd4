//! Region gather: collect every distinct colour inside a rectangle.

use crate::source::PixelSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use swatch_core::{CancelToken, Outcome, Palette, SwatchError};
use tracing::debug;

/// A pixel rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    /// Builds a region from two opposite corners given in any order.
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        Self {
            left: a.0.min(b.0),
            top: a.1.min(b.1),
            right: a.0.max(b.0),
            bottom: a.1.max(b.1),
        }
    }

    /// The whole of a `width x height` source.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    fn check(&self, width: u32, height: u32) -> Result<(), SwatchError> {
        if self.left > self.right || self.top > self.bottom || self.right > width || self.bottom > height {
            return Err(SwatchError::InvalidRegion {
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Appends each colour in `region` to the palette the first time it is seen,
/// scanning row-major.
///
/// The region is checked against the source before anything is added. On
/// cancellation or a sampling error the colours found so far stay in the
/// palette; a sampling error is still returned.
pub fn gather(
    source: &dyn PixelSource,
    region: Region,
    palette: &mut Palette,
    token: &CancelToken,
) -> Result<Outcome, SwatchError> {
    let (width, height) = source.dimensions();
    region.check(width, height)?;

    let rows = region.height();
    let mut seen = HashSet::new();
    let mut outcome = Outcome::default();
    'rows: for y in region.top..region.bottom {
        for x in region.left..region.right {
            if token.is_cancelled() {
                outcome.cancelled = true;
                break 'rows;
            }
            let color = source.sample(x, y)?;
            if seen.insert(color) {
                palette.add(color);
                outcome.added += 1;
            }
        }
        let row = y - region.top + 1;
        debug!(
            row,
            rows,
            percent = 100.0 * row as f64 / rows as f64,
            found = outcome.added,
            "gathering region"
        );
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PixelGrid;
    use swatch_core::Argb;

    const A: Argb = Argb::rgb(10, 0, 0);
    const B: Argb = Argb::rgb(0, 20, 0);
    const C: Argb = Argb::rgb(0, 0, 30);

    /// 3x2:
    /// A B A
    /// C A B
    fn source() -> PixelGrid {
        PixelGrid::new(3, 2, vec![A, B, A, C, A, B]).unwrap()
    }

    #[test]
    fn corners_are_normalised() {
        let r = Region::from_corners((5, 1), (2, 4));
        assert_eq!(r, Region { left: 2, top: 1, right: 5, bottom: 4 });
        assert_eq!((r.width(), r.height()), (3, 3));
    }

    #[test]
    fn full_gather_finds_distinct_colours_in_scan_order() {
        let mut palette = Palette::new();
        let outcome = gather(&source(), Region::full(3, 2), &mut palette, &CancelToken::new()).unwrap();
        assert_eq!(outcome.added, 3);
        assert_eq!(palette.colors(), &[A, B, C]);
    }

    #[test]
    fn right_and_bottom_are_exclusive() {
        let mut palette = Palette::new();
        let region = Region::from_corners((1, 0), (2, 2));
        gather(&source(), region, &mut palette, &CancelToken::new()).unwrap();
        // Column 1 only: B then A.
        assert_eq!(palette.colors(), &[B, A]);
    }

    #[test]
    fn gather_appends_even_if_palette_already_has_the_colour() {
        let mut palette = Palette::from_colors(vec![A]);
        gather(&source(), Region::full(3, 1), &mut palette, &CancelToken::new()).unwrap();
        assert_eq!(palette.colors(), &[A, A, B]);
    }

    #[test]
    fn empty_region_adds_nothing() {
        let mut palette = Palette::new();
        let outcome = gather(&source(), Region::from_corners((1, 1), (1, 1)), &mut palette, &CancelToken::new())
            .unwrap();
        assert_eq!(outcome.added, 0);
        assert!(palette.is_empty());
    }

    #[test]
    fn region_outside_source_is_rejected_before_mutation() {
        let mut palette = Palette::new();
        let err = gather(&source(), Region::full(4, 2), &mut palette, &CancelToken::new()).unwrap_err();
        assert!(matches!(err, SwatchError::InvalidRegion { right: 4, width: 3, .. }));
        assert!(palette.is_empty());
    }

    #[test]
    fn cancelled_gather_keeps_nothing_new() {
        let token = CancelToken::new();
        token.cancel();
        let mut palette = Palette::new();
        let outcome = gather(&source(), Region::full(3, 2), &mut palette, &token).unwrap();
        assert!(outcome.cancelled);
        assert!(palette.is_empty());
    }

    struct Flaky;

    impl PixelSource for Flaky {
        fn dimensions(&self) -> (u32, u32) {
            (2, 1)
        }

        fn sample(&self, x: u32, _y: u32) -> Result<Argb, SwatchError> {
            if x == 0 {
                Ok(A)
            } else {
                Err(SwatchError::Sample("capture lost".into()))
            }
        }
    }

    #[test]
    fn sampling_error_keeps_partial_results() {
        let mut palette = Palette::new();
        let err = gather(&Flaky, Region::full(2, 1), &mut palette, &CancelToken::new()).unwrap_err();
        assert!(matches!(err, SwatchError::Sample(_)));
        assert_eq!(palette.colors(), &[A]);
    }
}
