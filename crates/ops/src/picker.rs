//! Polling colour picker.

use crate::source::PixelSource;
use std::thread;
use std::time::Duration;
use swatch_core::{Argb, CancelToken, SwatchError};
use tracing::debug;

/// Default gap between samples while the pointer is held.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a picking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub samples: usize,
    pub last: Argb,
}

/// Samples the source at the pointer position until `held` turns false or
/// the token is cancelled.
///
/// One sample is always taken. Each sample is handed to `on_sample` before
/// sleeping `interval`. A sampling error ends the session and is returned.
pub fn pick<P, H, F>(
    source: &dyn PixelSource,
    mut pointer: P,
    mut held: H,
    token: &CancelToken,
    interval: Duration,
    mut on_sample: F,
) -> Result<Pick, SwatchError>
where
    P: FnMut() -> (u32, u32),
    H: FnMut() -> bool,
    F: FnMut(Argb),
{
    let mut samples = 0;
    loop {
        let (x, y) = pointer();
        let last = source.sample(x, y)?;
        samples += 1;
        on_sample(last);
        if !held() || token.is_cancelled() {
            debug!(samples, %last, "picking stopped");
            return Ok(Pick { samples, last });
        }
        thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PixelGrid;

    fn grid() -> PixelGrid {
        PixelGrid::new(
            2,
            1,
            vec![Argb::rgb(1, 2, 3), Argb::rgb(4, 5, 6)],
        )
        .unwrap()
    }

    #[test]
    fn takes_one_sample_when_not_held() {
        let mut seen = Vec::new();
        let pick = pick(
            &grid(),
            || (1, 0),
            || false,
            &CancelToken::new(),
            Duration::ZERO,
            |c| seen.push(c),
        )
        .unwrap();
        assert_eq!(pick, Pick { samples: 1, last: Argb::rgb(4, 5, 6) });
        assert_eq!(seen, vec![Argb::rgb(4, 5, 6)]);
    }

    #[test]
    fn follows_the_pointer_while_held() {
        let mut positions = vec![(1, 0), (0, 0), (1, 0)].into_iter();
        let mut remaining = 2;
        let mut seen = Vec::new();
        let pick = pick(
            &grid(),
            || positions.next().unwrap_or((0, 0)),
            || {
                remaining -= 1;
                remaining >= 0
            },
            &CancelToken::new(),
            Duration::ZERO,
            |c| seen.push(c.r),
        )
        .unwrap();
        assert_eq!(pick.samples, 3);
        assert_eq!(seen, vec![4, 1, 4]);
    }

    #[test]
    fn cancellation_stops_an_endless_hold() {
        let token = CancelToken::new();
        let mut count = 0;
        let pick = pick(
            &grid(),
            || (0, 0),
            || true,
            &token,
            Duration::ZERO,
            |_| {
                count += 1;
                if count == 5 {
                    token.cancel();
                }
            },
        )
        .unwrap();
        assert_eq!(pick.samples, 5);
    }

    #[test]
    fn sampling_error_is_returned() {
        let err = pick(
            &grid(),
            || (9, 9),
            || true,
            &CancelToken::new(),
            Duration::ZERO,
            |_| {},
        )
        .unwrap_err();
        assert!(matches!(err, SwatchError::OutOfBounds { .. }));
    }
}
