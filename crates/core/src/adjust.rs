//! Step helpers for nudging a colour a notch at a time.

use crate::color::{Argb, Cmyk};

/// Step applied to byte channels.
pub const BYTE_STEP: u8 = 16;
/// Step applied to percentages.
pub const PERCENT_STEP: f64 = 10.0;

/// `+16`, or 255 once the value is 239 or more.
pub fn step_byte_up(v: u8) -> u8 {
    if v < 239 {
        v + BYTE_STEP
    } else {
        255
    }
}

/// `-16`, or 0 once the value is 15 or less.
pub fn step_byte_down(v: u8) -> u8 {
    if v > 15 {
        v - BYTE_STEP
    } else {
        0
    }
}

/// `+10` below 90, otherwise 100.
pub fn step_percent_up(v: f64) -> f64 {
    if v < 90.0 {
        v + PERCENT_STEP
    } else {
        100.0
    }
}

/// `-10` above 9, otherwise 0. Never goes negative.
pub fn step_percent_down(v: f64) -> f64 {
    if v > 9.0 {
        (v - PERCENT_STEP).max(0.0)
    } else {
        0.0
    }
}

/// Steps R, G and B up together. Alpha is kept.
pub fn brighten(c: Argb) -> Argb {
    Argb::new(c.a, step_byte_up(c.r), step_byte_up(c.g), step_byte_up(c.b))
}

/// Steps R, G and B down together. Alpha is kept.
pub fn darken(c: Argb) -> Argb {
    Argb::new(c.a, step_byte_down(c.r), step_byte_down(c.g), step_byte_down(c.b))
}

/// Steps alpha up, making the colour more opaque.
pub fn raise_alpha(c: Argb) -> Argb {
    Argb { a: step_byte_up(c.a), ..c }
}

/// Steps alpha down, making the colour more transparent.
pub fn lower_alpha(c: Argb) -> Argb {
    Argb { a: step_byte_down(c.a), ..c }
}

/// One CMYK component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmykChannel {
    Cyan,
    Magenta,
    Yellow,
    Key,
}

/// Steps one CMYK component by ten percentage points.
pub fn nudge_cmyk(c: Cmyk, channel: CmykChannel, up: bool) -> Cmyk {
    let step = |v: f64| {
        let percent = v * 100.0;
        let stepped = if up {
            step_percent_up(percent)
        } else {
            step_percent_down(percent)
        };
        stepped / 100.0
    };
    match channel {
        CmykChannel::Cyan => Cmyk { cyan: step(c.cyan), ..c },
        CmykChannel::Magenta => Cmyk { magenta: step(c.magenta), ..c },
        CmykChannel::Yellow => Cmyk { yellow: step(c.yellow), ..c },
        CmykChannel::Key => Cmyk { key: step(c.key), ..c },
    }
}
