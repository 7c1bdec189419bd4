//! Swatch orderings used to re-sort a palette.
//!
//! Every ordering except [`RandomOrder`] is a total order. The random order
//! answers each comparison with a fresh coin toss, so it can contradict
//! itself. All orders are applied with one stable merge sort that only ever
//! permutes the input, whatever the answers are, and that stops between merge
//! steps once cancelled.

use crate::cancel::CancelToken;
use crate::color::{argb_to_cmyk, argb_to_hsv, Argb};
use crate::error::SwatchError;
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// All sort order names, in menu order.
const ORDER_NAMES: &[&str] = &["argb", "cmyk", "hsv", "greyscale", "random"];

/// Compares two swatch colours.
///
/// Object-safe so the palette can sort through `&mut dyn SwatchComparator`.
pub trait SwatchComparator {
    fn compare(&mut self, a: &Argb, b: &Argb) -> Ordering;
}

/// Higher red first, then higher green, blue, and alpha.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgbOrder;

/// Higher cyan first, then higher magenta, yellow, and key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmykOrder;

/// Lower hue first, then lower saturation, then lower value.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsvOrder;

/// Darker first, by alpha-weighted mean brightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreyscaleOrder;

/// Uniformly random -1/0/1 per comparison. Not a valid total order.
#[derive(Debug, Clone)]
pub struct RandomOrder {
    rng: Xorshift64,
}

impl RandomOrder {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xorshift64::new(seed),
        }
    }
}

/// Compares two already-rounded components; treats -0.0 and 0.0 as equal.
fn cmp_component(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn compare_argb(a: &Argb, b: &Argb) -> Ordering {
    b.r.cmp(&a.r)
        .then(b.g.cmp(&a.g))
        .then(b.b.cmp(&a.b))
        .then(b.a.cmp(&a.a))
}

pub fn compare_cmyk(a: &Argb, b: &Argb) -> Ordering {
    let (a, b) = (argb_to_cmyk(*a), argb_to_cmyk(*b));
    cmp_component(b.cyan, a.cyan)
        .then(cmp_component(b.magenta, a.magenta))
        .then(cmp_component(b.yellow, a.yellow))
        .then(cmp_component(b.key, a.key))
}

pub fn compare_hsv(a: &Argb, b: &Argb) -> Ordering {
    let (a, b) = (argb_to_hsv(*a), argb_to_hsv(*b));
    cmp_component(a.hue, b.hue)
        .then(cmp_component(a.saturation, b.saturation))
        .then(cmp_component(a.value, b.value))
}

pub fn compare_greyscale(a: &Argb, b: &Argb) -> Ordering {
    grey_level(*a).cmp(&grey_level(*b))
}

/// `(R + G + B) / 3` scaled by alpha, truncated to a byte.
pub fn grey_level(c: Argb) -> u8 {
    let mean = (c.r as f64 + c.g as f64 + c.b as f64) / 3.0;
    (mean / 255.0 * c.a as f64) as u8
}

impl SwatchComparator for ArgbOrder {
    fn compare(&mut self, a: &Argb, b: &Argb) -> Ordering {
        compare_argb(a, b)
    }
}

impl SwatchComparator for CmykOrder {
    fn compare(&mut self, a: &Argb, b: &Argb) -> Ordering {
        compare_cmyk(a, b)
    }
}

impl SwatchComparator for HsvOrder {
    fn compare(&mut self, a: &Argb, b: &Argb) -> Ordering {
        compare_hsv(a, b)
    }
}

impl SwatchComparator for GreyscaleOrder {
    fn compare(&mut self, a: &Argb, b: &Argb) -> Ordering {
        compare_greyscale(a, b)
    }
}

impl SwatchComparator for RandomOrder {
    fn compare(&mut self, _a: &Argb, _b: &Argb) -> Ordering {
        self.rng.next_ordering()
    }
}

/// Named sort orders, as offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Argb,
    Cmyk,
    Hsv,
    Greyscale,
    Random,
}

impl SortOrder {
    pub fn from_name(name: &str) -> Result<Self, SwatchError> {
        match name.to_ascii_lowercase().as_str() {
            "argb" | "rgb" => Ok(SortOrder::Argb),
            "cmyk" | "cmy" => Ok(SortOrder::Cmyk),
            "hsv" => Ok(SortOrder::Hsv),
            "greyscale" | "grayscale" => Ok(SortOrder::Greyscale),
            "random" => Ok(SortOrder::Random),
            _ => Err(SwatchError::UnknownName {
                kind: "sort order",
                name: name.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Argb => "argb",
            SortOrder::Cmyk => "cmyk",
            SortOrder::Hsv => "hsv",
            SortOrder::Greyscale => "greyscale",
            SortOrder::Random => "random",
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        ORDER_NAMES
    }

    /// Builds the comparator. `seed` only affects [`SortOrder::Random`].
    pub fn comparator(self, seed: u64) -> Box<dyn SwatchComparator + Send> {
        match self {
            SortOrder::Argb => Box::new(ArgbOrder),
            SortOrder::Cmyk => Box::new(CmykOrder),
            SortOrder::Hsv => Box::new(HsvOrder),
            SortOrder::Greyscale => Box::new(GreyscaleOrder),
            SortOrder::Random => Box::new(RandomOrder::new(seed)),
        }
    }
}

/// Sorts `colors` in place with `comparator`.
///
/// Stable for total orders. Inconsistent comparators still yield a
/// permutation of the input. Returns `false` if the token was cancelled
/// before the sort finished; `colors` is then a partially merged
/// permutation and should be discarded.
pub fn sort_colors(
    colors: &mut [Argb],
    comparator: &mut dyn SwatchComparator,
    token: &CancelToken,
) -> bool {
    merge_sort_by(colors, &mut |a: &Argb, b: &Argb| comparator.compare(a, b), token)
}

/// Merged items between cancellation polls inside one merge.
const POLL_EVERY: usize = 4096;

fn merge_sort_by<F>(items: &mut [Argb], compare: &mut F, token: &CancelToken) -> bool
where
    F: FnMut(&Argb, &Argb) -> Ordering,
{
    if items.len() <= 1 {
        return true;
    }
    if token.is_cancelled() {
        return false;
    }
    let mid = items.len() / 2;
    if !merge_sort_by(&mut items[..mid], compare, token)
        || !merge_sort_by(&mut items[mid..], compare, token)
    {
        return false;
    }

    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, mid);
    while i < mid && j < items.len() {
        if merged.len() % POLL_EVERY == POLL_EVERY - 1 && token.is_cancelled() {
            return false;
        }
        if compare(&items[j], &items[i]) == Ordering::Less {
            merged.push(items[j]);
            j += 1;
        } else {
            merged.push(items[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&items[i..mid]);
    merged.extend_from_slice(&items[j..]);
    items.copy_from_slice(&merged);
    true
}
