//! The palette store: an ordered list of swatches.
//!
//! Duplicates are allowed until [`Palette::remove_duplicates`] runs. Bulk
//! operations poll a [`CancelToken`] between per-swatch steps and leave
//! whatever they completed in place when cancelled.

use crate::cancel::CancelToken;
use crate::color::Argb;
use crate::compare::{sort_colors, SwatchComparator};
use crate::error::SwatchError;
use crate::filter::{DominanceFilter, DominanceMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// One palette entry and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub position: usize,
    pub color: Argb,
}

/// What a bulk operation did to the palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub added: usize,
    pub removed: usize,
    pub cancelled: bool,
}

/// An ordered sequence of colours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Argb>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_colors(colors: Vec<Argb>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(position, &color)| Swatch { position, color })
    }

    pub fn get(&self, position: usize) -> Option<Argb> {
        self.colors.get(position).copied()
    }

    pub fn last(&self) -> Option<Argb> {
        self.colors.last().copied()
    }

    /// Appends a swatch at the end.
    pub fn add(&mut self, color: Argb) {
        self.colors.push(color);
    }

    pub fn extend<I: IntoIterator<Item = Argb>>(&mut self, colors: I) {
        self.colors.extend(colors);
    }

    pub fn remove_last(&mut self) -> Option<Argb> {
        self.colors.pop()
    }

    /// Removes the swatch at `position`, shifting later swatches down.
    pub fn remove_at(&mut self, position: usize) -> Option<Argb> {
        (position < self.colors.len()).then(|| self.colors.remove(position))
    }

    /// Empties the palette, returning how many swatches were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.colors.len();
        self.colors.clear();
        n
    }

    /// Re-sorts the whole palette.
    ///
    /// The sort is all-or-nothing: a cancelled sort stops at the next merge
    /// step and leaves the order untouched.
    pub fn sort(&mut self, comparator: &mut dyn SwatchComparator, token: &CancelToken) -> Outcome {
        let mut sorted = self.colors.clone();
        if !sort_colors(&mut sorted, comparator, token) || token.is_cancelled() {
            return cancelled();
        }
        self.colors = sorted;
        debug!(len = self.colors.len(), "palette sorted");
        Outcome::default()
    }

    /// Drops every swatch the predicate rejects.
    ///
    /// On cancellation, swatches not yet visited are kept.
    pub fn retain_where<F>(&mut self, mut keep: F, token: &CancelToken) -> Outcome
    where
        F: FnMut(Argb) -> bool,
    {
        let mut kept = Vec::with_capacity(self.colors.len());
        let mut outcome = Outcome::default();
        for (i, &color) in self.colors.iter().enumerate() {
            if token.is_cancelled() {
                kept.extend_from_slice(&self.colors[i..]);
                outcome.cancelled = true;
                break;
            }
            if keep(color) {
                kept.push(color);
            } else {
                outcome.removed += 1;
            }
        }
        self.colors = kept;
        outcome
    }

    /// Applies a dominance filter. The threshold is validated before any
    /// swatch is touched.
    pub fn filter(
        &mut self,
        mode: DominanceMode,
        threshold: f64,
        token: &CancelToken,
    ) -> Result<Outcome, SwatchError> {
        let filter = DominanceFilter::new(mode, threshold)?;
        let outcome = self.retain_where(|c| filter.keeps(c), token);
        info!(
            mode = mode.name(),
            threshold,
            removed = outcome.removed,
            cancelled = outcome.cancelled,
            "palette filtered"
        );
        Ok(outcome)
    }

    /// Removes repeated colours, keeping the last occurrence of each.
    ///
    /// Colour groups are processed newest first-seen to oldest; a cancelled
    /// pass has already collapsed the groups it reached.
    pub fn remove_duplicates(&mut self, token: &CancelToken) -> Outcome {
        let mut groups: Vec<Argb> = Vec::new();
        let mut positions: HashMap<Argb, Vec<usize>> = HashMap::new();
        for (i, &color) in self.colors.iter().enumerate() {
            positions
                .entry(color)
                .or_insert_with(|| {
                    groups.push(color);
                    Vec::new()
                })
                .push(i);
        }

        let mut doomed = vec![false; self.colors.len()];
        let mut outcome = Outcome::default();
        for color in groups.iter().rev() {
            if token.is_cancelled() {
                outcome.cancelled = true;
                break;
            }
            let Some(seen) = positions.get(color) else {
                continue;
            };
            if let Some((_, earlier)) = seen.split_last() {
                for &p in earlier {
                    doomed[p] = true;
                    outcome.removed += 1;
                }
            }
        }

        let mut index = 0;
        self.colors.retain(|_| {
            let keep = !doomed[index];
            index += 1;
            keep
        });
        debug!(removed = outcome.removed, "duplicates removed");
        outcome
    }

    /// Appends every colour the generator yields, in order.
    pub fn populate<I>(&mut self, colors: I, token: &CancelToken) -> Outcome
    where
        I: IntoIterator<Item = Argb>,
    {
        let mut outcome = Outcome::default();
        for color in colors {
            if token.is_cancelled() {
                outcome.cancelled = true;
                break;
            }
            self.colors.push(color);
            outcome.added += 1;
        }
        outcome
    }
}

fn cancelled() -> Outcome {
    Outcome {
        cancelled: true,
        ..Outcome::default()
    }
}
