//! Background runner for long palette operations.
//!
//! A [`Worker`] owns the shared palette and at most one in-flight operation.
//! Starting a new operation cancels the current one and waits for it to
//! stop, so two operations never mutate the palette at the same time.

use crate::gather::{gather, Region};
use crate::source::PixelSource;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use swatch_core::{
    CancelToken, DominanceMode, Outcome, Palette, PopulationMode, SortOrder, SwatchError,
    Xorshift64,
};
use tracing::{debug, info, warn};

/// A unit of work over the palette.
pub enum Operation {
    /// Re-sort. `None` seeds the random order from the clock.
    Sort { order: SortOrder, seed: Option<u64> },
    Filter { mode: DominanceMode, threshold: f64 },
    Dedupe,
    Populate(PopulationMode),
    Gather {
        source: Arc<dyn PixelSource + Send + Sync>,
        region: Region,
    },
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sort { order, seed } => f
                .debug_struct("Sort")
                .field("order", order)
                .field("seed", seed)
                .finish(),
            Operation::Filter { mode, threshold } => f
                .debug_struct("Filter")
                .field("mode", mode)
                .field("threshold", threshold)
                .finish(),
            Operation::Dedupe => f.write_str("Dedupe"),
            Operation::Populate(mode) => f.debug_tuple("Populate").field(mode).finish(),
            Operation::Gather { region, .. } => {
                f.debug_struct("Gather").field("region", region).finish_non_exhaustive()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    Sort,
    Filter,
    Dedupe,
    Populate,
    Gather,
}

impl OperationKind {
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Sort => "sort",
            OperationKind::Filter => "filter",
            OperationKind::Dedupe => "dedupe",
            OperationKind::Populate => "populate",
            OperationKind::Gather => "gather",
        }
    }

    fn finished(self, outcome: &Outcome) -> String {
        match self {
            OperationKind::Sort => "Colour sort finished".to_string(),
            // Dedupe runs as a filter pass.
            OperationKind::Filter | OperationKind::Dedupe => "Colour filter finished".to_string(),
            OperationKind::Populate => "Colour population finished".to_string(),
            OperationKind::Gather => format!(
                "Screen region gather finished, {} colours were found",
                outcome.added
            ),
        }
    }
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Sort { .. } => OperationKind::Sort,
            Operation::Filter { .. } => OperationKind::Filter,
            Operation::Dedupe => OperationKind::Dedupe,
            Operation::Populate(_) => OperationKind::Populate,
            Operation::Gather { .. } => OperationKind::Gather,
        }
    }

    /// Runs to completion (or cancellation) on the calling thread.
    pub fn run(self, palette: &Mutex<Palette>, token: &CancelToken) -> Report {
        let kind = self.kind();
        debug!(operation = kind.name(), "operation started");
        let mut palette = lock(palette);
        let result = match self {
            Operation::Sort { order, seed } => {
                let seed = seed.unwrap_or_else(|| Xorshift64::from_clock().next_u64());
                let mut comparator = order.comparator(seed);
                Ok(palette.sort(comparator.as_mut(), token))
            }
            Operation::Filter { mode, threshold } => palette.filter(mode, threshold, token),
            Operation::Dedupe => Ok(palette.remove_duplicates(token)),
            Operation::Populate(mode) => Ok(palette.populate(mode.colors(), token)),
            Operation::Gather { source, region } => {
                gather(source.as_ref(), region, &mut *palette, token)
            }
        };
        let len = palette.len();
        drop(palette);
        Report::new(kind, result, len)
    }
}

/// What happened to one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kind: OperationKind,
    pub status: String,
    pub outcome: Option<Outcome>,
    pub error: Option<String>,
}

impl Report {
    fn new(kind: OperationKind, result: Result<Outcome, SwatchError>, len: usize) -> Self {
        match result {
            Ok(outcome) => {
                if outcome.cancelled {
                    warn!(operation = kind.name(), "operation cancelled");
                }
                info!(
                    operation = kind.name(),
                    added = outcome.added,
                    removed = outcome.removed,
                    swatches = len,
                    "operation finished"
                );
                Self {
                    kind,
                    status: kind.finished(&outcome),
                    outcome: Some(outcome),
                    error: None,
                }
            }
            Err(e) => Self::failed(kind, e.to_string()),
        }
    }

    fn failed(kind: OperationKind, error: String) -> Self {
        warn!(operation = kind.name(), error = %error, "operation failed");
        Self {
            kind,
            status: format!("There was an error during the {}: {error}", kind.name()),
            outcome: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn was_cancelled(&self) -> bool {
        self.outcome.is_some_and(|o| o.cancelled)
    }
}

/// Handle to an operation running on its own thread.
///
/// Dropping the handle cancels the operation and joins the thread.
pub struct OperationHandle {
    kind: OperationKind,
    token: CancelToken,
    thread: Option<JoinHandle<Report>>,
}

impl OperationHandle {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Requests cancellation without waiting.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Blocks until the operation ends and returns its report.
    pub fn join(mut self) -> Report {
        match self.thread.take() {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Report::failed(self.kind, "operation thread panicked".into())),
            None => Report::failed(self.kind, "operation already joined".into()),
        }
    }
}

impl Drop for OperationHandle {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Owns the palette and runs one operation at a time against it.
pub struct Worker {
    palette: Arc<Mutex<Palette>>,
    current: Option<OperationHandle>,
}

impl Worker {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette: Arc::new(Mutex::new(palette)),
            current: None,
        }
    }

    /// Shared handle to the palette.
    pub fn palette(&self) -> Arc<Mutex<Palette>> {
        Arc::clone(&self.palette)
    }

    /// A copy of the palette as it is now. Blocks while an operation holds it.
    pub fn snapshot(&self) -> Palette {
        lock(&self.palette).clone()
    }

    /// Runs `f` against the palette under its lock, after any in-flight
    /// operation has released it.
    pub fn with_palette<R>(&self, f: impl FnOnce(&mut Palette) -> R) -> R {
        let mut palette = lock(&self.palette);
        f(&mut *palette)
    }

    /// Cancels and joins any in-flight operation, then starts `op` on a new
    /// thread. Returns the report of the operation that was replaced.
    pub fn start(&mut self, op: Operation) -> Result<Option<Report>, SwatchError> {
        let (handle, replaced) = self.launch(op)?;
        self.current = Some(handle);
        Ok(replaced)
    }

    fn launch(&mut self, op: Operation) -> Result<(OperationHandle, Option<Report>), SwatchError> {
        let replaced = self.current.take().map(|prev| {
            prev.cancel();
            let report = prev.join();
            debug!(operation = report.kind.name(), "previous operation replaced");
            report
        });

        let kind = op.kind();
        let token = CancelToken::new();
        let palette = Arc::clone(&self.palette);
        let thread_token = token.clone();
        let thread = thread::Builder::new()
            .name(format!("swatch-{}", kind.name()))
            .spawn(move || op.run(&palette, &thread_token))?;

        let handle = OperationHandle {
            kind,
            token,
            thread: Some(thread),
        };
        Ok((handle, replaced))
    }

    /// Requests cancellation of the in-flight operation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = &self.current {
            handle.cancel();
        }
    }

    /// Waits for the in-flight operation. `None` when idle.
    pub fn wait(&mut self) -> Option<Report> {
        self.current.take().map(OperationHandle::join)
    }

    /// True when no operation is running.
    pub fn is_idle(&self) -> bool {
        self.current.as_ref().map_or(true, OperationHandle::is_finished)
    }

    /// Starts `op` and waits for it.
    pub fn run(&mut self, op: Operation) -> Result<Report, SwatchError> {
        let (handle, _) = self.launch(op)?;
        Ok(handle.join())
    }
}

fn lock(palette: &Mutex<Palette>) -> MutexGuard<'_, Palette> {
    palette.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PixelGrid;
    use std::time::{Duration, Instant};
    use swatch_core::Argb;

    /// Source that sleeps on every sample so operations over it stay in flight.
    struct Slow(PixelGrid);

    impl PixelSource for Slow {
        fn dimensions(&self) -> (u32, u32) {
            self.0.dimensions()
        }

        fn sample(&self, x: u32, y: u32) -> Result<Argb, SwatchError> {
            thread::sleep(Duration::from_millis(1));
            self.0.sample(x, y)
        }
    }

    fn slow_gather() -> Operation {
        let pixels = (0..1000u32).map(|i| Argb::rgb((i % 256) as u8, (i / 256) as u8, 0)).collect();
        let grid = PixelGrid::new(1000, 1, pixels).unwrap();
        Operation::Gather {
            source: Arc::new(Slow(grid)),
            region: Region::full(1000, 1),
        }
    }

    #[test]
    fn populate_runs_in_background_and_reports() {
        let mut worker = Worker::new(Palette::new());
        let report = worker.run(Operation::Populate(PopulationMode::Grayscale)).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.kind, OperationKind::Populate);
        assert_eq!(report.status, "Colour population finished");
        assert_eq!(report.outcome.unwrap().added, 255);
        assert_eq!(worker.snapshot().len(), 255);
        assert!(worker.is_idle());
    }

    #[test]
    fn sort_with_fixed_seed_is_reproducible() {
        let run = |seed| {
            let mut worker = Worker::new(Palette::new());
            worker.run(Operation::Populate(PopulationMode::Reds)).unwrap();
            worker
                .run(Operation::Sort { order: SortOrder::Random, seed: Some(seed) })
                .unwrap();
            worker.snapshot()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn invalid_filter_reports_error_and_leaves_palette() {
        let mut worker = Worker::new(Palette::from_colors(vec![Argb::WHITE, Argb::BLACK]));
        let report = worker
            .run(Operation::Filter { mode: DominanceMode::DominantRgb, threshold: 2.0 })
            .unwrap();
        assert!(!report.is_ok());
        assert!(report.error.unwrap().contains("threshold"));
        assert!(report.status.starts_with("There was an error"));
        assert_eq!(worker.snapshot().len(), 2);
    }

    #[test]
    fn gather_status_counts_colours() {
        let grid = PixelGrid::new(2, 2, vec![Argb::WHITE, Argb::BLACK, Argb::WHITE, Argb::WHITE]).unwrap();
        let mut worker = Worker::new(Palette::new());
        let report = worker
            .run(Operation::Gather { source: Arc::new(grid), region: Region::full(2, 2) })
            .unwrap();
        assert_eq!(report.status, "Screen region gather finished, 2 colours were found");
    }

    #[test]
    fn starting_a_new_operation_cancels_the_old_one() {
        let mut worker = Worker::new(Palette::new());
        assert!(worker.start(slow_gather()).unwrap().is_none());
        let replaced = worker.start(Operation::Dedupe).unwrap().unwrap();
        assert_eq!(replaced.kind, OperationKind::Gather);
        assert!(replaced.was_cancelled());

        let report = worker.wait().unwrap();
        assert_eq!(report.kind, OperationKind::Dedupe);
        assert!(worker.snapshot().len() < 1000);
    }

    #[test]
    fn cancel_then_wait_reports_cancellation() {
        let mut worker = Worker::new(Palette::new());
        worker.start(slow_gather()).unwrap();
        worker.cancel();
        let report = worker.wait().unwrap();
        assert!(report.was_cancelled());
        assert!(worker.wait().is_none());
    }

    #[test]
    fn cancelling_a_large_sort_stops_it_early() {
        let colors: Vec<Argb> = (0..1_000_000u32)
            .map(|i| Argb::rgb((i % 251) as u8, (i / 251 % 256) as u8, (i % 241) as u8))
            .collect();
        let mut worker = Worker::new(Palette::from_colors(colors.clone()));
        worker
            .start(Operation::Sort { order: SortOrder::Cmyk, seed: None })
            .unwrap();
        thread::sleep(Duration::from_millis(20));

        let started = Instant::now();
        worker.cancel();
        let report = worker.wait().unwrap();
        let latency = started.elapsed();

        assert!(report.was_cancelled());
        assert!(latency < Duration::from_millis(250), "stopped after {latency:?}");
        assert_eq!(worker.snapshot().colors(), colors.as_slice());
    }

    #[test]
    fn run_joins_its_own_operation_after_replacing_one() {
        let mut worker = Worker::new(Palette::new());
        worker.start(slow_gather()).unwrap();
        let report = worker.run(Operation::Populate(PopulationMode::Reds)).unwrap();
        assert_eq!(report.kind, OperationKind::Populate);
        assert!(worker.wait().is_none());
        assert!(worker.is_idle());
    }

    #[test]
    fn dropping_the_worker_stops_the_operation() {
        let mut worker = Worker::new(Palette::new());
        worker.start(slow_gather()).unwrap();
        let palette = worker.palette();
        drop(worker);
        assert!(lock(&palette).len() < 1000);
    }

    #[test]
    fn with_palette_edits_between_operations() {
        let mut worker = Worker::new(Palette::new());
        worker.with_palette(|p| p.extend([Argb::WHITE, Argb::WHITE, Argb::BLACK]));
        let report = worker.run(Operation::Dedupe).unwrap();
        assert_eq!(report.status, "Colour filter finished");
        assert_eq!(worker.with_palette(|p| p.len()), 2);
    }

    #[test]
    fn operation_debug_hides_the_source() {
        let text = format!("{:?}", slow_gather());
        assert!(text.starts_with("Gather"));
        assert!(text.contains("region"));
    }
}
