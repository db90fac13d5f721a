//! Quicksort engine state
//!
//! [`SortState`] owns the working array and the counters of the last run.
//! Sorting itself happens through the lazy [`QuickSort`] event stream, which
//! borrows the state mutably for its whole lifetime.

pub mod quicksort;
pub mod trace;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::config::SortConfig;
use crate::error::Result;

pub use quicksort::{QuickSort, SortEvent};
pub use trace::{highlights, BarStyle, Frames, SortFrame};

/// Cloneable handle that stops a running sort at its next segment
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_sorting(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Result of running a sort without observing its steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    pub comparisons: u64,
    pub cancelled: bool,
    pub elapsed_ms: Option<u64>,
}

#[derive(Debug)]
pub struct SortState {
    values: Vec<i64>,
    size: usize,
    comparisons: u64,
    last_elapsed: Option<Duration>,
    in_progress: Arc<AtomicBool>,
    config: SortConfig,
}

impl SortState {
    /// Fresh random array of `config.default_size` elements
    pub fn new(config: SortConfig) -> Self {
        let mut state = Self::empty(config);
        state.size = state.config.default_size;
        state.generate();
        state
    }

    /// Like [`SortState::new`] but reproducible from `seed`
    pub fn seeded(config: SortConfig, seed: u64) -> Self {
        let mut state = Self::empty(config);
        state.size = state.config.default_size;
        state.generate_with(&mut StdRng::seed_from_u64(seed));
        state
    }

    /// Fixed input, default config
    pub fn with_values(values: Vec<i64>) -> Self {
        let mut state = Self::empty(SortConfig::default());
        state.load(values);
        state
    }

    fn empty(config: SortConfig) -> Self {
        Self {
            values: Vec::new(),
            size: 0,
            comparisons: 0,
            last_elapsed: None,
            in_progress: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    /// Replace the array with `size` uniform values and zero the counter
    pub fn generate(&mut self) {
        self.generate_with(&mut rand::thread_rng());
    }

    pub fn generate_with<R: Rng>(&mut self, rng: &mut R) {
        let range = self.config.min_value..=self.config.max_value;
        self.values = (0..self.size).map(|_| rng.gen_range(range.clone())).collect();
        self.comparisons = 0;
        self.last_elapsed = None;
        debug!(size = self.size, "sort_generate");
    }

    /// Replace the array with fixed values; limits are the caller's concern
    pub fn load(&mut self, values: Vec<i64>) {
        self.size = values.len();
        self.values = values;
        self.comparisons = 0;
        self.last_elapsed = None;
    }

    /// Change the array size and regenerate
    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.check_size(size)?;
        self.size = size;
        self.generate();
        Ok(())
    }

    /// Seeded variant of [`SortState::resize`]
    pub fn resize_seeded(&mut self, size: usize, seed: u64) -> Result<()> {
        self.check_size(size)?;
        self.size = size;
        self.generate_with(&mut StdRng::seed_from_u64(seed));
        Ok(())
    }

    fn check_size(&self, size: usize) -> Result<()> {
        if !(self.config.min_size..=self.config.max_size).contains(&size) {
            crate::bail_invalid!(
                "array size",
                format!(
                    "{} (expected {}..={})",
                    size, self.config.min_size, self.config.max_size
                )
            );
        }
        Ok(())
    }

    /// Stop any run and start over with a fresh array
    pub fn reset(&mut self) {
        self.in_progress.store(false, Ordering::SeqCst);
        self.generate();
    }

    /// Handle that can clear the in-progress flag from elsewhere (e.g. Ctrl-C)
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.in_progress))
    }

    pub fn is_sorting(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// Start a sort run as a lazy event stream
    pub fn sort_steps(&mut self) -> QuickSort<'_> {
        QuickSort::new(self)
    }

    /// Start a sort run yielding array snapshots with each event
    pub fn sort_frames(&mut self) -> Frames<'_> {
        Frames::new(self.sort_steps())
    }

    /// Drain a sort run without pacing
    pub fn sort_to_completion(&mut self) -> SortSummary {
        let last = self.sort_steps().last();
        SortSummary {
            comparisons: self.comparisons,
            cancelled: matches!(last, Some(SortEvent::Cancelled { .. })),
            elapsed_ms: self
                .last_elapsed
                .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Comparisons made by the last (or current) run
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Wall time of the last completed run
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.last_elapsed
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }
}
