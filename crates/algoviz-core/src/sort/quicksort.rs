//! Lomuto quicksort as a lazy event stream
//!
//! Recursion is replaced by a task stack and the partition loop by a small
//! phase machine, so every `next()` performs exactly the work up to the next
//! visible event. The array is only ever changed by swaps, which keeps it a
//! permutation of the input at every step.

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::sort::SortState;

/// One visible step of the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SortEvent {
    /// The last element of `lo..=hi` becomes the pivot
    PivotSelected { index: usize, value: i64 },
    /// `values[index]` is compared against the pivot at `pivot`
    Compare { index: usize, pivot: usize },
    /// Two distinct positions exchanged their values
    Swap { i: usize, j: usize },
    /// The pivot reached its final position
    PivotPlaced { index: usize },
    /// Every element in `lo..=hi` is in final position
    SegmentSorted { lo: usize, hi: usize },
    /// The in-progress flag was cleared; no further events follow
    Cancelled { comparisons: u64 },
    /// The whole array is sorted
    Finished {
        comparisons: u64,
        #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
        elapsed: Duration,
    },
}

impl SortEvent {
    /// True for the last event of a run
    pub fn is_terminal(&self) -> bool {
        matches!(self, SortEvent::Cancelled { .. } | SortEvent::Finished { .. })
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { lo: usize, hi: usize },
    Finish { lo: usize, hi: usize },
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Select,
    Scan,
    Decide,
    Place,
    Placed,
}

#[derive(Debug, Clone, Copy)]
struct Partition {
    lo: usize,
    hi: usize,
    pivot: i64,
    scan: usize,
    store: usize,
    phase: Phase,
}

/// Lazy quicksort over a borrowed [`SortState`]
///
/// Dropping the iterator early clears the in-progress flag.
#[derive(Debug)]
pub struct QuickSort<'a> {
    state: &'a mut SortState,
    tasks: Vec<Task>,
    partition: Option<Partition>,
    started: Instant,
    done: bool,
}

impl<'a> QuickSort<'a> {
    pub(crate) fn new(state: &'a mut SortState) -> Self {
        state.comparisons = 0;
        state.last_elapsed = None;
        state.in_progress.store(true, Ordering::SeqCst);

        let tasks = match state.values.len() {
            0 | 1 => Vec::new(),
            n => vec![Task::Sort { lo: 0, hi: n - 1 }],
        };
        debug!(len = state.values.len(), "quicksort_start");

        Self {
            state,
            tasks,
            partition: None,
            started: Instant::now(),
            done: false,
        }
    }

    /// Array contents after the most recent event
    pub fn values(&self) -> &[i64] {
        &self.state.values
    }

    /// Comparisons made so far in this run
    pub fn comparisons(&self) -> u64 {
        self.state.comparisons
    }

    fn cancelled(&self) -> bool {
        !self.state.in_progress.load(Ordering::SeqCst)
    }

    /// Advance the current partition; `None` means no event this step
    fn step_partition(&mut self) -> Option<SortEvent> {
        let part = self.partition.as_mut()?;
        let values = &mut self.state.values;

        match part.phase {
            Phase::Select => {
                part.phase = Phase::Scan;
                Some(SortEvent::PivotSelected {
                    index: part.hi,
                    value: part.pivot,
                })
            }
            Phase::Scan if part.scan < part.hi => {
                self.state.comparisons += 1;
                part.phase = Phase::Decide;
                Some(SortEvent::Compare {
                    index: part.scan,
                    pivot: part.hi,
                })
            }
            Phase::Scan => {
                part.phase = Phase::Place;
                None
            }
            Phase::Decide => {
                let i = part.scan;
                part.scan += 1;
                part.phase = Phase::Scan;
                if values[i] >= part.pivot {
                    return None;
                }
                let j = part.store;
                part.store += 1;
                if i == j {
                    return None;
                }
                values.swap(i, j);
                Some(SortEvent::Swap { i: j, j: i })
            }
            Phase::Place => {
                part.phase = Phase::Placed;
                let (store, hi) = (part.store, part.hi);
                if store == hi {
                    return None;
                }
                values.swap(store, hi);
                Some(SortEvent::Swap { i: store, j: hi })
            }
            Phase::Placed => {
                let Partition { lo, hi, store, .. } = *part;
                self.partition = None;

                // Left segment pops first, then right, then the segment finish
                self.tasks.push(Task::Finish { lo, hi });
                if store + 1 < hi {
                    self.tasks.push(Task::Sort { lo: store + 1, hi });
                }
                if store > lo + 1 {
                    self.tasks.push(Task::Sort { lo, hi: store - 1 });
                }
                Some(SortEvent::PivotPlaced { index: store })
            }
        }
    }

    fn finish(&mut self) -> SortEvent {
        self.done = true;
        self.state.in_progress.store(false, Ordering::SeqCst);

        let elapsed = self.started.elapsed();
        self.state.last_elapsed = Some(elapsed);
        let comparisons = self.state.comparisons;
        debug!(comparisons, elapsed = ?elapsed, "quicksort_finished");
        SortEvent::Finished {
            comparisons,
            elapsed,
        }
    }

    fn cancel(&mut self) -> SortEvent {
        self.done = true;
        self.tasks.clear();
        let comparisons = self.state.comparisons;
        debug!(comparisons, "quicksort_cancelled");
        SortEvent::Cancelled { comparisons }
    }
}

impl Iterator for QuickSort<'_> {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        if self.done {
            return None;
        }

        loop {
            if self.partition.is_some() {
                if let Some(event) = self.step_partition() {
                    trace!(?event, "quicksort_step");
                    return Some(event);
                }
                continue;
            }

            match self.tasks.pop() {
                None => return Some(self.finish()),
                Some(Task::Sort { lo, hi }) => {
                    if self.cancelled() {
                        return Some(self.cancel());
                    }
                    self.partition = Some(Partition {
                        lo,
                        hi,
                        pivot: self.state.values[hi],
                        scan: lo,
                        store: lo,
                        phase: Phase::Select,
                    });
                }
                Some(Task::Finish { lo, hi }) => {
                    return Some(SortEvent::SegmentSorted { lo, hi });
                }
            }
        }
    }
}

impl Drop for QuickSort<'_> {
    fn drop(&mut self) {
        self.state.in_progress.store(false, Ordering::SeqCst);
    }
}
