//! Paced replay of step sequences
//!
//! Engines produce lazy step iterators and never sleep. The [`Pacer`] is the
//! single consumer: it hands each step to a sink, then waits the delay chosen
//! for that step's kind. Delays are given at the default speed of 500 ms and
//! scale linearly with `animation.speed_ms`; a speed of zero never sleeps.

use std::time::Duration;

use tracing::trace;

use crate::bst::{SearchStep, TreeNode};
use crate::config::AnimationConfig;
use crate::graph::PathStep;
use crate::sort::{SortEvent, SortFrame};

const REFERENCE_SPEED_MS: u64 = 500;

/// Delay classes for replayed steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    TraversalVisit,
    SearchProbe,
    SampleInsert,
    PivotSelected,
    Compare,
    Swap,
    SegmentSorted,
    PathVisit,
    PathSegment,
    /// Shown without waiting
    Immediate,
}

impl StepKind {
    /// Delay at the reference speed, in milliseconds
    fn reference_ms(&self) -> u64 {
        match self {
            StepKind::TraversalVisit | StepKind::SearchProbe => REFERENCE_SPEED_MS / 2,
            StepKind::SampleInsert | StepKind::PivotSelected => 300,
            StepKind::Compare | StepKind::PathVisit => 200,
            StepKind::Swap | StepKind::PathSegment => 600,
            StepKind::SegmentSorted => 100,
            StepKind::Immediate => 0,
        }
    }
}

/// A step that knows how long it should stay on screen
pub trait Paced {
    fn step_kind(&self) -> StepKind;
}

impl Paced for SortEvent {
    fn step_kind(&self) -> StepKind {
        match self {
            SortEvent::PivotSelected { .. } => StepKind::PivotSelected,
            SortEvent::Compare { .. } => StepKind::Compare,
            SortEvent::Swap { .. } => StepKind::Swap,
            SortEvent::SegmentSorted { .. } => StepKind::SegmentSorted,
            SortEvent::PivotPlaced { .. }
            | SortEvent::Cancelled { .. }
            | SortEvent::Finished { .. } => StepKind::Immediate,
        }
    }
}

impl Paced for SortFrame {
    fn step_kind(&self) -> StepKind {
        self.event.step_kind()
    }
}

impl Paced for SearchStep {
    fn step_kind(&self) -> StepKind {
        StepKind::SearchProbe
    }
}

impl Paced for &TreeNode {
    fn step_kind(&self) -> StepKind {
        StepKind::TraversalVisit
    }
}

impl Paced for PathStep<'_> {
    fn step_kind(&self) -> StepKind {
        match self {
            PathStep::Visit { .. } => StepKind::PathVisit,
            PathStep::Segment { .. } => StepKind::PathSegment,
        }
    }
}

/// Delay table derived from the configured speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    pub speed_ms: u64,
}

impl PacingConfig {
    /// No waiting at all
    pub const INSTANT: PacingConfig = PacingConfig { speed_ms: 0 };

    pub fn from_animation(animation: &AnimationConfig) -> Self {
        Self {
            speed_ms: animation.speed_ms,
        }
    }

    pub fn delay(&self, kind: StepKind) -> Duration {
        let ms = kind.reference_ms().saturating_mul(self.speed_ms) / REFERENCE_SPEED_MS;
        Duration::from_millis(ms)
    }

    pub fn is_instant(&self) -> bool {
        self.speed_ms == 0
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::from_animation(&AnimationConfig::default())
    }
}

/// Where pacing delays go
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Debug)]
pub struct Pacer<S = ThreadSleeper> {
    config: PacingConfig,
    sleeper: S,
}

impl Pacer<ThreadSleeper> {
    pub fn new(config: PacingConfig) -> Self {
        Self {
            config,
            sleeper: ThreadSleeper,
        }
    }
}

impl<S: Sleeper> Pacer<S> {
    pub fn with_sleeper(config: PacingConfig, sleeper: S) -> Self {
        Self { config, sleeper }
    }

    pub fn config(&self) -> PacingConfig {
        self.config
    }

    /// Feed every step to `sink` in order, waiting after each one.
    /// Returns the number of steps replayed.
    pub fn replay<I, F>(&mut self, steps: I, mut sink: F) -> usize
    where
        I: IntoIterator,
        I::Item: Paced,
        F: FnMut(&I::Item),
    {
        let mut count = 0;
        for step in steps {
            sink(&step);
            count += 1;
            self.pause(step.step_kind());
        }
        trace!(count, speed_ms = self.config.speed_ms, "pacer_replay");
        count
    }

    /// Wait once for a step of the given kind
    pub fn pause(&mut self, kind: StepKind) {
        if self.config.is_instant() {
            return;
        }
        let delay = self.config.delay(kind);
        if !delay.is_zero() {
            self.sleeper.sleep(delay);
        }
    }

    pub fn into_sleeper(self) -> S {
        self.sleeper
    }
}
