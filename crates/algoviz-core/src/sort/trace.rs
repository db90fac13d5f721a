//! Per-bar highlighting and recorded frames for sort replays

use serde::Serialize;

use crate::sort::{QuickSort, SortEvent};

/// Highlight applied to one bar of the array display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarStyle {
    Comparing,
    Pivot,
    Swapping,
    Sorted,
    #[default]
    None,
}

impl BarStyle {
    /// Single-character marker for text output
    pub fn marker(&self) -> char {
        match self {
            BarStyle::Comparing => '?',
            BarStyle::Pivot => 'P',
            BarStyle::Swapping => '~',
            BarStyle::Sorted => '=',
            BarStyle::None => ' ',
        }
    }
}

/// Bar highlights produced by a single event over an array of `len` bars
pub fn highlights(event: &SortEvent, len: usize) -> Vec<BarStyle> {
    let mut bars = vec![BarStyle::None; len];
    let mut mark = |index: usize, style: BarStyle| {
        if let Some(bar) = bars.get_mut(index) {
            *bar = style;
        }
    };

    match *event {
        SortEvent::PivotSelected { index, .. } => mark(index, BarStyle::Pivot),
        SortEvent::Compare { index, pivot } => {
            mark(pivot, BarStyle::Pivot);
            mark(index, BarStyle::Comparing);
        }
        SortEvent::Swap { i, j } => {
            mark(i, BarStyle::Swapping);
            mark(j, BarStyle::Swapping);
        }
        SortEvent::PivotPlaced { index } => mark(index, BarStyle::Sorted),
        SortEvent::SegmentSorted { lo, hi } => (lo..=hi).for_each(|i| mark(i, BarStyle::Sorted)),
        SortEvent::Finished { .. } => (0..len).for_each(|i| mark(i, BarStyle::Sorted)),
        SortEvent::Cancelled { .. } => {}
    }

    bars
}

/// An event with the array state right after it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortFrame {
    #[serde(flatten)]
    pub event: SortEvent,
    pub values: Vec<i64>,
    pub bars: Vec<BarStyle>,
    pub comparisons: u64,
}

/// Adapter pairing each quicksort event with a snapshot
#[derive(Debug)]
pub struct Frames<'a> {
    inner: QuickSort<'a>,
}

impl<'a> Frames<'a> {
    pub(crate) fn new(inner: QuickSort<'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for Frames<'_> {
    type Item = SortFrame;

    fn next(&mut self) -> Option<SortFrame> {
        let event = self.inner.next()?;
        let values = self.inner.values().to_vec();
        Some(SortFrame {
            bars: highlights(&event, values.len()),
            comparisons: self.inner.comparisons(),
            event,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortState;

    #[test]
    fn test_compare_marks_pivot_and_candidate() {
        let bars = highlights(&SortEvent::Compare { index: 1, pivot: 3 }, 4);
        assert_eq!(
            bars,
            vec![
                BarStyle::None,
                BarStyle::Comparing,
                BarStyle::None,
                BarStyle::Pivot
            ]
        );
    }

    #[test]
    fn test_segment_and_finish_mark_sorted() {
        let bars = highlights(&SortEvent::SegmentSorted { lo: 1, hi: 2 }, 4);
        assert_eq!(bars.iter().filter(|b| **b == BarStyle::Sorted).count(), 2);
        assert_eq!(bars[0], BarStyle::None);

        let done = highlights(
            &SortEvent::Finished {
                comparisons: 0,
                elapsed: std::time::Duration::ZERO,
            },
            3,
        );
        assert_eq!(done, vec![BarStyle::Sorted; 3]);
    }

    #[test]
    fn test_swap_and_cancel() {
        let bars = highlights(&SortEvent::Swap { i: 0, j: 2 }, 3);
        assert_eq!(bars[0], BarStyle::Swapping);
        assert_eq!(bars[2], BarStyle::Swapping);
        assert_eq!(bars[1], BarStyle::None);

        let cancelled = highlights(&SortEvent::Cancelled { comparisons: 3 }, 3);
        assert_eq!(cancelled, vec![BarStyle::None; 3]);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let bars = highlights(&SortEvent::PivotSelected { index: 9, value: 1 }, 2);
        assert_eq!(bars, vec![BarStyle::None; 2]);
    }

    #[test]
    fn test_frames_snapshot_after_each_event() {
        let mut state = SortState::with_values(vec![3, 1, 2]);
        let frames: Vec<SortFrame> = state.sort_frames().collect();

        let first_swap = frames
            .iter()
            .find(|f| matches!(f.event, SortEvent::Swap { .. }))
            .unwrap();
        assert_eq!(first_swap.values, vec![1, 3, 2]);
        assert_eq!(first_swap.comparisons, 2);

        let last = frames.last().unwrap();
        assert_eq!(last.values, vec![1, 2, 3]);
        assert_eq!(last.bars, vec![BarStyle::Sorted; 3]);
    }

    #[test]
    fn test_frame_json_is_flat() {
        let mut state = SortState::with_values(vec![2, 1]);
        let frame = state.sort_frames().next().unwrap();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["event"], "pivot-selected");
        assert_eq!(json["index"], 1);
        assert_eq!(json["bars"][1], "pivot");
    }
}
