//! Text rendering of sort frames

use algoviz_core::sort::{SortEvent, SortFrame};

pub fn values_line(values: &[i64]) -> String {
    let joined: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", joined.join(", "))
}

pub fn describe(event: &SortEvent) -> String {
    match *event {
        SortEvent::PivotSelected { index, value } => format!("pivot a[{}] = {}", index, value),
        SortEvent::Compare { index, pivot } => format!("compare a[{}] with a[{}]", index, pivot),
        SortEvent::Swap { i, j } => format!("swap a[{}] <-> a[{}]", i, j),
        SortEvent::PivotPlaced { index } => format!("pivot placed at {}", index),
        SortEvent::SegmentSorted { lo, hi } if lo == hi => format!("a[{}] sorted", lo),
        SortEvent::SegmentSorted { lo, hi } => format!("a[{}..={}] sorted", lo, hi),
        SortEvent::Cancelled { .. } => "cancelled".to_string(),
        SortEvent::Finished { .. } => "done".to_string(),
    }
}

/// Event description followed by each value tagged with its bar marker
pub fn frame_line(frame: &SortFrame) -> String {
    let bars: Vec<String> = frame
        .values
        .iter()
        .zip(&frame.bars)
        .map(|(value, bar)| format!("{}{}", value, bar.marker()))
        .collect();
    format!(
        "  {:<26}|{}",
        describe(&frame.event),
        bars.join(" ").trim_end()
    )
}

/// Closing message for a run
pub fn outcome_line(last: Option<&SortEvent>) -> String {
    match last {
        Some(SortEvent::Finished {
            comparisons,
            elapsed,
        }) => format!(
            "Sorted in {}ms with {} comparisons!",
            elapsed.as_millis(),
            comparisons
        ),
        Some(SortEvent::Cancelled { comparisons }) => {
            format!("Sort cancelled after {} comparisons", comparisons)
        }
        _ => "Nothing to sort".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::sort::SortState;
    use std::time::Duration;

    #[test]
    fn test_describe_events() {
        assert_eq!(
            describe(&SortEvent::Compare { index: 0, pivot: 4 }),
            "compare a[0] with a[4]"
        );
        assert_eq!(
            describe(&SortEvent::SegmentSorted { lo: 2, hi: 2 }),
            "a[2] sorted"
        );
        assert_eq!(
            describe(&SortEvent::SegmentSorted { lo: 0, hi: 3 }),
            "a[0..=3] sorted"
        );
    }

    #[test]
    fn test_frame_line_marks_bars() {
        let mut state = SortState::with_values(vec![3, 1, 2]);
        let first = state.sort_frames().next().unwrap();
        assert_eq!(first.event, SortEvent::PivotSelected { index: 2, value: 2 });
        assert_eq!(frame_line(&first), format!("  {:<26}|3  1  2P", "pivot a[2] = 2"));
    }

    #[test]
    fn test_outcome_lines() {
        let done = SortEvent::Finished {
            comparisons: 12,
            elapsed: Duration::from_millis(40),
        };
        assert_eq!(
            outcome_line(Some(&done)),
            "Sorted in 40ms with 12 comparisons!"
        );
        assert_eq!(
            outcome_line(Some(&SortEvent::Cancelled { comparisons: 3 })),
            "Sort cancelled after 3 comparisons"
        );
        assert_eq!(values_line(&[5, 10]), "[5, 10]");
    }
}
