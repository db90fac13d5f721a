//! Human-readable output formatting for the BST command

use algoviz_core::bst::{
    SearchOutcome, SearchStep, SearchStepKind, Side, TraversalOrder, TreeLayout,
};
use algoviz_core::config::TreeLayoutConfig;
use algoviz_core::session::Inserted;

pub fn inserted_message(inserted: &Inserted) -> String {
    format!("Value {} inserted successfully!", inserted.value)
}

/// Sideways tree, one node per line in preorder
pub fn tree_lines(layout: &TreeLayout, geometry: &TreeLayoutConfig) -> Vec<String> {
    if layout.positions.is_empty() {
        return vec!["Tree is empty".to_string()];
    }

    let mut lines = vec![format!(
        "Tree ({} nodes, height {}):",
        layout.node_count, layout.height
    )];
    for pos in &layout.positions {
        let depth = ((pos.y - geometry.anchor_y) / geometry.level_height)
            .round()
            .max(0.0) as usize;
        let tag = match pos.side {
            Side::Root => "",
            Side::Left => "L: ",
            Side::Right => "R: ",
        };
        lines.push(format!(
            "{}{}{} ({}, {})",
            "  ".repeat(depth + 1),
            tag,
            pos.value,
            pos.x,
            pos.y
        ));
    }
    lines
}

pub fn search_step_line(step: &SearchStep) -> String {
    let action = match step.kind {
        SearchStepKind::Searching => "searching",
        SearchStepKind::GoingLeft => "going left",
        SearchStepKind::GoingRight => "going right",
        SearchStepKind::Found => "found",
    };
    format!("  {} at {}", action, step.value)
}

pub fn search_message(outcome: &SearchOutcome) -> String {
    if outcome.is_found() {
        format!("Value {} found!", outcome.value)
    } else {
        format!("Value {} not found!", outcome.value)
    }
}

pub fn traversal_line(order: TraversalOrder, values: &[i64]) -> String {
    let joined: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("{}: {}", order.label(), joined.join(" -> "))
}

pub fn traversal_done(order: TraversalOrder) -> String {
    format!("{} traversal completed!", order.label())
}
