//! Node placement for drawing
//!
//! The root sits at the configured anchor. A child at depth `d` (the root's
//! children have `d = 1`) is shifted horizontally from its parent by
//! `spread / d` and vertically by `level_height`. Layout only writes
//! coordinates; it never changes tree shape.

use serde::Serialize;

use crate::bst::{NodeId, TreeNode};
use crate::config::TreeLayoutConfig;

/// Which child slot a node occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Root,
    Left,
    Right,
}

/// A drawable node with the coordinates of the edge to its parent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    pub value: i64,
    pub x: f64,
    pub y: f64,
    pub parent_x: Option<f64>,
    pub parent_y: Option<f64>,
    pub id: NodeId,
    pub side: Side,
}

/// Full drawing state after a structural change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeLayout {
    /// Preorder: every parent precedes its children
    pub positions: Vec<NodePosition>,
    pub height: usize,
    pub node_count: usize,
}

/// Assign coordinates to every node under `root`
pub(crate) fn apply_layout(root: &mut TreeNode, config: &TreeLayoutConfig) {
    let mut stack: Vec<(&mut TreeNode, f64, f64, u32)> =
        vec![(root, config.anchor_x, config.anchor_y, 1)];

    while let Some((node, x, y, depth)) = stack.pop() {
        node.x = x;
        node.y = y;

        let offset = config.spread / f64::from(depth);
        let child_y = y + config.level_height;
        if let Some(right) = node.right.as_deref_mut() {
            stack.push((right, x + offset, child_y, depth + 1));
        }
        if let Some(left) = node.left.as_deref_mut() {
            stack.push((left, x - offset, child_y, depth + 1));
        }
    }
}

/// Read back the stored coordinates in preorder
pub(crate) fn positions(root: Option<&TreeNode>) -> Vec<NodePosition> {
    let mut out = Vec::new();
    let mut stack: Vec<(&TreeNode, Option<(f64, f64)>, Side)> =
        root.map(|r| (r, None, Side::Root)).into_iter().collect();

    while let Some((node, parent, side)) = stack.pop() {
        out.push(NodePosition {
            value: node.value,
            x: node.x,
            y: node.y,
            parent_x: parent.map(|(px, _)| px),
            parent_y: parent.map(|(_, py)| py),
            id: node.id,
            side,
        });

        let here = Some((node.x, node.y));
        if let Some(right) = node.right() {
            stack.push((right, here, Side::Right));
        }
        if let Some(left) = node.left() {
            stack.push((left, here, Side::Left));
        }
    }

    out
}
