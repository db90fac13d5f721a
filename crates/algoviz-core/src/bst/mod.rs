//! Binary search tree with positional layout
//!
//! A plain, unbalanced BST. Values smaller than a node go left; everything
//! else, equal values included, goes right. Every insertion re-runs the
//! layout pass so node positions are always current.
//!
//! All walks (insert, search, traversal, layout, height, teardown) use loops
//! and explicit stacks, so a degenerate tree built from sorted input cannot
//! exhaust the call stack.

pub mod layout;
pub mod search;
pub mod traversal;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::TreeLayoutConfig;

pub use layout::{NodePosition, Side, TreeLayout};
pub use search::{Search, SearchOutcome, SearchStep, SearchStepKind};
pub use traversal::{Traversal, TraversalOrder};

/// Stable identity of a tree node, independent of its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A tree node; owns its children
#[derive(Debug)]
pub struct TreeNode {
    id: NodeId,
    value: i64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
    x: f64,
    y: f64,
}

impl TreeNode {
    fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            left: None,
            right: None,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Position assigned by the last layout pass
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Binary search tree session state
#[derive(Debug, Default)]
pub struct Bst {
    root: Option<Box<TreeNode>>,
    node_count: usize,
    next_id: u64,
    layout: TreeLayoutConfig,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: TreeLayoutConfig) -> Self {
        Self {
            root: None,
            node_count: 0,
            next_id: 0,
            layout,
        }
    }

    /// Insert `value` as a new leaf and re-run layout. Returns the new node's id.
    pub fn insert(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(TreeNode::new(id, value)));

        self.node_count += 1;
        if let Some(root) = self.root.as_deref_mut() {
            layout::apply_layout(root, &self.layout);
        }

        debug!(value, %id, depth, count = self.node_count, "bst_insert");
        id
    }

    pub fn insert_all(&mut self, values: &[i64]) -> Vec<NodeId> {
        values.iter().map(|&v| self.insert(v)).collect()
    }

    /// First node reached by insert-order routing whose value equals `value`
    pub fn find(&self, value: i64) -> Option<&TreeNode> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                return Some(node);
            }
            current = if value < node.value {
                node.left()
            } else {
                node.right()
            };
        }
        None
    }

    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Lazy search trace for `value`
    pub fn search_steps(&self, value: i64) -> Search<'_> {
        Search::new(self.root.as_deref(), value)
    }

    /// Run a search to completion, keeping every step
    pub fn search(&self, value: i64) -> SearchOutcome {
        let steps: Vec<SearchStep> = self.search_steps(value).collect();
        let outcome = SearchOutcome::from_steps(value, steps);
        debug!(
            value,
            found = outcome.found.is_some(),
            steps = outcome.steps.len(),
            "bst_search"
        );
        outcome
    }

    /// Lazy, restartable walk in the given order
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_> {
        Traversal::new(self.root.as_deref(), order)
    }

    /// Values in the given order
    pub fn values(&self, order: TraversalOrder) -> Vec<i64> {
        self.traverse(order).map(TreeNode::value).collect()
    }

    /// Number of levels; 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root.as_deref().map(|r| (r, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Number of insertions since creation or the last clear
    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn layout_config(&self) -> &TreeLayoutConfig {
        &self.layout
    }

    /// Snapshot of every node's position, in preorder, with height and count
    pub fn layout(&self) -> TreeLayout {
        TreeLayout {
            positions: layout::positions(self.root.as_deref()),
            height: self.height(),
            node_count: self.node_count,
        }
    }

    /// Drop every node and reset the count. Node ids keep increasing.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        self.node_count = 0;
        debug!("bst_clear");
    }
}

impl Drop for Bst {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

/// Free a subtree without recursing through `Box` drops
fn dismantle(root: Option<Box<TreeNode>>) {
    let mut stack: Vec<Box<TreeNode>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
