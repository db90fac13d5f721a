//! Step-by-step BST search
//!
//! Each node on the route yields a `Searching` step, followed by `Found`,
//! `GoingLeft` or `GoingRight`. Routing matches insertion, so a duplicate
//! value is found at the first copy on the insert path.

use std::cmp::Ordering;

use serde::Serialize;

use crate::bst::{NodeId, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStepKind {
    Searching,
    GoingLeft,
    GoingRight,
    Found,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    pub id: NodeId,
    pub value: i64,
    pub kind: SearchStepKind,
}

/// Lazy search trace
#[derive(Debug, Clone)]
pub struct Search<'a> {
    current: Option<&'a TreeNode>,
    target: i64,
    probed: bool,
}

impl<'a> Search<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>, target: i64) -> Self {
        Self {
            current: root,
            target,
            probed: false,
        }
    }
}

impl Iterator for Search<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        let node = self.current?;

        if !self.probed {
            self.probed = true;
            return Some(SearchStep {
                id: node.id,
                value: node.value,
                kind: SearchStepKind::Searching,
            });
        }

        self.probed = false;
        let kind = match self.target.cmp(&node.value) {
            Ordering::Equal => {
                self.current = None;
                SearchStepKind::Found
            }
            Ordering::Less => {
                self.current = node.left();
                SearchStepKind::GoingLeft
            }
            Ordering::Greater => {
                self.current = node.right();
                SearchStepKind::GoingRight
            }
        };

        Some(SearchStep {
            id: node.id,
            value: node.value,
            kind,
        })
    }
}

/// Completed search with its full trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub value: i64,
    pub found: Option<NodeId>,
    pub steps: Vec<SearchStep>,
}

impl SearchOutcome {
    pub(crate) fn from_steps(value: i64, steps: Vec<SearchStep>) -> Self {
        let found = steps
            .last()
            .filter(|s| s.kind == SearchStepKind::Found)
            .map(|s| s.id);
        Self {
            value,
            found,
            steps,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}
