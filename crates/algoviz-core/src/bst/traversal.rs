use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bst::TreeNode;
use crate::error::VizError;

/// Depth-first visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    #[default]
    Inorder,
    Preorder,
    Postorder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ];

    /// Capitalized name for messages
    pub fn label(&self) -> &'static str {
        match self {
            TraversalOrder::Inorder => "Inorder",
            TraversalOrder::Preorder => "Preorder",
            TraversalOrder::Postorder => "Postorder",
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inorder" => Ok(TraversalOrder::Inorder),
            "preorder" => Ok(TraversalOrder::Preorder),
            "postorder" => Ok(TraversalOrder::Postorder),
            other => Err(VizError::unsupported(
                "traversal",
                other,
                "inorder, preorder, postorder",
            )),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame<'a> {
    /// Subtree still to be unfolded
    Expand(&'a TreeNode),
    /// Node ready to be yielded
    Emit(&'a TreeNode),
}

/// Lazy depth-first walk driven by an explicit stack.
///
/// Cloning an unstarted traversal gives an independent replay.
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    order: TraversalOrder,
    stack: Vec<Frame<'a>>,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>, order: TraversalOrder) -> Self {
        Self {
            order,
            stack: root.map(Frame::Expand).into_iter().collect(),
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Push frames so they pop in visiting order
    fn unfold(&mut self, node: &'a TreeNode) {
        let left = node.left().map(Frame::Expand);
        let right = node.right().map(Frame::Expand);
        let emit = Some(Frame::Emit(node));

        let pushed = match self.order {
            TraversalOrder::Preorder => [right, left, emit],
            TraversalOrder::Inorder => [right, emit, left],
            TraversalOrder::Postorder => [emit, right, left],
        };
        self.stack.extend(pushed.into_iter().flatten());
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<&'a TreeNode> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(node) => return Some(node),
                Frame::Expand(node) => self.unfold(node),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::Bst;

    fn sample() -> Bst {
        let mut tree = Bst::new();
        tree.insert_all(&[50, 30, 70, 20, 40, 60, 80]);
        tree
    }

    #[test]
    fn test_preorder_sample() {
        assert_eq!(
            sample().values(TraversalOrder::Preorder),
            vec![50, 30, 20, 40, 70, 60, 80]
        );
    }

    #[test]
    fn test_inorder_sample() {
        assert_eq!(
            sample().values(TraversalOrder::Inorder),
            vec![20, 30, 40, 50, 60, 70, 80]
        );
    }

    #[test]
    fn test_postorder_sample() {
        assert_eq!(
            sample().values(TraversalOrder::Postorder),
            vec![20, 40, 30, 60, 80, 70, 50]
        );
    }

    #[test]
    fn test_inorder_sorted_for_every_insert_order() {
        let base = [4, 1, 3, 1, 5, 9, 2, 6];
        for rotation in 0..base.len() {
            let mut values = base.to_vec();
            values.rotate_left(rotation);
            let mut tree = Bst::new();
            tree.insert_all(&values);

            let walked = tree.values(TraversalOrder::Inorder);
            let mut expected = values.clone();
            expected.sort();
            assert_eq!(walked, expected, "rotation {rotation}");
        }
    }

    #[test]
    fn test_traversal_does_not_consume_tree() {
        let tree = sample();
        let walk = tree.traverse(TraversalOrder::Preorder);
        let replay = walk.clone();
        assert_eq!(walk.count(), 7);
        assert_eq!(replay.map(|n| n.value()).next(), Some(50));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(
            "PostOrder".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::Postorder
        );
        assert!("levelorder".parse::<TraversalOrder>().is_err());
        assert_eq!(TraversalOrder::Preorder.to_string(), "preorder");
    }
}
