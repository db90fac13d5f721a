//! Static node/edge registry
//!
//! A [`Graph`] is assembled once through [`GraphBuilder`] and never mutated
//! afterwards. Building validates that every edge endpoint names a known
//! node and that every weight is positive; malformed data is rejected rather
//! than silently skipped.

use std::collections::HashMap;

use serde::Serialize;

use crate::bail_graph;
use crate::error::Result;

/// A named location with a drawing position and a decorative icon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub name: String,
    /// Drawing coordinate, never read by the path engines
    pub x: f64,
    pub y: f64,
    pub icon: String,
}

/// A directed, weighted connection (weight in meters)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// Immutable weighted graph with insertion-ordered nodes and edges
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    edges: HashMap<String, Vec<GraphEdge>>,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Nodes in the order they were declared
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.index.get(name).and_then(|&i| self.nodes.get(i))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Outgoing edges of `name` in stored order (empty for unknown nodes)
    pub fn edges_from(&self, name: &str) -> &[GraphEdge] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first stored edge from `from` to `to`
    pub fn edge(&self, from: &str, to: &str) -> Option<&GraphEdge> {
        self.edges_from(from).iter().find(|e| e.to == to)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// True when every edge has a reverse counterpart of equal weight
    pub fn is_symmetric(&self) -> bool {
        self.edges.values().flatten().all(|edge| {
            self.edge(&edge.to, &edge.from)
                .is_some_and(|back| back.weight == edge.weight)
        })
    }
}

/// Collects nodes and edges, then validates them into a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl GraphBuilder {
    pub fn node(mut self, name: &str, x: f64, y: f64, icon: &str) -> Self {
        self.nodes.push(GraphNode {
            name: name.to_string(),
            x,
            y,
            icon: icon.to_string(),
        });
        self
    }

    pub fn edge(mut self, from: &str, to: &str, weight: u32) -> Self {
        self.edges.push(GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
        self
    }

    /// Validate and freeze the graph
    pub fn build(self) -> Result<Graph> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if node.name.trim().is_empty() {
                bail_graph!("node #{} has an empty name", i);
            }
            if index.insert(node.name.clone(), i).is_some() {
                bail_graph!("duplicate node: {}", node.name);
            }
        }

        let mut edges: HashMap<String, Vec<GraphEdge>> = HashMap::new();
        for edge in self.edges {
            if !index.contains_key(&edge.from) {
                bail_graph!("edge source {} is not a node", edge.from);
            }
            if !index.contains_key(&edge.to) {
                bail_graph!("edge {} -> {} targets an unknown node", edge.from, edge.to);
            }
            if edge.weight == 0 {
                bail_graph!("edge {} -> {} has non-positive weight", edge.from, edge.to);
            }
            edges.entry(edge.from.clone()).or_default().push(edge);
        }

        tracing::debug!(
            nodes = self.nodes.len(),
            edges = edges.values().map(Vec::len).sum::<usize>(),
            "graph_loaded"
        );

        Ok(Graph {
            nodes: self.nodes,
            index,
            edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VizError;

    fn pair() -> GraphBuilder {
        Graph::builder()
            .node("A", 0.0, 0.0, "a")
            .node("B", 1.0, 0.0, "b")
    }

    #[test]
    fn test_edges_keep_declaration_order() {
        let graph = pair()
            .node("C", 2.0, 0.0, "c")
            .edge("A", "C", 5)
            .edge("A", "B", 1)
            .build()
            .unwrap();

        let targets: Vec<&str> = graph.edges_from("A").iter().map(|e| e.to.as_str()).collect();
        assert_eq!(targets, vec!["C", "B"]);
        assert!(graph.edges_from("B").is_empty());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edge_to_unknown_node_is_fatal() {
        let err = pair().edge("A", "Z", 3).build().unwrap_err();
        assert!(matches!(err, VizError::InvalidGraph { .. }));
        assert!(err.to_string().contains("unknown node"));
    }

    #[test]
    fn test_edge_from_unknown_node_is_fatal() {
        let err = pair().edge("Z", "A", 3).build().unwrap_err();
        assert!(matches!(err, VizError::InvalidGraph { .. }));
    }

    #[test]
    fn test_zero_weight_is_fatal() {
        let err = pair().edge("A", "B", 0).build().unwrap_err();
        assert!(err.to_string().contains("non-positive"));
    }

    #[test]
    fn test_duplicate_node_is_fatal() {
        let err = pair().node("A", 5.0, 5.0, "x").build().unwrap_err();
        assert!(err.to_string().contains("duplicate node: A"));
    }

    #[test]
    fn test_symmetry_check() {
        let one_way = pair().edge("A", "B", 2).build().unwrap();
        assert!(!one_way.is_symmetric());

        let both = pair().edge("A", "B", 2).edge("B", "A", 2).build().unwrap();
        assert!(both.is_symmetric());

        let uneven = pair().edge("A", "B", 2).edge("B", "A", 3).build().unwrap();
        assert!(!uneven.is_symmetric());
    }
}
