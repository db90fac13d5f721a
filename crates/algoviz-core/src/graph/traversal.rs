use crate::graph::model::{Graph, GraphEdge};

/// Trait for providing graph adjacency to the path engines
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn outbound_edges(&self, id: &str) -> &[GraphEdge];
}

impl GraphProvider for Graph {
    fn contains(&self, id: &str) -> bool {
        Graph::contains(self, id)
    }

    fn outbound_edges(&self, id: &str) -> &[GraphEdge] {
        self.edges_from(id)
    }
}
