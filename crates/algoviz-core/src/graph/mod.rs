//! Campus graph and shortest-path search
//!
//! Provides the path-finding half of the visualizer:
//! - a validated, immutable graph model and the fixed campus dataset
//! - a stable min-priority queue
//! - Dijkstra and BFS engines producing replayable [`PathResult`]s

pub mod algos;
pub mod campus;
pub mod model;
pub mod queue;
pub mod traversal;
pub mod types;

pub use algos::{bfs, dijkstra, weighted_distance};
pub use campus::campus_graph;
pub use model::{Graph, GraphBuilder, GraphEdge, GraphNode};
pub use queue::PriorityQueue;
pub use traversal::GraphProvider;
pub use types::{Algorithm, Distance, PathResult, PathStep};

use std::time::Instant;

use crate::bail_usage;
use crate::error::{Result, VizError};

/// Validate user-supplied endpoints and run the chosen engine.
///
/// Fails without side effects on an empty destination or on names the graph
/// does not know. An unreachable destination is not an error.
pub fn find_path(
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    start: &str,
    end: &str,
) -> Result<PathResult> {
    let start = start.trim();
    let end = end.trim();

    if end.is_empty() {
        bail_usage!("please enter a destination");
    }
    if !provider.contains(start) {
        return Err(VizError::not_found("start location", start));
    }
    if !provider.contains(end) {
        return Err(VizError::not_found("destination", end));
    }

    let started = Instant::now();
    let result = match algorithm {
        Algorithm::Dijkstra => dijkstra(provider, start, end),
        Algorithm::Bfs => bfs(provider, start, end),
    };
    crate::trace_time!(started, "find_path", visited = result.visited.len());
    Ok(result)
}
