use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::graph::algos::shared::weighted_distance;
use crate::graph::types::{Algorithm, Distance, PathResult};
use crate::graph::GraphProvider;

/// Unweighted shortest path (fewest hops) from `start` to `end`.
///
/// The queue holds whole partial paths. Nodes are marked visited when first
/// discovered, so each node is enqueued at most once. The weighted length of
/// the returned path is reported alongside the hop count but never affects
/// which path is chosen.
#[tracing::instrument(skip(provider))]
pub fn bfs(provider: &dyn GraphProvider, start: &str, end: &str) -> PathResult {
    let mut queue: VecDeque<Vec<String>> = VecDeque::from([vec![start.to_string()]]);
    let mut visited: HashSet<String> = HashSet::from([start.to_string()]);
    let mut steps = vec![start.to_string()];

    while let Some(path) = queue.pop_front() {
        let Some(current) = path.last() else {
            continue;
        };

        if current == end {
            let hops = path.len() - 1;
            let meters = weighted_distance(provider, &path);
            debug!(hops, meters, visited = steps.len(), "bfs_reached");
            return PathResult::reached(Algorithm::Bfs, path, Distance::Finite(hops as u64), steps)
                .with_weighted_distance(meters);
        }

        for edge in provider.outbound_edges(current) {
            if visited.insert(edge.to.clone()) {
                steps.push(edge.to.clone());
                let mut extended = path.clone();
                extended.push(edge.to.clone());
                queue.push_back(extended);
            }
        }
    }

    debug!(visited = steps.len(), "bfs_unreachable");
    PathResult::unreachable(Algorithm::Bfs, steps)
}
