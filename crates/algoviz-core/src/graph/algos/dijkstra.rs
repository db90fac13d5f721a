use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::graph::algos::shared::reconstruct_path;
use crate::graph::queue::PriorityQueue;
use crate::graph::types::{Algorithm, Distance, PathResult};
use crate::graph::GraphProvider;

/// State tracked during a Dijkstra search
struct DijkstraState {
    distances: HashMap<String, Distance>,
    previous: HashMap<String, String>,
    finalized: HashSet<String>,
    queue: PriorityQueue<String, Distance>,
    steps: Vec<String>,
}

impl DijkstraState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            previous: HashMap::new(),
            finalized: HashSet::new(),
            queue: PriorityQueue::new(),
            steps: Vec::new(),
        };
        state.distances.insert(start.to_string(), Distance::ZERO);
        state.queue.enqueue(start.to_string(), Distance::ZERO);
        state
    }

    /// Current best distance; unknown nodes are infinitely far
    fn distance(&self, id: &str) -> Distance {
        self.distances.get(id).copied().unwrap_or_default()
    }

    /// Relax every outgoing edge of `current` in stored order
    fn relax_edges(&mut self, provider: &dyn GraphProvider, current: &str) {
        let base = self.distance(current);
        for edge in provider.outbound_edges(current) {
            let candidate = base.plus(edge.weight);
            if candidate < self.distance(&edge.to) {
                trace!(from = current, to = %edge.to, %candidate, "relax");
                self.distances.insert(edge.to.clone(), candidate);
                self.previous.insert(edge.to.clone(), current.to_string());
                self.queue.enqueue(edge.to.clone(), candidate);
            }
        }
    }
}

/// Weighted shortest path from `start` to `end`.
///
/// The queue may hold several entries for one node; entries for nodes that
/// are already finalized are skipped when dequeued. The search stops as soon
/// as `end` is dequeued.
#[tracing::instrument(skip(provider))]
pub fn dijkstra(provider: &dyn GraphProvider, start: &str, end: &str) -> PathResult {
    let mut state = DijkstraState::new(start);

    while let Some((current, _)) = state.queue.dequeue() {
        if current == end {
            let path = reconstruct_path(&state.previous, end);
            let distance = state.distance(end);
            debug!(%distance, hops = path.len().saturating_sub(1), visited = state.steps.len(), "dijkstra_reached");
            return PathResult::reached(Algorithm::Dijkstra, path, distance, state.steps);
        }

        if !state.finalized.insert(current.clone()) {
            trace!(node = %current, "skip_stale_entry");
            continue;
        }

        state.steps.push(current.clone());
        state.relax_edges(provider, &current);
    }

    debug!(visited = state.steps.len(), "dijkstra_unreachable");
    PathResult::unreachable(Algorithm::Dijkstra, state.steps)
}
