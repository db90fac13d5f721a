use std::collections::HashMap;

use crate::graph::GraphProvider;

/// Sum of edge weights along `path`. Hops with no stored edge contribute
/// nothing.
pub fn weighted_distance(provider: &dyn GraphProvider, path: &[String]) -> u64 {
    path.windows(2)
        .filter_map(|pair| {
            provider
                .outbound_edges(&pair[0])
                .iter()
                .find(|edge| edge.to == pair[1])
        })
        .map(|edge| u64::from(edge.weight))
        .sum()
}

/// Walk predecessors back from `end`. Returns an empty path when the walk
/// yields a single node, i.e. `end` was never linked back to `start`.
pub fn reconstruct_path(previous: &HashMap<String, String>, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(pred) = previous.get(current) {
        path.push(pred.clone());
        current = pred;
    }
    path.reverse();

    if path.len() > 1 {
        path
    } else {
        Vec::new()
    }
}
