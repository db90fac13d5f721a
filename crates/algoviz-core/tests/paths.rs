//! Property checks for the path engines against the campus graph

use std::collections::HashMap;

use algoviz_core::graph::campus::*;
use algoviz_core::graph::{bfs, campus_graph, dijkstra, Distance, Graph, GraphProvider};

/// Bellman-Ford style relaxation until nothing changes
fn reference_distances(graph: &Graph, start: &str) -> HashMap<String, u64> {
    let mut dist: HashMap<String, u64> = HashMap::from([(start.to_string(), 0)]);
    loop {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&base) = dist.get(&node.name) else {
                continue;
            };
            for edge in graph.outbound_edges(&node.name) {
                let candidate = base + u64::from(edge.weight);
                let entry = dist.entry(edge.to.clone()).or_insert(u64::MAX);
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Minimum hop counts by repeated frontier expansion
fn reference_hops(graph: &Graph, start: &str) -> HashMap<String, u64> {
    let mut hops = HashMap::from([(start.to_string(), 0u64)]);
    let mut frontier = vec![start.to_string()];
    let mut level = 0;
    while !frontier.is_empty() {
        level += 1;
        let mut next = Vec::new();
        for name in &frontier {
            for edge in graph.outbound_edges(name) {
                if !hops.contains_key(&edge.to) {
                    hops.insert(edge.to.clone(), level);
                    next.push(edge.to.clone());
                }
            }
        }
        frontier = next;
    }
    hops
}

fn names(graph: &Graph) -> Vec<String> {
    graph.nodes().iter().map(|n| n.name.clone()).collect()
}

#[test]
fn test_campus_nodes() {
    let graph = campus_graph().unwrap();
    let mut found = names(&graph);
    found.sort();
    let mut expected = vec![
        MAIN_GATE,
        ACADEMIC_BLOCK,
        LIBRARY,
        MCA_DEPARTMENT,
        CAFETERIA,
        SPORTS_COMPLEX,
    ];
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_dijkstra_matches_reference_for_every_pair() {
    let graph = campus_graph().unwrap();
    for start in names(&graph) {
        let reference = reference_distances(&graph, &start);
        for end in names(&graph) {
            if start == end {
                continue;
            }
            let result = dijkstra(&graph, &start, &end);
            assert_eq!(
                result.distance,
                Distance::Finite(reference[&end]),
                "{start} -> {end}"
            );
            assert_eq!(result.path.first(), Some(&start));
            assert_eq!(result.path.last(), Some(&end));
        }
    }
}

#[test]
fn test_dijkstra_distance_equals_sum_of_path_edges() {
    let graph = campus_graph().unwrap();
    for end in names(&graph).into_iter().filter(|n| n != MAIN_GATE) {
        let result = dijkstra(&graph, MAIN_GATE, &end);
        let sum: u64 = result
            .path
            .windows(2)
            .map(|pair| u64::from(graph.edge(&pair[0], &pair[1]).unwrap().weight))
            .sum();
        assert_eq!(result.distance, Distance::Finite(sum));
    }
}

#[test]
fn test_bfs_hops_are_minimal() {
    let graph = campus_graph().unwrap();
    for start in names(&graph) {
        let reference = reference_hops(&graph, &start);
        for end in names(&graph) {
            let result = bfs(&graph, &start, &end);
            assert_eq!(
                result.distance,
                Distance::Finite(reference[&end]),
                "{start} -> {end}"
            );
            assert_eq!(result.hop_count() as u64, reference[&end]);
        }
    }
}

#[test]
fn test_engines_agree_on_reachability() {
    let graph = Graph::builder()
        .node("A", 0.0, 0.0, "")
        .node("B", 1.0, 0.0, "")
        .node("C", 2.0, 0.0, "")
        .node("D", 3.0, 0.0, "")
        .edge("A", "B", 5)
        .edge("B", "A", 5)
        .edge("C", "D", 2)
        .build()
        .unwrap();

    for (start, end) in [("A", "B"), ("A", "C"), ("C", "D"), ("D", "C"), ("B", "D")] {
        let weighted = dijkstra(&graph, start, end);
        let hops = bfs(&graph, start, end);
        assert_eq!(weighted.found(), hops.found(), "{start} -> {end}");
        if !weighted.found() {
            assert_eq!(weighted.distance, Distance::Infinite);
            assert!(weighted.path.is_empty());
            assert!(hops.path.is_empty());
        }
    }
}

#[test]
fn test_path_result_json_uses_null_for_infinity() {
    let graph = Graph::builder()
        .node("A", 0.0, 0.0, "")
        .node("B", 0.0, 0.0, "")
        .build()
        .unwrap();
    let result = dijkstra(&graph, "A", "B");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["distance"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}
