//! Human-readable output formatting for path results

use algoviz_core::graph::{Algorithm, Distance, PathResult, PathStep};

/// One line per replayed step
pub fn step_line(step: &PathStep<'_>) -> String {
    match step {
        PathStep::Visit { order, node } => format!("  visit {:>2}: {}", order + 1, node),
        PathStep::Segment { from, to } => format!("  walk: {} -> {}", from, to),
    }
}

/// Result summary; quiet output keeps only the route and distance
pub fn summary_lines(result: &PathResult, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if !quiet {
        lines.push(result.algorithm.to_string());
    }
    lines.push(format!("Route: {}", route(result)));
    lines.push(format!("Distance: {}", distance(result)));

    if quiet {
        return lines;
    }

    lines.push(format!(
        "Visited ({}): {}",
        result.visited.len(),
        result.visited.join(", ")
    ));
    lines.push(format!(
        "Time complexity: {} | Space complexity: {}",
        result.time_complexity, result.space_complexity
    ));
    if let Some(note) = result.note {
        lines.push(format!("Note: {}", note));
    }
    lines
}

fn route(result: &PathResult) -> String {
    if result.path.is_empty() {
        return "No path available".to_string();
    }
    result.path.join(" -> ")
}

fn distance(result: &PathResult) -> String {
    match (result.kind, result.distance) {
        (_, Distance::Infinite) => "No path found".to_string(),
        (Algorithm::Bfs, Distance::Finite(hops)) => match result.weighted_distance {
            Some(meters) => format!("{} hops ({}m actual distance)", hops, meters),
            None => format!("{} hops", hops),
        },
        (kind, Distance::Finite(value)) => format!("{} {}", value, kind.unit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::graph::{bfs, campus_graph, dijkstra, Graph};

    #[test]
    fn test_dijkstra_summary() {
        let graph = campus_graph().unwrap();
        let result = dijkstra(&graph, "Main Gate", "Sports Complex");
        let lines = summary_lines(&result, false);

        assert_eq!(lines[0], "Dijkstra's Algorithm");
        assert_eq!(lines[1], "Route: Main Gate -> Library -> Sports Complex");
        assert_eq!(lines[2], "Distance: 350 meters");
        assert!(lines[3].starts_with("Visited (5): Main Gate, Library"));
        assert!(lines.last().unwrap().starts_with("Note: "));
    }

    #[test]
    fn test_bfs_summary_reports_actual_distance() {
        let graph = campus_graph().unwrap();
        let result = bfs(&graph, "Main Gate", "Sports Complex");
        let lines = summary_lines(&result, true);
        assert_eq!(
            lines,
            vec![
                "Route: Main Gate -> Library -> Sports Complex",
                "Distance: 2 hops (350m actual distance)",
            ]
        );
    }

    #[test]
    fn test_unreachable_summary() {
        let graph = Graph::builder()
            .node("A", 0.0, 0.0, "")
            .node("B", 0.0, 0.0, "")
            .build()
            .unwrap();
        let result = dijkstra(&graph, "A", "B");
        let lines = summary_lines(&result, false);
        assert!(lines.contains(&"Route: No path available".to_string()));
        assert!(lines.contains(&"Distance: No path found".to_string()));
    }

    #[test]
    fn test_step_lines() {
        assert_eq!(
            step_line(&PathStep::Visit {
                order: 0,
                node: "Library"
            }),
            "  visit  1: Library"
        );
        assert_eq!(
            step_line(&PathStep::Segment {
                from: "A",
                to: "B"
            }),
            "  walk: A -> B"
        );
    }
}
