use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::VizError;

/// Path cost: meters for Dijkstra, hops for BFS. `Infinite` means no path.
///
/// Serializes as a plain number, or `null` when infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(u64),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(v) => Some(*v),
            Distance::Infinite => None,
        }
    }

    /// Extend by one edge; infinity absorbs
    pub fn plus(self, weight: u32) -> Distance {
        match self {
            Distance::Finite(v) => Distance::Finite(v.saturating_add(u64::from(weight))),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{}", v),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

/// Shortest-path algorithm choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::Bfs];

    /// Display name shown above results
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::Bfs => "BFS Algorithm",
        }
    }

    pub fn time_complexity(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "O((V+E) log V)",
            Algorithm::Bfs => "O(V + E)",
        }
    }

    pub fn space_complexity(&self) -> &'static str {
        "O(V)"
    }

    pub fn note(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Finds shortest path in weighted graphs using priority queue",
            Algorithm::Bfs => "Finds shortest path in unweighted graphs (minimum hops)",
        }
    }

    /// Unit for the primary distance figure
    pub fn unit(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "meters",
            Algorithm::Bfs => "hops",
        }
    }
}

impl FromStr for Algorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            other => Err(VizError::unsupported("algorithm", other, "dijkstra, bfs")),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Bfs => write!(f, "bfs"),
        }
    }
}

/// Outcome of a path search, ready for a renderer to replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub kind: Algorithm,
    pub algorithm: &'static str,
    /// Start to destination; empty when there is no path
    pub path: Vec<String>,
    pub distance: Distance,
    /// Nodes in the order the search settled them
    pub visited: Vec<String>,
    /// Sum of edge weights along a BFS path, for comparison only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_distance: Option<u64>,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl PathResult {
    /// Result for a search that reached its destination
    pub fn reached(
        kind: Algorithm,
        path: Vec<String>,
        distance: Distance,
        visited: Vec<String>,
    ) -> Self {
        Self {
            note: Some(kind.note()),
            ..Self::base(kind, path, distance, visited)
        }
    }

    /// Result for a search that exhausted its frontier
    pub fn unreachable(kind: Algorithm, visited: Vec<String>) -> Self {
        Self::base(kind, Vec::new(), Distance::Infinite, visited)
    }

    fn base(kind: Algorithm, path: Vec<String>, distance: Distance, visited: Vec<String>) -> Self {
        Self {
            kind,
            algorithm: kind.label(),
            path,
            distance,
            visited,
            weighted_distance: None,
            time_complexity: kind.time_complexity(),
            space_complexity: kind.space_complexity(),
            note: None,
        }
    }

    pub fn with_weighted_distance(mut self, meters: u64) -> Self {
        self.weighted_distance = Some(meters);
        self
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the returned path
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Steps for animated playback: every visited node, then each path segment
    pub fn replay_steps(&self) -> impl Iterator<Item = PathStep<'_>> + '_ {
        let visits = self
            .visited
            .iter()
            .enumerate()
            .map(|(order, node)| PathStep::Visit { order, node });
        let segments = self
            .path
            .windows(2)
            .map(|pair| PathStep::Segment {
                from: &pair[0],
                to: &pair[1],
            });
        visits.chain(segments)
    }
}

/// One replayable step of a path result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum PathStep<'a> {
    Visit { order: usize, node: &'a str },
    Segment { from: &'a str, to: &'a str },
}
