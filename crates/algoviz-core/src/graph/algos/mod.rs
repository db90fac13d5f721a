//! Shortest-path engines
//!
//! - `dijkstra`: weighted shortest path with a lazy-deletion priority queue
//! - `bfs`: fewest-hops path over a queue of partial paths
//! - `shared`: path reconstruction and weight summing

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use shared::{reconstruct_path, weighted_distance};
