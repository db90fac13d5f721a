//! Algoviz Core Library
//!
//! Step-producing engines for the algorithm visualizer: campus shortest
//! paths, a laid-out binary search tree and a traced quicksort.

pub mod bst;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod pacing;
pub mod session;
pub mod sort;
