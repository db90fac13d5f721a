//! Subcommands and their argument structures

use clap::{Args, Subcommand};

use crate::cli::parse::{parse_algorithm, parse_traversal_order, parse_value_list, ValueList};
use algoviz_core::bst::TraversalOrder;
use algoviz_core::graph::Algorithm;

/// Top-level algoviz commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List campus locations and their connections
    Nodes,

    /// Find a route between two campus locations
    Path(PathArgs),

    /// Build a binary search tree, then search or traverse it
    Bst(BstArgs),

    /// Quicksort an array and report the step trace
    Sort(SortArgs),

    /// Interactive session reading commands from stdin
    Shell,
}

/// Arguments for the path command.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Starting location
    pub start: String,

    /// Destination location
    pub destination: String,

    /// Search algorithm (dijkstra, bfs)
    #[arg(long, default_value = "dijkstra", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,
}

/// Arguments for the bst command.
#[derive(Args, Debug)]
pub struct BstArgs {
    /// Values to insert, in order
    pub values: Vec<String>,

    /// Insert a preset sample tree first (1-3)
    #[arg(long)]
    pub sample: Option<usize>,

    /// Search for a value after inserting
    #[arg(long)]
    pub search: Option<String>,

    /// Traverse the finished tree (inorder, preorder, postorder)
    #[arg(long, value_parser = parse_traversal_order)]
    pub traverse: Option<TraversalOrder>,
}

/// Arguments for the sort command.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Number of random elements
    #[arg(long, conflicts_with = "values")]
    pub size: Option<usize>,

    /// Comma-separated input instead of a random array
    #[arg(long, value_parser = parse_value_list)]
    pub values: Option<ValueList>,

    /// Seed for reproducible random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every step of the sort
    #[arg(long)]
    pub trace: bool,
}
