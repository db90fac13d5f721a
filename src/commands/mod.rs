//! CLI commands for algoviz

pub mod bst;
pub mod dispatch;
pub mod format;
pub mod nodes;
pub mod path;
pub mod shell;
pub mod sort;
