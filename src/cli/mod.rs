//! CLI argument parsing for algoviz
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --animate, --speed, --config, --quiet, --verbose

pub mod commands;
pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{BstArgs, Commands, PathArgs, SortArgs};
pub use output::OutputFormat;

/// Algoviz - step-by-step visualizer for campus paths, BSTs and quicksort
#[derive(Parser, Debug)]
#[command(name = "algoviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Replay steps with animation delays
    #[arg(long, short, global = true)]
    pub animate: bool,

    /// Base animation speed in milliseconds (overrides config)
    #[arg(long, global = true, env = "ALGOVIZ_SPEED")]
    pub speed: Option<u64>,

    /// Path to a config.toml (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, algoviz_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["algoviz", "nodes", "--format", "json", "--speed", "0"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.speed, Some(0));
        assert!(matches!(cli.command, Some(Commands::Nodes)));
    }

    #[test]
    fn test_path_args() {
        let cli = Cli::try_parse_from([
            "algoviz",
            "path",
            "Main Gate",
            "Sports Complex",
            "--algorithm",
            "bfs",
        ])
        .unwrap();
        let Some(Commands::Path(args)) = cli.command else {
            panic!("expected path command");
        };
        assert_eq!(args.start, "Main Gate");
        assert_eq!(args.destination, "Sports Complex");
        assert_eq!(args.algorithm, algoviz_core::graph::Algorithm::Bfs);
    }

    #[test]
    fn test_sort_values_list() {
        let cli = Cli::try_parse_from(["algoviz", "sort", "--values", "30, 10,20,40,50"]).unwrap();
        let Some(Commands::Sort(args)) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(args.values, Some(parse::ValueList(vec![30, 10, 20, 40, 50])));
        assert!(args.size.is_none());
    }

    #[test]
    fn test_invalid_algorithm_rejected() {
        let err = Cli::try_parse_from(["algoviz", "path", "A", "B", "--algorithm", "astar"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
