//! `algoviz path` command - campus route finding
//!
//! - `algoviz path <START> <DEST>` - Dijkstra by default
//! - `--algorithm bfs` - fewest hops, with the weighted length for comparison
//! - `--animate` - replay visited nodes, then path segments, with delays

pub mod format;

use crate::cli::PathArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::print_json;
use algoviz_core::error::Result;
use algoviz_core::graph::{Algorithm, PathResult};
use algoviz_core::session::Session;

use self::format::{step_line, summary_lines};

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let session = ctx.session()?;
    run(ctx, &session, &args.start, &args.destination, args.algorithm)
}

/// Search within an existing session and print the result
pub fn run(
    ctx: &CommandContext,
    session: &Session,
    start: &str,
    destination: &str,
    algorithm: Algorithm,
) -> Result<()> {
    let result = session.find_path(start, destination, algorithm)?;
    trace_command!(ctx.cli, ctx.start, "path_search");

    if ctx.json() {
        return print_json(&result);
    }
    render(ctx, &result);
    Ok(())
}

/// Human output, optionally replaying the search first
pub fn render(ctx: &CommandContext, result: &PathResult) {
    if ctx.animated() {
        let mut pacer = ctx.pacer();
        pacer.replay(result.replay_steps(), |step| println!("{}", step_line(step)));
    }
    for line in summary_lines(result, ctx.cli.quiet) {
        println!("{}", line);
    }
}
