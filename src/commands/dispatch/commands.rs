//! Command implementations for all algoviz commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{bst, nodes, path, shell, sort};
use algoviz_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        trace_command!(ctx.cli, ctx.start, "dispatch");
        match self {
            Commands::Nodes => nodes::execute(ctx),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Bst(args) => bst::execute(ctx, args),
            Commands::Sort(args) => sort::execute(ctx, args),
            Commands::Shell => shell::execute(ctx),
        }
    }
}
