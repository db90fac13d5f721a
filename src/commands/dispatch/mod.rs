//! Command dispatch logic for algoviz

use std::time::Instant;

use crate::cli::Cli;
use algoviz_core::config::VizConfig;
use algoviz_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), speed_ms = config.animation.speed_ms, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Resolve the config file, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<VizConfig> {
    let mut config = VizConfig::resolve(cli.config.as_deref())?;
    if let Some(speed) = cli.speed {
        config.animation.speed_ms = speed;
    }
    Ok(config)
}
