//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use algoviz_core::config::VizConfig;
use algoviz_core::error::Result;
use algoviz_core::pacing::{Pacer, PacingConfig};
use algoviz_core::session::Session;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: VizConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: VizConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Fresh session over the resolved config
    pub fn session(&self) -> Result<Session> {
        Session::new(self.config.clone())
    }

    /// Session whose random array is reproducible from `seed`
    pub fn seeded_session(&self, seed: u64) -> Result<Session> {
        Session::seeded(self.config.clone(), seed)
    }

    /// Paced only for animated human output
    pub fn pacer(&self) -> Pacer {
        if self.animated() {
            Pacer::new(PacingConfig::from_animation(&self.config.animation))
        } else {
            Pacer::new(PacingConfig::INSTANT)
        }
    }

    pub fn animated(&self) -> bool {
        self.cli.animate && self.cli.format == OutputFormat::Human
    }

    pub fn json(&self) -> bool {
        self.cli.format == OutputFormat::Json
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("algoviz {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step visualizer for campus paths, binary search trees and quicksort.");
        println!();
        println!("Run `algoviz --help` for usage information.");
        Ok(())
    }
}
