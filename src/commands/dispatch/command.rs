//! Command trait and context for dispatching commands

use std::time::Instant;

use bisearch_core::config::Config;
use bisearch_core::error::Result;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` if given, else the config file's `[output].format`
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
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
        println!("bisearch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Bidirectional path search over graph documents.");
        println!();
        println!("Run `bisearch --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path {
                graph,
                start,
                goal,
                search,
            } => commands::path::execute(ctx, graph, start, goal, search),
            Commands::Demo { from, to, search } => commands::demo::execute(ctx, from, to, search),
            Commands::Check { graph } => commands::check::execute(ctx, graph),
        }
    }
}
