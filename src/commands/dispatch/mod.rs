//! Command dispatch logic for bisearch

use std::env;
use std::time::Instant;

use bisearch_core::config::Config;
use bisearch_core::error::Result;

use crate::cli::Cli;

mod command;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    trace_command!(cli, start, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
