//! Command dispatch logic for ontosearch

use std::time::Instant;

use crate::cli::Cli;
use ontosearch_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    debug!(db = %cli.db.display(), elapsed = ?start.elapsed(), "dispatch");

    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
