//! Command implementations for all ontosearch commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{config, init, search, series, stats};
use ontosearch_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => init::execute(ctx),
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Series(args) => series::execute(ctx, args),
            Commands::Stats => stats::execute(ctx),
            Commands::Config => config::execute(ctx),
        }
    }
}
