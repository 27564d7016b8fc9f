//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use ontosearch_core::config::SearchConfig;
use ontosearch_core::db::Database;
use ontosearch_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Open the corpus named by `--db`
    pub fn open_db(&self) -> Result<Database> {
        Database::open(&self.cli.db)
    }

    /// Resolve the search configuration from `--config` and the environment
    pub fn load_config(&self) -> Result<SearchConfig> {
        let config = SearchConfig::load(self.cli.config.as_deref())?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    /// Database path as shown in output
    pub fn db_display(&self) -> String {
        self.cli.db.display().to_string()
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
        println!("ontosearch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Rank ontology terms and GEO series for free-text queries.");
        println!();
        println!("Run `ontosearch --help` for usage information.");
        Ok(())
    }
}
