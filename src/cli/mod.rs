//! CLI argument parsing for ontosearch
//!
//! Global flags: --db, --config, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{SearchArgs, SeriesArgs};
pub use ontosearch_core::format::OutputFormat;

use parse::parse_format;

/// Default corpus database file
pub const DEFAULT_DB: &str = "ontology_search.db";

/// Ontosearch - BM25+ search over ontology terms and GEO series
#[derive(Parser, Debug)]
#[command(name = "ontosearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Corpus database path
    #[arg(long, global = true, env = "ONTOSEARCH_DB", default_value = DEFAULT_DB)]
    pub db: PathBuf,

    /// Search configuration file (TOML)
    #[arg(long, global = true, env = "ONTOSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "info" or "ontosearch_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty corpus database
    Init,

    /// Rank ontology terms for a query
    Search(SearchArgs),

    /// Find GEO series through the best-matching terms
    Series(SeriesArgs),

    /// Show corpus statistics
    Stats,

    /// Print the effective search configuration
    Config,
}
