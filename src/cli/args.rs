//! Command argument structures

use clap::Args;

use ontosearch_core::search::Confidence;

use crate::cli::parse::{parse_confidence, parse_limit};

/// Corpus filters shared by search commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only terms of this type (e.g. celltype, tissue, disease)
    #[arg(long, short = 'T')]
    pub r#type: Option<String>,

    /// Only terms from this ontology (e.g. CL, UBERON, MONDO)
    #[arg(long, short = 'O')]
    pub ontology: Option<String>,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of terms (defaults to the configured limit)
    #[arg(long, short = 'n', value_parser = parse_limit)]
    pub limit: Option<usize>,
}

/// Arguments for the series command.
#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Free-text query
    pub query: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of terms to expand
    #[arg(long, short = 'n', value_parser = parse_limit)]
    pub limit: Option<usize>,

    /// Maximum number of series
    #[arg(long, default_value = "20", value_parser = parse_limit)]
    pub max_series: usize,

    /// Only series whose link is in this band: high (prob >= 0.8),
    /// medium (0.5..0.8) or low (< 0.5)
    #[arg(long, value_parser = parse_confidence)]
    pub confidence: Option<Confidence>,
}
