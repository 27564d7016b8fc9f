//! `ontosearch search` command - rank ontology terms
//!
//! - `ontosearch search <query>` ranks every term in the corpus
//! - `--type` / `--ontology` restrict the corpus before ranking
//! - `--limit` caps the number of hits (configured default otherwise)
//!
//! A query with no hits is not an error here: each format prints its empty
//! rendition and the command exits 0.

pub mod format;

use ontosearch_core::corpus::CorpusSource;
use ontosearch_core::error::Result;
use ontosearch_core::search::{search, SearchOptions};
use ontosearch_core::term::Hit;
use ontosearch_core::SearchConfig;
use tracing::debug;

use crate::cli::args::FilterArgs;
use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;

use self::format::{output_human, output_json, output_records};

/// Build search options from command-line filters
pub fn search_options(
    filter: &FilterArgs,
    limit: Option<usize>,
    config: &SearchConfig,
) -> SearchOptions {
    SearchOptions::new(limit.unwrap_or(config.default_limit))
        .with_type(filter.r#type.as_deref())
        .with_ontology(filter.ontology.as_deref())
}

/// Run a term search, treating "no results" as an empty hit list
pub fn search_or_empty<S: CorpusSource + ?Sized>(
    query: &str,
    source: &S,
    options: &SearchOptions,
    config: &SearchConfig,
) -> Result<Vec<Hit>> {
    match search(query, source, options, config) {
        Ok(hits) => Ok(hits),
        Err(e) if e.is_no_results() => {
            debug!(reason = %e, "no results");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let cli = ctx.cli;
    let config = ctx.load_config()?;
    let db = ctx.open_db()?;
    let options = search_options(&args.filter, args.limit, &config);

    debug!(
        query = %args.query,
        limit = options.limit,
        term_type = ?options.filter.term_type,
        ontology = ?options.filter.ontology,
        "search_params"
    );

    let hits = search_or_empty(&args.query, &db, &options, &config)?;
    debug!(result_count = hits.len(), elapsed = ?ctx.start.elapsed(), "search");

    output_by_format_result!(cli.format,
        json => { output_json(&hits) },
        human => { output_human(cli, &hits, &args.query); },
        records => { output_records(&ctx.db_display(), &hits, &args.query); }
    )
}
