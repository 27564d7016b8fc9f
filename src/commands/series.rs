//! `ontosearch series` command - GEO series reached through ranked terms

use ontosearch_core::error::Result;
use ontosearch_core::records::{format_confidence_facets, format_header, format_series_record};
use ontosearch_core::search::{search_series, SeriesOptions, SeriesResults};
use tracing::debug;

use crate::cli::{Cli, SeriesArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::search::search_options;
use crate::output_by_format_result;

/// Execute the series command
pub fn execute(ctx: &CommandContext, args: &SeriesArgs) -> Result<()> {
    let cli = ctx.cli;
    let config = ctx.load_config()?;
    let db = ctx.open_db()?;
    let options = search_options(&args.filter, args.limit, &config);

    let series_options = SeriesOptions {
        max_series: args.max_series,
        confidence: args.confidence,
    };

    let results = match search_series(&args.query, &db, &options, &config, &series_options) {
        Ok(results) => results,
        Err(e) if e.is_no_results() => {
            debug!(reason = %e, "no term hits");
            SeriesResults::default()
        }
        Err(e) => return Err(e),
    };
    debug!(
        result_count = results.series.len(),
        matched = results.facets.total(),
        elapsed = ?ctx.start.elapsed(),
        "series"
    );

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        },
        human => { output_human(cli, &results, &args.query); },
        records => {
            let count = results.series.len();
            println!("{}", format_header("series", &ctx.db_display(), &args.query, count));
            println!("{}", format_confidence_facets(&results.facets));
            for (i, hit) in results.series.iter().enumerate() {
                println!("{}", format_series_record(i + 1, hit));
            }
        }
    )
}

fn output_human(cli: &Cli, results: &SeriesResults, query: &str) {
    let series = &results.series;
    if series.is_empty() {
        if !cli.quiet {
            println!("No series found for '{}'", query);
        }
        return;
    }

    for (i, hit) in series.iter().enumerate() {
        println!(
            "{:>2}. {} {} (via {}, prob={:.3})",
            i + 1,
            hit.series_id,
            hit.title.as_deref().unwrap_or("(untitled)"),
            hit.term_id,
            hit.prob
        );
        if cli.verbose {
            if let Some(summary) = &hit.summary {
                println!("      {}", summary);
            }
        }
    }

    if !cli.quiet {
        let facets = &results.facets;
        println!(
            "\nConfidence: {} high, {} medium, {} low",
            facets.high, facets.medium, facets.low
        );
    }
}
