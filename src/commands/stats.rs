//! `ontosearch stats` command - corpus statistics

use std::collections::BTreeMap;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_records_status;
use crate::output_by_format_result;
use ontosearch_core::error::Result;

/// Execute the stats command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let stats = ctx.open_db()?.stats()?;
    let db_path = ctx.db_display();

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        },
        human => {
            println!("Corpus: {}", db_path);
            println!("  Terms:        {}", stats.terms);
            println!("  Synonyms:     {}", stats.synonyms);
            println!("  Series:       {}", stats.series);
            println!("  Series links: {}", stats.series_links);
            print_breakdown("By type", &stats.by_type);
            print_breakdown("By ontology", &stats.by_ontology);
            print_breakdown("By synonym scope", &stats.by_scope);
        },
        records => {
            print_records_status(
                "stats",
                &db_path,
                &format!(
                    "terms={} synonyms={} series={} series_links={}",
                    stats.terms, stats.synonyms, stats.series, stats.series_links
                ),
            );
            for (kind, counts) in [
                ("type", &stats.by_type),
                ("ontology", &stats.by_ontology),
                ("scope", &stats.by_scope),
            ] {
                for (key, n) in counts {
                    println!("C {} {} {}", kind, key, n);
                }
            }
        }
    )
}

fn print_breakdown(title: &str, counts: &BTreeMap<String, i64>) {
    if counts.is_empty() {
        return;
    }
    println!();
    println!("{}:", title);
    for (key, n) in counts {
        println!("  {:<16} {}", key, n);
    }
}
