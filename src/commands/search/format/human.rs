//! Human-readable output formatting for search command

use crate::cli::Cli;
use ontosearch_core::term::Hit;

/// Output in human-readable format
pub fn output_human(cli: &Cli, hits: &[Hit], query: &str) {
    if hits.is_empty() {
        if !cli.quiet {
            println!("No results found for '{}'", query);
        }
        return;
    }

    for (i, hit) in hits.iter().enumerate() {
        println!(
            "{:>2}. {} {} [{} {}] score={:.4}",
            i + 1,
            hit.term_id,
            hit.name,
            hit.ontology,
            hit.term_type,
            hit.score
        );

        if cli.quiet {
            continue;
        }
        for synonym in &hit.synonyms {
            let scope = synonym.scope_label().unwrap_or("-");
            println!("      {:<8} {}", scope, synonym.text);
        }
    }
}
