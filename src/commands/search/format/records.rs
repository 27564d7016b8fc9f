//! Records output formatting for search command

use ontosearch_core::records::{format_header, format_synonym_lines, format_term_record};
use ontosearch_core::term::Hit;

/// Output in records format
pub fn output_records(db: &str, hits: &[Hit], query: &str) {
    println!("{}", format_header("search", db, query, hits.len()));

    for (i, hit) in hits.iter().enumerate() {
        println!("{}", format_term_record(i + 1, hit));
        for line in format_synonym_lines(&hit.term_id, &hit.synonyms) {
            println!("{}", line);
        }
    }
}
