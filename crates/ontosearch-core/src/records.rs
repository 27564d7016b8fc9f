//! Utilities for the records output format
//!
//! Each line starts with a one-letter record kind:
//! - `H` header with the command, query and result count
//! - `T` ranked term
//! - `Y` synonym of the preceding term
//! - `G` GEO series
//! - `F` series counts per confidence band

use crate::search::{ConfidenceCounts, SeriesHit};
use crate::term::{Hit, Synonym};

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the H-line opening a records response
pub fn format_header(mode: &str, db: &str, query: &str, results: usize) -> String {
    format!(
        "H ontosearch=1 records=1 db={} mode={} query=\"{}\" results={}",
        db,
        mode,
        escape_quotes(query),
        results
    )
}

/// Format a T-line for a ranked term
pub fn format_term_record(rank: usize, hit: &Hit) -> String {
    format!(
        "T {} {} {} {} score={:.4} \"{}\"",
        rank,
        hit.term_id,
        hit.ontology,
        hit.term_type,
        hit.score,
        escape_quotes(&hit.name)
    )
}

/// Format Y-lines for a term's synonyms; unscoped synonyms show `NONE`
pub fn format_synonym_lines(term_id: &str, synonyms: &[Synonym]) -> Vec<String> {
    synonyms
        .iter()
        .map(|s| {
            format!(
                "Y {} {} \"{}\"",
                term_id,
                s.scope_label().unwrap_or("NONE"),
                escape_quotes(&s.text)
            )
        })
        .collect()
}

/// Format a G-line for a series hit
pub fn format_series_record(rank: usize, hit: &SeriesHit) -> String {
    format!(
        "G {} {} term={} prob={:.3} confidence={} score={:.4} \"{}\"",
        rank,
        hit.series_id,
        hit.term_id,
        hit.prob,
        hit.confidence,
        hit.term_score,
        escape_quotes(hit.title.as_deref().unwrap_or(""))
    )
}

/// Format the F-line with per-band series counts
pub fn format_confidence_facets(facets: &ConfidenceCounts) -> String {
    format!(
        "F confidence high={} medium={} low={}",
        facets.high, facets.medium, facets.low
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Confidence;
    use crate::term::Scope;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes("no quotes"), "no quotes");
        assert_eq!(escape_quotes(r#"has "quotes""#), r#"has \"quotes\""#);
        assert_eq!(escape_quotes(""), "");
        assert_eq!(escape_quotes(r#""""#), r#"\"\""#);
    }

    #[test]
    fn test_header_escapes_query() {
        assert_eq!(
            format_header("search", "corpus.db", r#"say "hi""#, 0),
            r#"H ontosearch=1 records=1 db=corpus.db mode=search query="say \"hi\"" results=0"#
        );
    }

    #[test]
    fn test_term_and_synonym_lines() {
        let hit = Hit {
            term_id: "CL:0000540".to_string(),
            ontology: "CL".to_string(),
            name: "neuron".to_string(),
            term_type: "celltype".to_string(),
            synonyms: vec![
                Synonym::new("nerve cell", Some(Scope::Exact)),
                Synonym::new("neurocyte", None),
            ],
            score: 3.25,
        };

        assert_eq!(
            format_term_record(1, &hit),
            "T 1 CL:0000540 CL celltype score=3.2500 \"neuron\""
        );
        assert_eq!(
            format_synonym_lines(&hit.term_id, &hit.synonyms),
            vec![
                "Y CL:0000540 EXACT \"nerve cell\"".to_string(),
                "Y CL:0000540 NONE \"neurocyte\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_series_line_without_title() {
        let hit = SeriesHit {
            series_id: "GSE1".to_string(),
            title: None,
            summary: None,
            term_id: "CL:0000540".to_string(),
            term_score: 2.0,
            prob: 0.5,
            confidence: Confidence::Medium,
        };
        assert_eq!(
            format_series_record(2, &hit),
            "G 2 GSE1 term=CL:0000540 prob=0.500 confidence=medium score=2.0000 \"\""
        );
    }

    #[test]
    fn test_confidence_facets_line() {
        let facets = ConfidenceCounts {
            high: 2,
            medium: 0,
            low: 1,
        };
        assert_eq!(
            format_confidence_facets(&facets),
            "F confidence high=2 medium=0 low=1"
        );
    }
}
