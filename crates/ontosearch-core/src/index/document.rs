//! Weighted pseudo-documents
//!
//! The ranking function has no notion of fields, so field importance is
//! simulated by repetition: a term's name is repeated `weights.name` times
//! and each synonym is repeated according to its scope.

use crate::config::WeightConfig;
use crate::term::Term;

/// Separator between repeated segments; never part of a token
pub const SEGMENT_SEPARATOR: &str = " \n ";

/// Build the weighted document text for a term.
///
/// Empty names and empty synonyms contribute nothing. A term with neither
/// yields an empty document.
pub fn build_document(term: &Term, weights: &WeightConfig) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(name) = term.name.as_deref().filter(|n| !n.is_empty()) {
        parts.extend(std::iter::repeat_n(name, weights.name as usize));
    }

    for synonym in &term.synonyms {
        if synonym.text.is_empty() {
            continue;
        }
        let weight = weights.scope_weight(synonym.weighting_scope());
        parts.extend(std::iter::repeat_n(synonym.text.as_str(), weight as usize));
    }

    parts.join(SEGMENT_SEPARATOR)
}
