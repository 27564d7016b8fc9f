//! Weighted documents and the BM25+ ranking index

pub mod bm25;
pub mod document;

pub use bm25::Bm25Index;
pub use document::build_document;

use crate::config::SearchConfig;
use crate::term::Term;
use crate::text::tokenize;

/// Build weighted documents for `terms`, tokenize them, and index them.
///
/// The Nth indexed document is always the Nth term.
pub fn index_terms(terms: &[Term], config: &SearchConfig) -> Bm25Index {
    let corpus: Vec<Vec<String>> = terms
        .iter()
        .map(|term| tokenize(&build_document(term, &config.weights)))
        .collect();
    Bm25Index::build(&corpus, config.bm25)
}
