//! Ontology term search
//!
//! A search moves through fixed stages:
//!
//! ```text
//! Idle -> CorpusLoaded -> Indexed -> Scored -> ResultsReady
//! ```
//!
//! and fails with [`OntoError::NoResultsFound`] when the filtered corpus is
//! empty or nothing scores above zero. Every call rebuilds the index from
//! the corpus; nothing is shared between calls.

pub mod assemble;
pub mod series;

use std::fmt;
use std::time::Instant;

use crate::config::SearchConfig;
use crate::corpus::{CorpusSource, TermFilter};
use crate::error::{NoResultsReason, OntoError, Result};
use crate::index::index_terms;
use crate::term::Hit;
use crate::text::tokenize;
use crate::trace_time;

pub use assemble::assemble;
pub use series::{
    search_series, Confidence, ConfidenceCounts, SeriesHit, SeriesOptions, SeriesResults,
    SeriesSource,
};

/// Caller-controlled search options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits
    pub limit: usize,
    /// Corpus filters
    pub filter: TermFilter,
}

impl SearchOptions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            filter: TermFilter::default(),
        }
    }

    pub fn with_type(mut self, term_type: Option<&str>) -> Self {
        self.filter = self.filter.with_type(term_type);
        self
    }

    pub fn with_ontology(mut self, ontology: Option<&str>) -> Self {
        self.filter = self.filter.with_ontology(ontology);
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new(SearchConfig::default().default_limit)
    }
}

/// Stage a search has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStage {
    Idle,
    CorpusLoaded,
    Indexed,
    Scored,
    ResultsReady,
}

impl fmt::Display for SearchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStage::Idle => "idle",
            SearchStage::CorpusLoaded => "corpus_loaded",
            SearchStage::Indexed => "indexed",
            SearchStage::Scored => "scored",
            SearchStage::ResultsReady => "results_ready",
        };
        f.write_str(name)
    }
}

/// Rank ontology terms in `source` against `query`.
///
/// Returns at most `options.limit` hits, best first, each with a score
/// strictly above zero. Fails with `NoResultsFound` rather than returning an
/// empty list when nothing matches.
#[tracing::instrument(skip(source, options, config), fields(limit = options.limit, term_type = ?options.filter.term_type, ontology = ?options.filter.ontology))]
pub fn search<S: CorpusSource + ?Sized>(
    query: &str,
    source: &S,
    options: &SearchOptions,
    config: &SearchConfig,
) -> Result<Vec<Hit>> {
    let start = Instant::now();

    let terms = source.fetch_terms(&options.filter)?;
    if terms.is_empty() {
        return Err(no_results(
            SearchStage::Idle,
            NoResultsReason::EmptyCorpus {
                term_type: options.filter.term_type.clone(),
                ontology: options.filter.ontology.clone(),
            },
        ));
    }
    trace_time!(start, "fetch_terms", terms = terms.len());

    let index = index_terms(&terms, config);
    trace_time!(
        start,
        "build_index",
        documents = index.len(),
        avgdl = index.average_doc_length()
    );

    let query_tokens = tokenize(query);
    let scores = index.scores(&query_tokens);
    let matched = scores.iter().filter(|s| **s > 0.0).count();
    trace_time!(
        start,
        "score_query",
        query_tokens = query_tokens.len(),
        matched = matched
    );

    if matched == 0 {
        return Err(no_results(
            SearchStage::Scored,
            NoResultsReason::NoMatches {
                query: query.to_string(),
            },
        ));
    }

    let hits = assemble(source, &terms, &scores, options.limit)?;
    trace_time!(start, "assemble", hits = hits.len());
    tracing::trace!(stage = %SearchStage::ResultsReady, "search_done");

    Ok(hits)
}

/// Fail from the last stage reached
fn no_results(reached: SearchStage, reason: NoResultsReason) -> OntoError {
    tracing::debug!(stage = %reached, %reason, "no results");
    OntoError::NoResultsFound(reason)
}
