//! Corpus access for the search engine
//!
//! The engine only reads terms and synonyms; where they live is up to the
//! implementor. [`crate::db::Database`] reads a SQLite file and
//! [`MemoryCorpus`] holds terms in a vector.

use crate::error::Result;
use crate::term::{sort_for_display, Synonym, Term};

/// Exact-match filters applied when fetching the corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFilter {
    /// Restrict to this type, e.g. "celltype", "disease" or "tissue"
    pub term_type: Option<String>,
    /// Restrict to this ontology, e.g. "CL", "UBERON" or "MONDO"
    pub ontology: Option<String>,
}

impl TermFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, term_type: Option<&str>) -> Self {
        self.term_type = term_type.map(str::to_string);
        self
    }

    pub fn with_ontology(mut self, ontology: Option<&str>) -> Self {
        self.ontology = ontology.map(str::to_string);
        self
    }

    /// Whether `term` passes both filters
    pub fn matches(&self, term: &Term) -> bool {
        self.term_type
            .as_deref()
            .is_none_or(|t| t == term.term_type)
            && self
                .ontology
                .as_deref()
                .is_none_or(|o| o == term.ontology)
    }
}

/// Read-only source of ontology terms
pub trait CorpusSource {
    /// Terms passing `filter`, each with its synonyms, in a stable order.
    ///
    /// Synonyms keep their stored order.
    fn fetch_terms(&self, filter: &TermFilter) -> Result<Vec<Term>>;

    /// Synonyms of one term in display order: EXACT, BROAD, NARROW,
    /// RELATED, then unscoped; alphabetical within each scope.
    fn fetch_synonyms(&self, term_id: &str) -> Result<Vec<Synonym>>;
}

/// Corpus held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    terms: Vec<Term>,
}

impl MemoryCorpus {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<Term> for MemoryCorpus {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CorpusSource for MemoryCorpus {
    fn fetch_terms(&self, filter: &TermFilter) -> Result<Vec<Term>> {
        Ok(self
            .terms
            .iter()
            .filter(|term| filter.matches(term))
            .cloned()
            .collect())
    }

    fn fetch_synonyms(&self, term_id: &str) -> Result<Vec<Synonym>> {
        let mut synonyms = self
            .terms
            .iter()
            .find(|term| term.term_id == term_id)
            .map(|term| term.synonyms.clone())
            .unwrap_or_default();
        sort_for_display(&mut synonyms);
        Ok(synonyms)
    }
}

impl<S: CorpusSource + ?Sized> CorpusSource for &S {
    fn fetch_terms(&self, filter: &TermFilter) -> Result<Vec<Term>> {
        (**self).fetch_terms(filter)
    }

    fn fetch_synonyms(&self, term_id: &str) -> Result<Vec<Synonym>> {
        (**self).fetch_synonyms(term_id)
    }
}
