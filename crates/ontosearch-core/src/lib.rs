//! Ontosearch Core Library
//!
//! BM25+ search over biomedical ontology terms (cell types, tissues,
//! diseases) and the GEO series annotated with them.

pub mod config;
pub mod corpus;
pub mod db;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod records;
pub mod search;
pub mod term;
pub mod text;

pub use config::SearchConfig;
pub use corpus::{CorpusSource, MemoryCorpus, TermFilter};
pub use error::{OntoError, Result};
pub use search::{search, search_series, Confidence, SearchOptions, SeriesOptions};
pub use term::{Hit, Scope, Synonym, Term};
