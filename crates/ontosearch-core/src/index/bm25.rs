//! BM25+ ranking index
//!
//! Plain BM25 lets a one-token document outrank a longer, more relevant one
//! purely through length normalization. BM25+ adds a floor (`delta`) to the
//! term-frequency component of every matching query term.
//!
//! For a query token `t` occurring `tf > 0` times in document `d`:
//!
//! ```text
//! idf(t) * (delta + tf * (k1 + 1) / (k1 * (1 - b + b * |d| / avgdl) + tf))
//! idf(t) = ln((N + 1) / df(t))
//! ```

use std::collections::HashMap;

use crate::config::Bm25Params;

/// A single entry in a token's postings list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Posting {
    /// Position of the document in the corpus
    doc: usize,
    /// Occurrences of the token in that document
    tf: u32,
}

/// In-memory BM25+ index over a tokenized corpus.
///
/// Built from scratch for every search; documents are addressed by their
/// position in the corpus slice it was built from.
#[derive(Debug, Clone)]
pub struct Bm25Index {
    params: Bm25Params,
    postings: HashMap<String, Vec<Posting>>,
    doc_lengths: Vec<usize>,
    avgdl: f64,
}

impl Bm25Index {
    /// Build the index. Empty documents are allowed and still take a slot.
    pub fn build<D: AsRef<[String]>>(corpus: &[D], params: Bm25Params) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_lengths = Vec::with_capacity(corpus.len());

        for (doc, tokens) in corpus.iter().enumerate() {
            let tokens = tokens.as_ref();
            doc_lengths.push(tokens.len());

            // Count term frequencies for this doc, keeping first-seen order
            let mut tf_map: HashMap<&str, u32> = HashMap::new();
            let mut order: Vec<&str> = Vec::new();
            for token in tokens {
                let tf = tf_map.entry(token.as_str()).or_insert(0);
                if *tf == 0 {
                    order.push(token.as_str());
                }
                *tf += 1;
            }

            for token in order {
                postings.entry(token.to_string()).or_default().push(Posting {
                    doc,
                    tf: tf_map[token],
                });
            }
        }

        let total: usize = doc_lengths.iter().sum();
        let avgdl = if doc_lengths.is_empty() {
            0.0
        } else {
            total as f64 / doc_lengths.len() as f64
        };

        Self {
            params,
            postings,
            doc_lengths,
            avgdl,
        }
    }

    /// Number of documents in the index
    pub fn len(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_lengths.is_empty()
    }

    /// Average document length in tokens
    pub fn average_doc_length(&self) -> f64 {
        self.avgdl
    }

    /// Number of documents containing `token`
    pub fn document_frequency(&self, token: &str) -> usize {
        self.postings.get(token).map_or(0, Vec::len)
    }

    /// Inverse document frequency; zero for tokens absent from the corpus
    pub fn idf(&self, token: &str) -> f64 {
        let df = self.document_frequency(token);
        if df == 0 {
            return 0.0;
        }
        ((self.len() as f64 + 1.0) / df as f64).ln()
    }

    /// Score `query` against every document, in corpus order.
    ///
    /// Repeated query tokens contribute once per occurrence. An empty query
    /// scores zero everywhere.
    pub fn scores<Q: AsRef<str>>(&self, query: &[Q]) -> Vec<f64> {
        let mut scores = vec![0.0; self.len()];
        let Bm25Params { k1, b, delta } = self.params;

        for token in query {
            let token = token.as_ref();
            let Some(postings) = self.postings.get(token) else {
                continue;
            };
            let idf = self.idf(token);

            for posting in postings {
                let tf = f64::from(posting.tf);
                let length_ratio = if self.avgdl > 0.0 {
                    self.doc_lengths[posting.doc] as f64 / self.avgdl
                } else {
                    0.0
                };
                let norm = k1 * (1.0 - b + b * length_ratio) + tf;
                scores[posting.doc] += idf * (delta + tf * (k1 + 1.0) / norm);
            }
        }

        scores
    }
}
