//! Turn raw scores into ranked hits

use crate::corpus::CorpusSource;
use crate::error::Result;
use crate::term::{Hit, Term};

/// Indices of documents scoring strictly above zero, best first.
///
/// Ties keep corpus order (the sort is stable). At most `k` indices.
pub fn top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] > 0.0).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    ranked.truncate(k);
    ranked
}

/// Build hits for the `k` best-scoring terms.
///
/// `terms` and `scores` are parallel slices in corpus order. Each selected
/// term's synonyms are fetched again from `source` in display order.
pub fn assemble<S: CorpusSource + ?Sized>(
    source: &S,
    terms: &[Term],
    scores: &[f64],
    k: usize,
) -> Result<Vec<Hit>> {
    debug_assert_eq!(terms.len(), scores.len());

    top_k(scores, k)
        .into_iter()
        .map(|i| {
            let term = &terms[i];
            Ok(Hit {
                term_id: term.term_id.clone(),
                ontology: term.ontology.clone(),
                name: term.name().to_string(),
                term_type: term.term_type.clone(),
                synonyms: source.fetch_synonyms(&term.term_id)?,
                score: scores[i],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemoryCorpus;
    use crate::term::Scope;

    #[test]
    fn test_top_k_drops_non_positive_scores() {
        let scores = [0.0, 1.0, -0.5, 0.25, 0.0];
        assert_eq!(top_k(&scores, 10), vec![1, 3]);
    }

    #[test]
    fn test_top_k_ties_keep_corpus_order() {
        let scores = [0.5, 2.0, 0.5, 2.0, 0.5];
        assert_eq!(top_k(&scores, 10), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_top_k_respects_limit() {
        let scores = [3.0, 1.0, 2.0, 4.0];
        assert_eq!(top_k(&scores, 2), vec![3, 0]);
        assert!(top_k(&scores, 0).is_empty());
    }

    #[test]
    fn test_assemble_keeps_score_term_alignment() {
        let terms = vec![
            Term::new("A:1", "alpha", "A", "t"),
            Term::new("A:2", "beta", "A", "t")
                .with_synonym("zeta", Some(Scope::Related))
                .with_synonym("eta", Some(Scope::Exact)),
            Term::new("A:3", "gamma", "A", "t"),
        ];
        let source = MemoryCorpus::new(terms.clone());

        let hits = assemble(&source, &terms, &[0.0, 2.5, 1.0], 5).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].term_id, "A:2");
        assert_eq!(hits[0].name, "beta");
        assert_eq!(hits[0].score, 2.5);
        assert_eq!(hits[0].synonyms[0].text, "eta");
        assert_eq!(hits[1].term_id, "A:3");
        assert!(hits[1].synonyms.is_empty());
    }

    #[test]
    fn test_assemble_null_name_becomes_empty() {
        let mut term = Term::new("A:1", "", "A", "t").with_synonym("alpha", None);
        term.name = None;
        let terms = vec![term];
        let source = MemoryCorpus::new(terms.clone());

        let hits = assemble(&source, &terms, &[1.0], 1).unwrap();
        assert_eq!(hits[0].name, "");
    }
}
