use std::collections::HashMap;

use rusqlite::params;

use crate::corpus::{CorpusSource, TermFilter};
use crate::error::Result;
use crate::term::{Synonym, Term};
use crate::{extract, map_db_err};

const TERMS_SQL: &str = "SELECT term_id, name, ontology, type FROM ontology_terms
     WHERE (?1 IS NULL OR type = ?1) AND (?2 IS NULL OR ontology = ?2)
     ORDER BY rowid";

const FILTERED_SYNONYMS_SQL: &str = "SELECT s.term_id, s.synonym, s.scope
     FROM ontology_synonyms s
     JOIN ontology_terms t ON t.term_id = s.term_id
     WHERE (?1 IS NULL OR t.type = ?1) AND (?2 IS NULL OR t.ontology = ?2)
     ORDER BY s.rowid";

const DISPLAY_SYNONYMS_SQL: &str = "SELECT synonym, scope FROM ontology_synonyms
     WHERE term_id = ?1
     ORDER BY CASE UPPER(TRIM(scope))
         WHEN 'EXACT' THEN 0
         WHEN 'BROAD' THEN 1
         WHEN 'NARROW' THEN 2
         WHEN 'RELATED' THEN 3
         ELSE 9
     END, synonym";

impl CorpusSource for super::Database {
    fn fetch_terms(&self, filter: &TermFilter) -> Result<Vec<Term>> {
        let term_type = filter.term_type.as_deref();
        let ontology = filter.ontology.as_deref();

        let mut stmt = self
            .conn
            .prepare(TERMS_SQL)
            .map_err(|e| map_db_err!("prepare term query", e))?;
        let mut rows = stmt
            .query(params![term_type, ontology])
            .map_err(|e| map_db_err!("query terms", e))?;

        let mut terms = Vec::new();
        while let Some(row) = rows.next().map_err(|e| map_db_err!("read term row", e))? {
            terms.push(Term {
                term_id: extract!(row, 0, "term_id")?,
                name: extract!(row, 1, "name")?,
                ontology: extract!(row, 2, "ontology")?,
                term_type: extract!(row, 3, "type")?,
                synonyms: Vec::new(),
            });
        }

        let mut synonyms = self.synonyms_by_term(term_type, ontology)?;
        for term in &mut terms {
            if let Some(list) = synonyms.remove(&term.term_id) {
                term.synonyms = list;
            }
        }

        tracing::debug!(terms = terms.len(), "fetched corpus");
        Ok(terms)
    }

    fn fetch_synonyms(&self, term_id: &str) -> Result<Vec<Synonym>> {
        let mut stmt = self
            .conn
            .prepare(DISPLAY_SYNONYMS_SQL)
            .map_err(|e| map_db_err!("prepare synonym query", e))?;
        let mut rows = stmt
            .query(params![term_id])
            .map_err(|e| map_db_err!("query synonyms", e))?;

        let mut synonyms = Vec::new();
        while let Some(row) = rows.next().map_err(|e| map_db_err!("read synonym row", e))? {
            let text: String = extract!(row, 0, "synonym")?;
            let scope: Option<String> = extract!(row, 1, "scope")?;
            synonyms.push(Synonym::from_stored(text, scope.as_deref()));
        }
        Ok(synonyms)
    }
}

impl super::Database {
    /// Synonyms of every term passing the filters, grouped by term in
    /// storage order
    fn synonyms_by_term(
        &self,
        term_type: Option<&str>,
        ontology: Option<&str>,
    ) -> Result<HashMap<String, Vec<Synonym>>> {
        let mut stmt = self
            .conn
            .prepare(FILTERED_SYNONYMS_SQL)
            .map_err(|e| map_db_err!("prepare synonym query", e))?;
        let mut rows = stmt
            .query(params![term_type, ontology])
            .map_err(|e| map_db_err!("query synonyms", e))?;

        let mut grouped: HashMap<String, Vec<Synonym>> = HashMap::new();
        while let Some(row) = rows.next().map_err(|e| map_db_err!("read synonym row", e))? {
            let term_id: String = extract!(row, 0, "term_id")?;
            let text: String = extract!(row, 1, "synonym")?;
            let scope: Option<String> = extract!(row, 2, "scope")?;
            grouped
                .entry(term_id)
                .or_default()
                .push(Synonym::from_stored(text, scope.as_deref()));
        }
        Ok(grouped)
    }

    /// Insert or replace a term together with its synonyms
    pub fn insert_term(&self, term: &Term) -> Result<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("start transaction", e))?;

        tx.execute(
            "INSERT OR REPLACE INTO ontology_terms (term_id, name, ontology, type)
             VALUES (?1, ?2, ?3, ?4)",
            params![term.term_id, term.name, term.ontology, term.term_type],
        )
        .map_err(|e| map_db_err!("insert term", e))?;

        tx.execute(
            "DELETE FROM ontology_synonyms WHERE term_id = ?1",
            params![term.term_id],
        )
        .map_err(|e| map_db_err!("clear synonyms", e))?;

        for synonym in &term.synonyms {
            tx.execute(
                "INSERT INTO ontology_synonyms (term_id, synonym, scope) VALUES (?1, ?2, ?3)",
                params![term.term_id, synonym.text, synonym.scope_label()],
            )
            .map_err(|e| map_db_err!("insert synonym", e))?;
        }

        tx.commit().map_err(|e| map_db_err!("commit term", e))?;
        Ok(())
    }

    /// Insert a synonym row with a raw scope string, as an ingestion step
    /// might store it
    pub fn insert_raw_synonym(&self, term_id: &str, text: &str, scope: Option<&str>) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO ontology_synonyms (term_id, synonym, scope) VALUES (?1, ?2, ?3)",
                params![term_id, text, scope],
            )
            .map_err(|e| map_db_err!("insert synonym", e))?;
        Ok(())
    }
}
