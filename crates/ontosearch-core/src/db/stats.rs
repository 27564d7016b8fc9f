use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::map_db_err;

/// Summary counts for a corpus database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub terms: i64,
    pub synonyms: i64,
    pub series: i64,
    pub series_links: i64,
    pub by_type: BTreeMap<String, i64>,
    pub by_ontology: BTreeMap<String, i64>,
    /// Synonym counts per stored scope; absent scopes are keyed "NONE"
    pub by_scope: BTreeMap<String, i64>,
}

impl super::Database {
    pub fn stats(&self) -> Result<CorpusStats> {
        Ok(CorpusStats {
            terms: self.count("SELECT COUNT(*) FROM ontology_terms")?,
            synonyms: self.count("SELECT COUNT(*) FROM ontology_synonyms")?,
            series: self.count("SELECT COUNT(*) FROM series")?,
            series_links: self.count("SELECT COUNT(*) FROM series_terms")?,
            by_type: self.grouped("SELECT type, COUNT(*) FROM ontology_terms GROUP BY type")?,
            by_ontology: self
                .grouped("SELECT ontology, COUNT(*) FROM ontology_terms GROUP BY ontology")?,
            by_scope: self.grouped(
                "SELECT COALESCE(NULLIF(UPPER(TRIM(scope)), ''), 'NONE') AS label, COUNT(*)
                 FROM ontology_synonyms GROUP BY label",
            )?,
        })
    }

    fn count(&self, sql: &str) -> Result<i64> {
        self.conn
            .query_row(sql, [], |r| r.get(0))
            .map_err(|e| map_db_err!("count rows", e))
    }

    fn grouped(&self, sql: &str) -> Result<BTreeMap<String, i64>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| map_db_err!("prepare stats query", e))?;
        let rows = stmt
            .query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))
            .map_err(|e| map_db_err!("query stats", e))?;

        let mut counts = BTreeMap::new();
        for row in rows {
            let (key, n) = row.map_err(|e| map_db_err!("read stats row", e))?;
            *counts.entry(key).or_insert(0) += n;
        }
        Ok(counts)
    }
}
