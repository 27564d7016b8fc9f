use rusqlite::params_from_iter;

use crate::error::Result;
use crate::search::series::{SeriesLink, SeriesSource};
use crate::{extract, map_db_err};

impl super::Database {
    /// Insert or replace a GEO series
    pub fn insert_series(
        &self,
        series_id: &str,
        title: Option<&str>,
        summary: Option<&str>,
    ) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO series (series_id, title, summary) VALUES (?1, ?2, ?3)",
                rusqlite::params![series_id, title, summary],
            )
            .map_err(|e| map_db_err!("insert series", e))?;
        Ok(())
    }

    /// Annotate a series with a term at probability `prob`
    pub fn link_series_term(&self, series_id: &str, term_id: &str, prob: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&prob) {
            crate::bail_invalid!("series term probability", prob);
        }
        self.conn
            .execute(
                "INSERT OR REPLACE INTO series_terms (series_id, term_id, prob) VALUES (?1, ?2, ?3)",
                rusqlite::params![series_id, term_id, prob],
            )
            .map_err(|e| map_db_err!("link series term", e))?;
        Ok(())
    }
}

impl SeriesSource for super::Database {
    fn fetch_series_links(&self, term_ids: &[String]) -> Result<Vec<SeriesLink>> {
        if term_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; term_ids.len()].join(", ");
        let sql = format!(
            "SELECT st.series_id, s.title, s.summary, st.term_id, st.prob
             FROM series_terms st
             LEFT JOIN series s ON s.series_id = st.series_id
             WHERE st.term_id IN ({placeholders})"
        );

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| map_db_err!("prepare series query", e))?;
        let mut rows = stmt
            .query(params_from_iter(term_ids.iter()))
            .map_err(|e| map_db_err!("query series", e))?;

        let mut links = Vec::new();
        while let Some(row) = rows.next().map_err(|e| map_db_err!("read series row", e))? {
            links.push(SeriesLink {
                series_id: extract!(row, 0, "series_id")?,
                title: extract!(row, 1, "title")?,
                summary: extract!(row, 2, "summary")?,
                term_id: extract!(row, 3, "term_id")?,
                prob: extract!(row, 4, "prob")?,
            });
        }
        Ok(links)
    }
}
