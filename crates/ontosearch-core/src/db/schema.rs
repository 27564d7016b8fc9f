//! SQLite schema for the ontology corpus

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Tables were created in an empty database
    Created,
    /// Schema already present at the current version
    Current,
    /// Schema present at an older version; tables were topped up
    Upgraded { from: i32 },
}

const SCHEMA_SQL: &str = r#"
-- Ontology terms (one row per CL/UBERON/MONDO/... term)
CREATE TABLE IF NOT EXISTS ontology_terms (
    term_id TEXT PRIMARY KEY,
    name TEXT,
    ontology TEXT NOT NULL,
    type TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_terms_type ON ontology_terms(type);
CREATE INDEX IF NOT EXISTS idx_terms_ontology ON ontology_terms(ontology);

-- Synonyms with their OBO scope (EXACT, NARROW, BROAD, RELATED or NULL)
CREATE TABLE IF NOT EXISTS ontology_synonyms (
    term_id TEXT NOT NULL,
    synonym TEXT NOT NULL,
    scope TEXT
);
CREATE INDEX IF NOT EXISTS idx_synonyms_term ON ontology_synonyms(term_id);

-- GEO series
CREATE TABLE IF NOT EXISTS series (
    series_id TEXT PRIMARY KEY,
    title TEXT,
    summary TEXT
);

-- Series annotated with ontology terms
CREATE TABLE IF NOT EXISTS series_terms (
    series_id TEXT NOT NULL,
    term_id TEXT NOT NULL,
    prob REAL NOT NULL DEFAULT 1.0,
    PRIMARY KEY (series_id, term_id)
);
CREATE INDEX IF NOT EXISTS idx_series_terms_term ON series_terms(term_id);

-- Index metadata
CREATE TABLE IF NOT EXISTS index_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Stored schema version, `None` when the database has no metadata table
pub fn stored_schema_version(conn: &Connection) -> Option<i32> {
    conn.query_row(
        "SELECT value FROM index_meta WHERE key = 'schema_version'",
        [],
        |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
    )
    .ok()
}

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let result = match stored_schema_version(conn) {
        None => SchemaCreateResult::Created,
        Some(v) if v < CURRENT_SCHEMA_VERSION => SchemaCreateResult::Upgraded { from: v },
        Some(_) => return Ok(SchemaCreateResult::Current),
    };

    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR REPLACE INTO index_meta (key, value) VALUES ('schema_version', ?1)",
        [&CURRENT_SCHEMA_VERSION.to_string()],
    )?;

    if let SchemaCreateResult::Upgraded { from } = result {
        tracing::info!(
            "Database schema updated from version {} to {}",
            from,
            CURRENT_SCHEMA_VERSION
        );
    }

    Ok(result)
}
