use assert_cmd::{cargo::cargo_bin_cmd, Command};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test
const ISOLATED_ENV: [&str; 12] = [
    "ONTOSEARCH_DB",
    "ONTOSEARCH_CONFIG",
    "ONTOSEARCH_LOG",
    "RUST_LOG",
    "NAME_WEIGHT",
    "SCOPE_WEIGHT_EXACT",
    "SCOPE_WEIGHT_NARROW",
    "SCOPE_WEIGHT_BROAD",
    "SCOPE_WEIGHT_RELATED",
    "BM25_K1",
    "BM25_B",
    "BM25_DELTA",
];

/// Get a Command for ontosearch with a clean environment
pub fn ontosearch() -> Command {
    let mut cmd = cargo_bin_cmd!("ontosearch");
    for key in ISOLATED_ENV {
        cmd.env_remove(key);
    }
    // keep any per-user config file out of reach
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/ontosearch-test-config");
    cmd
}

/// Get a Command for ontosearch pointed at `db`
pub fn ontosearch_with_db(db: &Path) -> Command {
    let mut cmd = ontosearch();
    cmd.arg("--db").arg(db);
    cmd
}

/// A temporary corpus initialised through the binary
pub struct Corpus {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Corpus {
    /// Create an empty corpus with `ontosearch init`
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.db");
        ontosearch_with_db(&path).arg("init").assert().success();
        Corpus { _dir: dir, path }
    }

    /// Corpus with a few cell types, tissues and diseases plus linked series
    pub fn sample() -> Self {
        let corpus = Self::empty();
        let conn = Connection::open(&corpus.path).unwrap();

        let terms = [
            ("CL:0000540", Some("neuron"), "CL", "celltype"),
            ("CL:0000127", Some("astrocyte"), "CL", "celltype"),
            ("CL:0000236", Some("B cell"), "CL", "celltype"),
            ("UBERON:0000955", Some("brain"), "UBERON", "tissue"),
            ("UBERON:0002107", Some("liver"), "UBERON", "tissue"),
            ("MONDO:0005559", Some("neurodegenerative disease"), "MONDO", "disease"),
            ("MONDO:0000001", None, "MONDO", "disease"),
        ];
        for (id, name, ontology, term_type) in terms {
            conn.execute(
                "INSERT INTO ontology_terms (term_id, name, ontology, type) VALUES (?1, ?2, ?3, ?4)",
                params![id, name, ontology, term_type],
            )
            .unwrap();
        }

        let synonyms = [
            ("CL:0000540", "nerve cell", Some("EXACT")),
            ("CL:0000540", "neurocyte", Some("RELATED")),
            ("CL:0000540", "neuronal cell", Some("BROAD")),
            ("CL:0000127", "astrocytic glia", Some("BROAD")),
            ("CL:0000236", "B lymphocyte", Some("EXACT")),
            ("UBERON:0000955", "encephalon", Some("RELATED")),
            ("MONDO:0005559", "neurodegeneration", Some("NARROW")),
            ("MONDO:0000001", "orphan disorder", None),
        ];
        for (id, text, scope) in synonyms {
            conn.execute(
                "INSERT INTO ontology_synonyms (term_id, synonym, scope) VALUES (?1, ?2, ?3)",
                params![id, text, scope],
            )
            .unwrap();
        }

        conn.execute_batch(
            "INSERT INTO series (series_id, title, summary) VALUES
                 ('GSE100', 'Cortical neurons', 'RNA-seq of cultured neurons'),
                 ('GSE200', 'Whole brain atlas', NULL);
             INSERT INTO series_terms (series_id, term_id, prob) VALUES
                 ('GSE100', 'CL:0000540', 0.95),
                 ('GSE200', 'UBERON:0000955', 0.8),
                 ('GSE200', 'CL:0000540', 0.2);",
        )
        .unwrap();

        corpus
    }

    pub fn cmd(&self) -> Command {
        ontosearch_with_db(&self.path)
    }
}
