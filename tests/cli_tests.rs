//! Integration tests for the ontosearch CLI
//!
//! These tests run the binary against temporary SQLite corpora.

mod support;

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use support::{ontosearch, ontosearch_with_db, Corpus};
use tempfile::tempdir;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help, version and init
// ============================================================================

#[test]
fn test_help_flag() {
    ontosearch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ontosearch"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("series"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_version_flag() {
    ontosearch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ontosearch"));
}

#[test]
fn test_init_is_idempotent() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("data").join("corpus.db");

    ontosearch_with_db(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized corpus database"));
    ontosearch_with_db(&db).arg("init").assert().success();

    assert!(db.exists());
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("corpus.db");

    let output = ontosearch_with_db(&db)
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["schema_version"], 1);
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_human() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["search", "nerve cell"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 1. CL:0000540 neuron [CL celltype]"))
        .stdout(predicate::str::contains("EXACT    nerve cell"));
}

#[test]
fn test_search_json_hits() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "search", "nerve cell"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let hits = json.as_array().unwrap();
    assert_eq!(hits[0]["term_id"], "CL:0000540");
    assert_eq!(hits[0]["type"], "celltype");
    assert!(hits[0]["score"].as_f64().unwrap() > 0.0);

    let synonyms: Vec<(&str, &str)> = hits[0]["synonyms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["text"].as_str().unwrap(), s["scope"].as_str().unwrap()))
        .collect();
    assert_eq!(
        synonyms,
        vec![
            ("nerve cell", "EXACT"),
            ("neuronal cell", "BROAD"),
            ("neurocyte", "RELATED"),
        ]
    );
}

#[test]
fn test_search_limit() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "search", "cell", "--limit", "1"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 1);
}

#[test]
fn test_search_zero_limit_is_usage_error() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["search", "neuron", "--limit", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_search_filters() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "search", "brain neuron", "--type", "tissue"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["term_id"], "UBERON:0000955");
}

#[test]
fn test_search_nameless_term() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "search", "orphan"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json[0]["term_id"], "MONDO:0000001");
    assert_eq!(json[0]["name"], "");
    assert_eq!(json[0]["synonyms"][0]["scope"], Value::Null);
}

#[test]
fn test_search_no_results_human() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["search", "xyz123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'xyz123'"));
}

#[test]
fn test_search_no_results_json_is_empty_array() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "search", "!!!"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn test_search_empty_filter_is_not_an_error() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["--format", "records", "search", "neuron", "--ontology", "HP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=search"))
        .stdout(predicate::str::contains("results=0"));
}

#[test]
fn test_search_records() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["--format", "records", "search", "neuron"])
        .assert()
        .success()
        .stdout(predicate::str::contains("query=\"neuron\" results=1"))
        .stdout(predicate::str::contains("T 1 CL:0000540 CL celltype score="))
        .stdout(predicate::str::contains("Y CL:0000540 EXACT \"nerve cell\""));
}

#[test]
fn test_search_missing_corpus() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("absent.db");

    ontosearch_with_db(&db)
        .args(["search", "neuron"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("corpus database not found"));
    assert!(!db.exists());
}

#[test]
fn test_search_missing_corpus_json_error() {
    let dir = tempdir().unwrap();
    let output = ontosearch_with_db(&dir.path().join("absent.db"))
        .args(["--format", "json", "search", "neuron"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "corpus_not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_db_from_environment() {
    let corpus = Corpus::sample();
    ontosearch()
        .env("ONTOSEARCH_DB", &corpus.path)
        .args(["search", "astrocyte"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CL:0000127"));
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_invalid_weight_env_is_usage_error() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .env("NAME_WEIGHT", "heavy")
        .args(["search", "neuron"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NAME_WEIGHT"));
}

#[test]
fn test_config_reflects_env_and_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[weights]\nname = 12\n\n[bm25]\nk1 = 1.5\n").unwrap();

    let output = ontosearch()
        .env("SCOPE_WEIGHT_BROAD", "4")
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["weights"]["name"], 12);
    assert_eq!(json["weights"]["broad"], 4);
    assert_eq!(json["weights"]["exact"], 8);
    assert_eq!(json["bm25"]["k1"], 1.5);
    assert_eq!(json["bm25"]["b"], 0.8);
}

#[test]
fn test_config_human_is_toml() {
    ontosearch()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("[weights]"))
        .stdout(predicate::str::contains("name = 10"));
}

#[test]
fn test_out_of_range_param_rejected() {
    ontosearch()
        .env("BM25_B", "1.5")
        .arg("config")
        .assert()
        .code(2);
}

// ============================================================================
// series and stats
// ============================================================================

#[test]
fn test_series_human() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["series", "neuron"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            " 1. GSE100 Cortical neurons (via CL:0000540, prob=0.950)",
        ))
        .stdout(predicate::str::contains(
            " 2. GSE200 Whole brain atlas (via CL:0000540, prob=0.200)",
        ))
        .stdout(predicate::str::contains("Confidence: 1 high, 0 medium, 1 low"));
}

#[test]
fn test_series_json_max_series() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "series", "neuron", "--max-series", "1"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    let series = json["series"].as_array().unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["series_id"], "GSE100");
    assert_eq!(series[0]["summary"], "RNA-seq of cultured neurons");
    assert_eq!(series[0]["confidence"], "high");
    // counts cover every matched series, not just the returned ones
    assert_eq!(json["facets"]["high"], 1);
    assert_eq!(json["facets"]["low"], 1);
}

#[test]
fn test_series_confidence_filter() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["--format", "records", "series", "neuron", "--confidence", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("results=1"))
        .stdout(predicate::str::contains("F confidence high=1 medium=0 low=1"))
        .stdout(predicate::str::contains("G 1 GSE200 term=CL:0000540 prob=0.200 confidence=low"))
        .stdout(predicate::str::contains("GSE100").not());
}

#[test]
fn test_series_unknown_confidence_is_usage_error() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["series", "neuron", "--confidence", "certain"])
        .assert()
        .code(2);
}

#[test]
fn test_series_without_hits() {
    let corpus = Corpus::sample();
    corpus
        .cmd()
        .args(["series", "xyz123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No series found for 'xyz123'"));
}

#[test]
fn test_stats_json() {
    let corpus = Corpus::sample();
    let output = corpus
        .cmd()
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["terms"], 7);
    assert_eq!(json["synonyms"], 8);
    assert_eq!(json["series"], 2);
    assert_eq!(json["series_links"], 3);
    assert_eq!(json["by_type"]["celltype"], 3);
    assert_eq!(json["by_scope"]["NONE"], 1);
}

#[test]
fn test_stats_on_empty_corpus() {
    let corpus = Corpus::empty();
    corpus
        .cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terms:        0"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    ontosearch()
        .args(["--format", "yaml", "stats"])
        .assert()
        .code(2);
}
