//! Error types and exit codes for ontosearch
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unparseable configuration)
//! - 3: Data/corpus error (missing corpus, no results)

mod macros;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the ontosearch binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args/config (2)
    Usage = 2,
    /// Data/corpus error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Why a search produced no hits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoResultsReason {
    /// The type/ontology filters matched no term at all
    EmptyCorpus {
        term_type: Option<String>,
        ontology: Option<String>,
    },
    /// No document scored above zero for the query
    NoMatches { query: String },
}

impl fmt::Display for NoResultsReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoResultsReason::EmptyCorpus {
                term_type,
                ontology,
            } => write!(
                f,
                "no entities matched the filters: ontology={}, type={}",
                ontology.as_deref().unwrap_or("*"),
                term_type.as_deref().unwrap_or("*")
            ),
            NoResultsReason::NoMatches { query } => {
                write!(f, "no results found for query: '{}'", query)
            }
        }
    }
}

impl From<rusqlite::Error> for OntoError {
    fn from(err: rusqlite::Error) -> Self {
        OntoError::Other(err.to_string())
    }
}

/// Errors that can occur during ontosearch operations
#[derive(Error, Debug)]
pub enum OntoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/corpus errors (exit code 3)
    #[error("{0}")]
    NoResultsFound(NoResultsReason),

    #[error("corpus database not found: {path:?}")]
    CorpusNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl OntoError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl fmt::Display) -> Self {
        OntoError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed field extraction from a database row
    pub fn field_extraction(field: &str, error: impl fmt::Display) -> Self {
        OntoError::FailedOperation {
            operation: format!("get {}", field),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        OntoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this is the "no results" condition raised by the search core
    pub fn is_no_results(&self) -> bool {
        matches!(self, OntoError::NoResultsFound(_))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OntoError::UnknownFormat(_)
            | OntoError::UsageError(_)
            | OntoError::InvalidValue { .. } => ExitCode::Usage,

            OntoError::NoResultsFound(_) | OntoError::CorpusNotFound { .. } => ExitCode::Data,

            OntoError::Io(_)
            | OntoError::Json(_)
            | OntoError::Toml(_)
            | OntoError::FailedOperation { .. }
            | OntoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            OntoError::UnknownFormat(_) => "unknown_format",
            OntoError::UsageError(_) => "usage_error",
            OntoError::InvalidValue { .. } => "invalid_value",
            OntoError::NoResultsFound(_) => "no_results_found",
            OntoError::CorpusNotFound { .. } => "corpus_not_found",
            OntoError::Io(_) => "io_error",
            OntoError::Json(_) => "json_error",
            OntoError::Toml(_) => "toml_error",
            OntoError::FailedOperation { .. } => "failed_operation",
            OntoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ontosearch operations
pub type Result<T> = std::result::Result<T, OntoError>;
