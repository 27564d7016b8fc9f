//! Search configuration for ontosearch
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment overrides. The result is read once at startup and handed to
//! the engine as a value.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{OntoError, Result};

pub use types::{Bm25Params, SearchConfig, WeightConfig};

const CONFIG_DIR: &str = "ontosearch";
const CONFIG_FILE: &str = "config.toml";

/// Integer weight overrides, in the order they are applied
pub const WEIGHT_ENV_VARS: [&str; 5] = [
    "NAME_WEIGHT",
    "SCOPE_WEIGHT_EXACT",
    "SCOPE_WEIGHT_NARROW",
    "SCOPE_WEIGHT_BROAD",
    "SCOPE_WEIGHT_RELATED",
];

/// Float ranking parameter overrides
pub const BM25_ENV_VARS: [&str; 3] = ["BM25_K1", "BM25_B", "BM25_DELTA"];

impl SearchConfig {
    /// Load configuration from `explicit` (must exist) or the per-user config
    /// file (if present), then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            OntoError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: SearchConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are rejected rather than ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in WEIGHT_ENV_VARS {
            let Some(raw) = lookup(key) else { continue };
            let value = parse_weight(key, &raw)?;
            let slot = match key {
                "NAME_WEIGHT" => &mut self.weights.name,
                "SCOPE_WEIGHT_EXACT" => &mut self.weights.exact,
                "SCOPE_WEIGHT_NARROW" => &mut self.weights.narrow,
                "SCOPE_WEIGHT_BROAD" => &mut self.weights.broad,
                _ => &mut self.weights.related,
            };
            *slot = value;
        }

        for key in BM25_ENV_VARS {
            let Some(raw) = lookup(key) else { continue };
            let value = parse_param(key, &raw)?;
            match key {
                "BM25_K1" => self.bm25.k1 = value,
                "BM25_B" => self.bm25.b = value,
                _ => self.bm25.delta = value,
            }
        }

        Ok(())
    }

    /// Reject out-of-range parameters and warn about weight orderings that
    /// break the name > exact > narrow > broad > related ranking policy.
    pub fn validate(&self) -> Result<()> {
        let bm25 = &self.bm25;
        if bm25.k1 < 0.0 {
            bail_invalid!("BM25 k1 (must be >= 0)", bm25.k1);
        }
        if !(0.0..=1.0).contains(&bm25.b) {
            bail_invalid!("BM25 b (must be within 0..=1)", bm25.b);
        }
        if bm25.delta < 0.0 {
            bail_invalid!("BM25 delta (must be >= 0)", bm25.delta);
        }
        if self.default_limit == 0 {
            bail_invalid!("default_limit (must be >= 1)", self.default_limit);
        }

        let w = &self.weights;
        if w.narrow < w.broad {
            tracing::warn!(
                narrow = w.narrow,
                broad = w.broad,
                "NARROW synonyms weighted below BROAD; ranking was tuned for NARROW > BROAD"
            );
        }
        let max_synonym = w.exact.max(w.narrow).max(w.broad).max(w.related);
        if max_synonym > w.name {
            tracing::warn!(
                name = w.name,
                max_synonym,
                "a synonym scope outweighs the term name"
            );
        }

        Ok(())
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| OntoError::Other(format!("failed to serialize config: {}", e)))
    }
}

/// Per-user config file location (`~/.config/ontosearch/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn parse_weight(key: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| OntoError::invalid_value(key, raw))
}

fn parse_param(key: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(OntoError::invalid_value(key, raw)),
    }
}
