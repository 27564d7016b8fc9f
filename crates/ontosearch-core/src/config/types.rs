//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::term::Scope;

/// Search configuration passed explicitly into the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of hits returned when the caller gives no limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Repeat counts used to build weighted documents
    #[serde(default)]
    pub weights: WeightConfig,

    /// BM25+ ranking parameters
    #[serde(default)]
    pub bm25: Bm25Params,
}

/// Repeat counts for a term's name and for each synonym scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    #[serde(default = "default_name_weight")]
    pub name: u32,
    #[serde(default = "default_exact_weight")]
    pub exact: u32,
    #[serde(default = "default_narrow_weight")]
    pub narrow: u32,
    #[serde(default = "default_broad_weight")]
    pub broad: u32,
    #[serde(default = "default_related_weight")]
    pub related: u32,
}

impl WeightConfig {
    /// Repeat count for a synonym of the given scope
    pub fn scope_weight(&self, scope: Scope) -> u32 {
        match scope {
            Scope::Exact => self.exact,
            Scope::Narrow => self.narrow,
            Scope::Broad => self.broad,
            Scope::Related => self.related,
        }
    }
}

/// Tunable BM25+ parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation
    #[serde(default = "default_k1")]
    pub k1: f64,
    /// Length-normalization weight
    #[serde(default = "default_b")]
    pub b: f64,
    /// Lower-bound offset added per matching query term
    #[serde(default = "default_delta")]
    pub delta: f64,
}

fn default_limit() -> usize {
    20
}

fn default_name_weight() -> u32 {
    10
}

fn default_exact_weight() -> u32 {
    8
}

fn default_narrow_weight() -> u32 {
    7
}

fn default_broad_weight() -> u32 {
    3
}

fn default_related_weight() -> u32 {
    1
}

fn default_k1() -> f64 {
    1.2
}

fn default_b() -> f64 {
    0.8
}

fn default_delta() -> f64 {
    0.5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            bm25: Bm25Params::default(),
            default_limit: default_limit(),
        }
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            name: default_name_weight(),
            exact: default_exact_weight(),
            narrow: default_narrow_weight(),
            broad: default_broad_weight(),
            related: default_related_weight(),
        }
    }
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: default_k1(),
            b: default_b(),
            delta: default_delta(),
        }
    }
}
