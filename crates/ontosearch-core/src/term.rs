//! Ontology terms, synonyms and search hits

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::OntoError;

/// Synonym scope per the OBO 1.4 synonym conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    Exact,
    Narrow,
    Broad,
    Related,
}

impl Scope {
    /// Scope used for weighting when a synonym has none (OBO 1.4)
    pub const DEFAULT: Scope = Scope::Related;

    /// Parse a stored scope string, yielding `None` for absent or unknown scopes
    pub fn parse_lenient(raw: Option<&str>) -> Option<Scope> {
        raw.and_then(|s| s.parse().ok())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Exact => "EXACT",
            Scope::Narrow => "NARROW",
            Scope::Broad => "BROAD",
            Scope::Related => "RELATED",
        }
    }
}

impl FromStr for Scope {
    type Err = OntoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EXACT" => Ok(Scope::Exact),
            "NARROW" => Ok(Scope::Narrow),
            "BROAD" => Ok(Scope::Broad),
            "RELATED" => Ok(Scope::Related),
            other => Err(OntoError::invalid_value("synonym scope", other)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display position of a scope when listing a hit's synonyms.
///
/// BROAD is listed before NARROW here even though NARROW is weighted higher
/// when building documents; unscoped synonyms go last.
pub fn display_rank(scope: Option<Scope>) -> u8 {
    match scope {
        Some(Scope::Exact) => 0,
        Some(Scope::Broad) => 1,
        Some(Scope::Narrow) => 2,
        Some(Scope::Related) => 3,
        None => 9,
    }
}

/// A synonym of an ontology term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synonym {
    pub text: String,
    /// `None` when the stored scope was absent or unrecognized
    pub scope: Option<Scope>,
    /// Stored scope text that did not parse as a known scope
    pub unknown_scope: Option<String>,
}

impl Synonym {
    pub fn new(text: impl Into<String>, scope: Option<Scope>) -> Self {
        Self {
            text: text.into(),
            scope,
            unknown_scope: None,
        }
    }

    /// Build from a stored row, keeping unrecognized scope text for display
    pub fn from_stored(text: impl Into<String>, raw_scope: Option<&str>) -> Self {
        let scope = Scope::parse_lenient(raw_scope);
        let unknown_scope = match (scope, raw_scope.map(str::trim)) {
            (None, Some(raw)) if !raw.is_empty() => Some(raw.to_string()),
            _ => None,
        };
        Self {
            text: text.into(),
            scope,
            unknown_scope,
        }
    }

    /// Scope used for weighting; unscoped synonyms count as RELATED
    pub fn weighting_scope(&self) -> Scope {
        self.scope.unwrap_or(Scope::DEFAULT)
    }

    /// Scope as shown to users: the parsed scope, else the stored text
    pub fn scope_label(&self) -> Option<&str> {
        match self.scope {
            Some(scope) => Some(scope.as_str()),
            None => self.unknown_scope.as_deref(),
        }
    }
}

impl Serialize for Synonym {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Synonym", 2)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("scope", &self.scope_label())?;
        state.end()
    }
}

/// Sort synonyms into display order: scope specificity, then text
pub fn sort_for_display(synonyms: &mut [Synonym]) {
    synonyms.sort_by(|a, b| {
        display_rank(a.scope)
            .cmp(&display_rank(b.scope))
            .then_with(|| a.text.cmp(&b.text))
    });
}

/// An ontology term with its synonyms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub term_id: String,
    pub name: Option<String>,
    pub ontology: String,
    #[serde(rename = "type")]
    pub term_type: String,
    pub synonyms: Vec<Synonym>,
}

impl Term {
    pub fn new(
        term_id: impl Into<String>,
        name: impl Into<String>,
        ontology: impl Into<String>,
        term_type: impl Into<String>,
    ) -> Self {
        Self {
            term_id: term_id.into(),
            name: Some(name.into()),
            ontology: ontology.into(),
            term_type: term_type.into(),
            synonyms: Vec::new(),
        }
    }

    pub fn with_synonym(mut self, text: impl Into<String>, scope: Option<Scope>) -> Self {
        self.synonyms.push(Synonym::new(text, scope));
        self
    }

    /// The display name, empty when the term has none
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A ranked search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub term_id: String,
    pub ontology: String,
    pub name: String,
    #[serde(rename = "type")]
    pub term_type: String,
    pub synonyms: Vec<Synonym>,
    /// Raw BM25+ score, always strictly positive
    pub score: f64,
}
