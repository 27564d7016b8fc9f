//! GEO series reached through ranked ontology terms

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{search, SearchOptions};
use crate::config::SearchConfig;
use crate::corpus::CorpusSource;
use crate::error::{OntoError, Result};

/// Lowest probability of a high-confidence link
pub const HIGH_CONFIDENCE: f64 = 0.8;
/// Lowest probability of a medium-confidence link
pub const MEDIUM_CONFIDENCE: f64 = 0.5;

/// A stored association between a GEO series and an ontology term
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLink {
    pub series_id: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub term_id: String,
    /// Probability that the series is annotated with the term
    pub prob: f64,
}

/// Source of series-to-term associations
pub trait SeriesSource {
    /// All links whose term is one of `term_ids`, in any order
    fn fetch_series_links(&self, term_ids: &[String]) -> Result<Vec<SeriesLink>>;
}

/// Confidence band of a series-to-term link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// prob >= 0.8
    High,
    /// 0.5 <= prob < 0.8
    Medium,
    /// prob < 0.5
    Low,
}

impl Confidence {
    pub fn of(prob: f64) -> Self {
        if prob >= HIGH_CONFIDENCE {
            Confidence::High
        } else if prob >= MEDIUM_CONFIDENCE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl FromStr for Confidence {
    type Err = OntoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(OntoError::invalid_value("confidence", s)),
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of distinct series per confidence band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfidenceCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ConfidenceCounts {
    fn add(&mut self, band: Confidence) {
        match band {
            Confidence::High => self.high += 1,
            Confidence::Medium => self.medium += 1,
            Confidence::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Series options applied after the term search
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesOptions {
    /// Maximum number of series returned
    pub max_series: usize,
    /// Keep only series in this band
    pub confidence: Option<Confidence>,
}

impl SeriesOptions {
    pub fn new(max_series: usize) -> Self {
        Self {
            max_series,
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// A series reached through a ranked term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesHit {
    pub series_id: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Term through which the series was reached
    pub term_id: String,
    /// Score of that term for the query
    pub term_score: f64,
    pub prob: f64,
    pub confidence: Confidence,
}

/// Ranked series plus band counts over every matched series
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesResults {
    pub series: Vec<SeriesHit>,
    /// Counted before the band filter and `max_series`
    pub facets: ConfidenceCounts,
}

/// Search terms, then return series linked to the hits.
///
/// Series are ordered by link probability (descending), then by the rank of
/// the term that reaches them, then by id. A series linked to several hits
/// appears once, under its most probable link.
pub fn search_series<S>(
    query: &str,
    source: &S,
    options: &SearchOptions,
    config: &SearchConfig,
    series_options: &SeriesOptions,
) -> Result<SeriesResults>
where
    S: CorpusSource + SeriesSource + ?Sized,
{
    let hits = search(query, source, options, config)?;

    let term_ids: Vec<String> = hits.iter().map(|h| h.term_id.clone()).collect();
    let rank: HashMap<&str, (usize, f64)> = hits
        .iter()
        .enumerate()
        .map(|(i, h)| (h.term_id.as_str(), (i, h.score)))
        .collect();

    let mut links = source.fetch_series_links(&term_ids)?;
    links.retain(|link| rank.contains_key(link.term_id.as_str()));
    links.sort_by(|a, b| {
        let ra = rank[a.term_id.as_str()].0;
        let rb = rank[b.term_id.as_str()].0;
        b.prob
            .total_cmp(&a.prob)
            .then_with(|| ra.cmp(&rb))
            .then_with(|| a.series_id.cmp(&b.series_id))
    });

    let mut seen = HashSet::new();
    links.retain(|link| seen.insert(link.series_id.clone()));

    let mut facets = ConfidenceCounts::default();
    for link in &links {
        facets.add(Confidence::of(link.prob));
    }

    let series: Vec<SeriesHit> = links
        .into_iter()
        .filter(|link| {
            series_options
                .confidence
                .map_or(true, |band| Confidence::of(link.prob) == band)
        })
        .take(series_options.max_series)
        .map(|link| {
            let term_score = rank[link.term_id.as_str()].1;
            SeriesHit {
                confidence: Confidence::of(link.prob),
                series_id: link.series_id,
                title: link.title,
                summary: link.summary,
                term_id: link.term_id,
                term_score,
                prob: link.prob,
            }
        })
        .collect();

    tracing::debug!(
        hits = hits.len(),
        matched = facets.total(),
        series = series.len(),
        "search_series"
    );
    Ok(SeriesResults { series, facets })
}
