use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker written to [`DebugRecord::matched_catalog_name`] when the price
/// came from the fallback estimator rather than the price catalog.
pub const DEFAULT_ESTIMATE_MARKER: &str = "DEFAULT_ESTIMATE";

/// Which rung of the matching ladder produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Normalized,
    Fuzzy,
    #[serde(rename = "none")]
    NoMatch,
}

impl MatchStrategy {
    pub const ALL: [MatchStrategy; 4] = [
        MatchStrategy::Exact,
        MatchStrategy::Normalized,
        MatchStrategy::Fuzzy,
        MatchStrategy::NoMatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Normalized => "normalized",
            MatchStrategy::Fuzzy => "fuzzy",
            MatchStrategy::NoMatch => "none",
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, MatchStrategy::NoMatch)
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a resolved entity was left out of the resolved list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exclusion {
    /// Price of zero or less, usually a self-hosted model.
    Free,
    /// Only a heuristic estimate was available.
    DefaultEstimate,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclusion::Free => "free",
            Exclusion::DefaultEstimate => "default_estimate",
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One merged entity: ranking attributes joined with a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub display_name: String,
    /// Name as it appears on the ranking source.
    pub rank_name: String,
    pub score: i64,
    pub input_price: f64,
    pub output_price: f64,
    pub provider: String,
    pub votes: u64,
    pub organization: String,
    /// Raw price catalog name that matched, or `rank_name` for estimates.
    pub matched_catalog_name: String,
    pub strategy: MatchStrategy,
}

impl ResolvedRecord {
    pub fn is_estimate(&self) -> bool {
        self.strategy == MatchStrategy::NoMatch
    }
}

/// Audit trail entry for one match decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugRecord {
    #[serde(rename = "rank_model")]
    pub rank_name: String,
    /// Matched raw catalog name or [`DEFAULT_ESTIMATE_MARKER`].
    #[serde(rename = "matched_price_model")]
    pub matched_catalog_name: String,
    pub price: f64,
    pub provider: String,
    pub organization: String,
    pub strategy: MatchStrategy,
    /// Match score; for `none` this is the best rejected fuzzy score.
    pub score: f64,
    pub excluded: Option<Exclusion>,
}

impl DebugRecord {
    pub fn is_default_estimate(&self) -> bool {
        self.matched_catalog_name == DEFAULT_ESTIMATE_MARKER
    }
}
