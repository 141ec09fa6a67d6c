//! Strategy ladder that resolves a rank-side name to one price entry.
//!
//! Rungs are tried in order and the first hit wins:
//!
//! 1. **Exact** - lowercased raw names are equal.
//! 2. **Normalized** - [`normalize`]d names are equal; first in catalog order.
//! 3. **Fuzzy** - highest [`score_pair`] score above the threshold; ties go
//!    to the entry seen first in catalog order.

use pareto_model::{MatchStrategy, PriceEntry};
use tracing::trace;

use crate::index::PriceCatalogIndex;
use crate::normalize::normalize;
use crate::score::{MatchConfig, NameForms, PairScore, score_pair};

/// Outcome of matching one name.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub matched: Option<&'a PriceEntry>,
    pub strategy: MatchStrategy,
    /// 1.0 for exact and normalized hits, the fuzzy score otherwise. For
    /// [`MatchStrategy::NoMatch`] this is the best rejected fuzzy score.
    pub score: f64,
    /// Score breakdown of the best fuzzy candidate, when one was scored.
    pub explanation: Option<String>,
}

impl<'a> MatchResult<'a> {
    fn certain(entry: &'a PriceEntry, strategy: MatchStrategy) -> Self {
        Self {
            matched: Some(entry),
            strategy,
            score: 1.0,
            explanation: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

/// Matches rank-side names against an owned [`PriceCatalogIndex`].
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    index: PriceCatalogIndex,
    config: MatchConfig,
}

impl EntityMatcher {
    pub fn new(index: PriceCatalogIndex, config: MatchConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &PriceCatalogIndex {
        &self.index
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Resolves `name` to at most one catalog entry.
    pub fn find_match(&self, name: &str) -> MatchResult<'_> {
        let lowered = name.to_lowercase();
        if let Some(entry) = self.index.by_exact_name(&lowered) {
            return MatchResult::certain(entry, MatchStrategy::Exact);
        }

        let normalized = normalize(name);
        if let Some(entry) = self.index.by_normalized_name(&normalized) {
            return MatchResult::certain(entry, MatchStrategy::Normalized);
        }

        let rank = NameForms {
            lowered: &lowered,
            normalized: &normalized,
        };
        let mut best: Option<(&PriceEntry, PairScore)> = None;
        for candidate in self.index.all_entries() {
            let forms = NameForms {
                lowered: &candidate.key,
                normalized: &candidate.normalized,
            };
            let Some(pair) = score_pair(&self.config, rank, forms) else {
                continue;
            };
            trace!(
                rank = %name,
                candidate = %candidate.entry.name,
                score = pair.score,
                "scored fuzzy candidate"
            );
            if best.as_ref().is_none_or(|(_, current)| pair.score > current.score) {
                best = Some((&candidate.entry, pair));
            }
        }

        match best {
            Some((entry, pair)) if self.config.accepts(pair.score) => MatchResult {
                matched: Some(entry),
                strategy: MatchStrategy::Fuzzy,
                score: pair.score,
                explanation: Some(pair.explain()),
            },
            Some((_, pair)) => MatchResult {
                matched: None,
                strategy: MatchStrategy::NoMatch,
                score: pair.score,
                explanation: Some(pair.explain()),
            },
            None => MatchResult {
                matched: None,
                strategy: MatchStrategy::NoMatch,
                score: 0.0,
                explanation: None,
            },
        }
    }
}
