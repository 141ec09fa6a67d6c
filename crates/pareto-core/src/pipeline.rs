//! Rank and price catalog synthesis.
//!
//! A run executes these stages in order:
//!
//! 1. **Validation** - price records become [`PriceEntry`] values and rank
//!    records become [`RankEntry`] values; malformed ones are skipped.
//! 2. **Indexing** - valid price entries are deduplicated into a
//!    [`PriceCatalogIndex`].
//! 3. **Resolution** - every rank entry at or above the minimum score is
//!    matched or, failing that, priced by the fallback estimator. Each
//!    attempt leaves one [`DebugRecord`].
//! 4. **Filtering** - free and (optionally) estimated records are dropped
//!    from the resolved list.
//! 5. **Display names** - collisions are repaired over the full list.

use pareto_map::{DefaultPriceEstimator, EntityMatcher, PriceCatalogIndex, resolve_collisions};
use pareto_model::{
    CatalogSide, DEFAULT_ESTIMATE_MARKER, DebugRecord, Exclusion, InputError, MatchStrategy,
    PriceEntry, ProviderCatalog, RankEntry, RankRecord, ResolvedRecord,
};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::options::SynthesisOptions;

/// A malformed input entry left out of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub side: CatalogSide,
    /// Position in the rank list, or within its provider's model list.
    pub index: usize,
    pub name: Option<String>,
    pub error: InputError,
}

/// Everything one run produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisOutput {
    /// Included records in rank input order, display names repaired.
    pub resolved: Vec<ResolvedRecord>,
    /// One record per resolution attempt, excluded ones included.
    pub debug: Vec<DebugRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl SynthesisOutput {
    /// Number of resolution attempts per strategy, in ladder order.
    pub fn strategy_counts(&self) -> Vec<(MatchStrategy, usize)> {
        MatchStrategy::ALL
            .iter()
            .map(|&strategy| {
                let count = self
                    .debug
                    .iter()
                    .filter(|record| record.strategy == strategy)
                    .count();
                (strategy, count)
            })
            .collect()
    }

    /// Number of attempts dropped for `reason`.
    pub fn excluded_count(&self, reason: Exclusion) -> usize {
        self.debug
            .iter()
            .filter(|record| record.excluded == Some(reason))
            .count()
    }
}

/// A price attached to one rank entry, from the catalog or the estimator.
struct Priced {
    input_price: f64,
    output_price: f64,
    provider: String,
    /// Matched catalog name; `None` when the price is an estimate.
    catalog_name: Option<String>,
    strategy: MatchStrategy,
    score: f64,
}

/// Validated configuration plus the fallback estimator.
#[derive(Debug, Clone)]
pub struct SynthesisPipeline {
    options: SynthesisOptions,
    estimator: DefaultPriceEstimator,
}

impl SynthesisPipeline {
    /// Validates `options`; fails before any entity is processed.
    pub fn new(options: SynthesisOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            estimator: DefaultPriceEstimator::new(),
        })
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Runs all stages over the two catalogs.
    pub fn run(&self, ranks: &[RankRecord], prices: &[ProviderCatalog]) -> SynthesisOutput {
        let mut output = SynthesisOutput::default();

        let price_entries = validate_prices(prices, &mut output.skipped);
        let index = PriceCatalogIndex::build(&price_entries);
        info!(
            valid = price_entries.len(),
            indexed = index.len(),
            "built price catalog index"
        );
        let matcher = EntityMatcher::new(index, self.options.matching.clone());

        let mut resolved = Vec::new();
        for (index, record) in ranks.iter().enumerate() {
            let entry = match RankEntry::from_record(index, record) {
                Ok(entry) => entry,
                Err(error) => {
                    skip(&mut output.skipped, index, record.name.clone(), error);
                    continue;
                }
            };
            // Compared before rounding.
            if entry.raw_score < self.options.min_score as f64 {
                debug!(
                    rank = %entry.name,
                    score = entry.raw_score,
                    min_score = self.options.min_score,
                    "below minimum score"
                );
                continue;
            }

            let priced = self.price(&matcher, &entry);
            let excluded = self.exclusion(&priced);
            output.debug.push(DebugRecord {
                rank_name: entry.name.clone(),
                matched_catalog_name: priced
                    .catalog_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ESTIMATE_MARKER.to_string()),
                price: priced.input_price,
                provider: priced.provider.clone(),
                organization: entry.organization.clone(),
                strategy: priced.strategy,
                score: priced.score,
                excluded,
            });
            if let Some(reason) = excluded {
                debug!(rank = %entry.name, %reason, "excluded from resolved list");
                continue;
            }

            let matched_catalog_name = priced.catalog_name.unwrap_or_else(|| entry.name.clone());
            resolved.push(ResolvedRecord {
                display_name: matched_catalog_name.clone(),
                rank_name: entry.name,
                score: entry.score,
                input_price: priced.input_price,
                output_price: priced.output_price,
                provider: priced.provider,
                votes: entry.votes,
                organization: entry.organization,
                matched_catalog_name,
                strategy: priced.strategy,
            });
        }

        info!(
            attempts = output.debug.len(),
            resolved = resolved.len(),
            skipped = output.skipped.len(),
            "resolved rank entries"
        );
        output.resolved = resolve_collisions(resolved);
        output
    }

    fn price(&self, matcher: &EntityMatcher, entry: &RankEntry) -> Priced {
        let result = matcher.find_match(&entry.name);
        if let Some(matched) = result.matched {
            debug!(
                rank = %entry.name,
                matched = %matched.name,
                strategy = %result.strategy,
                score = result.score,
                "matched catalog entry"
            );
            return Priced {
                input_price: matched.input_price,
                output_price: matched.output_price,
                provider: matched.provider.clone(),
                catalog_name: Some(matched.name.clone()),
                strategy: result.strategy,
                score: result.score,
            };
        }

        let estimate = self.estimator.estimate(&entry.name, &entry.organization);
        debug!(
            rank = %entry.name,
            best_score = result.score,
            explanation = result.explanation.as_deref().unwrap_or(""),
            price = estimate.price,
            provider = %estimate.provider,
            "no catalog match, using estimate"
        );
        Priced {
            input_price: estimate.price,
            output_price: estimate.price,
            provider: estimate.provider,
            catalog_name: None,
            strategy: MatchStrategy::NoMatch,
            score: result.score,
        }
    }

    fn exclusion(&self, priced: &Priced) -> Option<Exclusion> {
        if self.options.exclude_free && priced.input_price <= 0.0 {
            Some(Exclusion::Free)
        } else if self.options.exclude_default_estimates && priced.catalog_name.is_none() {
            Some(Exclusion::DefaultEstimate)
        } else {
            None
        }
    }
}

fn validate_prices(prices: &[ProviderCatalog], skipped: &mut Vec<SkippedEntry>) -> Vec<PriceEntry> {
    let mut entries = Vec::new();
    for catalog in prices {
        for (index, record) in catalog.models.iter().enumerate() {
            match PriceEntry::from_record(&catalog.provider, index, record) {
                Ok(entry) => entries.push(entry),
                Err(error) => skip(skipped, index, record.name.clone(), error),
            }
        }
    }
    entries
}

fn skip(skipped: &mut Vec<SkippedEntry>, index: usize, name: Option<String>, error: InputError) {
    warn!(%error, "skipping malformed entry");
    skipped.push(SkippedEntry {
        side: error.side(),
        index,
        name,
        error,
    });
}
