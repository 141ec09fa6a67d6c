use pareto_map::MatchConfig;

use crate::error::ConfigError;

/// Default minimum leaderboard score for an entity to be considered.
pub const DEFAULT_MIN_SCORE: i64 = 1250;

/// Inclusion policy and matcher tuning for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    /// Entities scoring below this never enter matching.
    pub min_score: i64,
    /// Drop resolved records whose input price is zero or less.
    pub exclude_free: bool,
    /// Drop resolved records priced only by the fallback estimator.
    pub exclude_default_estimates: bool,
    pub matching: MatchConfig,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            exclude_free: true,
            exclude_default_estimates: false,
            matching: MatchConfig::default(),
        }
    }
}

impl SynthesisOptions {
    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_exclude_free(mut self, exclude: bool) -> Self {
        self.exclude_free = exclude;
        self
    }

    pub fn with_exclude_default_estimates(mut self, exclude: bool) -> Self {
        self.exclude_default_estimates = exclude;
        self
    }

    pub fn with_matching(mut self, matching: MatchConfig) -> Self {
        self.matching = matching;
        self
    }

    /// Rejects negative or non-finite thresholds and a negative minimum score.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_score < 0 {
            return Err(ConfigError::NegativeMinScore(self.min_score));
        }
        let thresholds = [
            ("threshold", self.matching.threshold),
            ("family_bonus", self.matching.family_bonus),
            ("version_bonus", self.matching.version_bonus),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(ConfigError::NonNumericThreshold { name });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeThreshold { name, value });
            }
        }
        Ok(())
    }
}
