use thiserror::Error;

/// Invalid pipeline configuration, reported before any entity is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must not be negative (got {value})")]
    NegativeThreshold { name: &'static str, value: f64 },

    #[error("{name} must be a finite number")]
    NonNumericThreshold { name: &'static str },

    #[error("min_score must not be negative (got {0})")]
    NegativeMinScore(i64),
}
