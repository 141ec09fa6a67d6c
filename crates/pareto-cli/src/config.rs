//! Layered synthesis configuration.
//!
//! Precedence, lowest first: built-in defaults, the TOML config file, then
//! explicit command line flags.
//!
//! ```toml
//! [synthesis]
//! min_score = 1300
//! exclude_free = false
//!
//! [matching]
//! threshold = 0.6
//! families = ["gemini", "gpt", "claude"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use pareto_core::SynthesisOptions;
use pareto_map::MatchConfig;
use serde::Deserialize;

/// Contents of a config file; absent keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub synthesis: SynthesisSection,
    pub matching: MatchConfig,
}

/// The `[synthesis]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisSection {
    pub min_score: i64,
    pub exclude_free: bool,
    pub exclude_default_estimates: bool,
}

impl Default for SynthesisSection {
    fn default() -> Self {
        let defaults = SynthesisOptions::default();
        Self {
            min_score: defaults.min_score,
            exclude_free: defaults.exclude_free,
            exclude_default_estimates: defaults.exclude_default_estimates,
        }
    }
}

impl FileConfig {
    pub fn into_options(self) -> SynthesisOptions {
        SynthesisOptions::default()
            .with_min_score(self.synthesis.min_score)
            .with_exclude_free(self.synthesis.exclude_free)
            .with_exclude_default_estimates(self.synthesis.exclude_default_estimates)
            .with_matching(self.matching)
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlagOverrides {
    pub min_score: Option<i64>,
    pub include_free: bool,
    pub exclude_default_estimates: bool,
    pub fuzzy_threshold: Option<f64>,
    pub family_bonus: Option<f64>,
    pub version_bonus: Option<f64>,
}

impl FlagOverrides {
    pub fn apply(&self, mut options: SynthesisOptions) -> SynthesisOptions {
        if let Some(min_score) = self.min_score {
            options.min_score = min_score;
        }
        if self.include_free {
            options.exclude_free = false;
        }
        if self.exclude_default_estimates {
            options.exclude_default_estimates = true;
        }
        if let Some(threshold) = self.fuzzy_threshold {
            options.matching.threshold = threshold;
        }
        if let Some(bonus) = self.family_bonus {
            options.matching.family_bonus = bonus;
        }
        if let Some(bonus) = self.version_bonus {
            options.matching.version_bonus = bonus;
        }
        options
    }
}

/// Reads and parses a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse config: {}", path.display()))
}

/// Resolves the effective options from an optional config file and flags.
pub fn resolve_options(config_path: Option<&Path>, flags: &FlagOverrides) -> Result<SynthesisOptions> {
    let file = match config_path {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    Ok(flags.apply(file.into_options()))
}
