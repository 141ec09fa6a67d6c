//! Fuzzy similarity scoring between two model names.
//!
//! The base score is the Jaccard index over the word tokens of the two
//! normalized names. Pairs that share fewer than [`MIN_TOKEN_OVERLAP`]
//! tokens never score, so a lone generic token like "chat" cannot carry a
//! match. A flat bonus rewards a shared model family, and a further bonus
//! rewards an identical leading version number within that family.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of shared tokens before a pair is scored at all.
pub const MIN_TOKEN_OVERLAP: usize = 2;

/// Family tokens eligible for the family bonus, in priority order.
pub const DEFAULT_FAMILIES: [&str; 6] = ["gemini", "gpt", "claude", "deepseek", "qwen", "grok"];

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid token regex"));

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("Invalid version regex"));

/// Tunable parameters of the fuzzy matching rung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// A fuzzy candidate is accepted only when its score is strictly above this.
    pub threshold: f64,
    /// Added when both names contain the same family token.
    pub family_bonus: f64,
    /// Added on top of the family bonus when the leading version numbers agree.
    pub version_bonus: f64,
    /// Family tokens in priority order; only the first shared one counts.
    pub families: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            family_bonus: 0.3,
            version_bonus: 0.2,
            families: DEFAULT_FAMILIES.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

impl MatchConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_family_bonus(mut self, bonus: f64) -> Self {
        self.family_bonus = bonus;
        self
    }

    pub fn with_version_bonus(mut self, bonus: f64) -> Self {
        self.version_bonus = bonus;
        self
    }

    /// Whether a fuzzy score clears the acceptance threshold.
    pub fn accepts(&self, score: f64) -> bool {
        score > self.threshold
    }
}

/// The two spellings of a name that scoring looks at.
#[derive(Debug, Clone, Copy)]
pub struct NameForms<'a> {
    /// Lowercased raw name; family and version checks run on this.
    pub lowered: &'a str,
    /// Normalized name; token overlap runs on this.
    pub normalized: &'a str,
}

/// Score for a single name pair.
#[derive(Debug, Clone)]
pub struct PairScore {
    /// Final score; may exceed 1.0 once bonuses apply.
    pub score: f64,
    /// Breakdown of score components for explainability.
    pub explanation: Vec<ScoreComponent>,
}

impl PairScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.explanation
            .iter()
            .map(|c| format!("{}: {:.2} ({})", c.name, c.value, c.description))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A component contributing to the final score.
#[derive(Debug, Clone)]
pub struct ScoreComponent {
    pub name: &'static str,
    pub value: f64,
    pub description: String,
}

/// Scores a rank-side name against a catalog name.
///
/// Returns `None` when the pair shares fewer than [`MIN_TOKEN_OVERLAP`]
/// tokens.
pub fn score_pair(
    config: &MatchConfig,
    rank: NameForms<'_>,
    candidate: NameForms<'_>,
) -> Option<PairScore> {
    let rank_tokens = tokens(rank.normalized);
    let candidate_tokens = tokens(candidate.normalized);
    let overlap = rank_tokens.intersection(&candidate_tokens).count();
    let union = rank_tokens.union(&candidate_tokens).count();
    if overlap < MIN_TOKEN_OVERLAP || union == 0 {
        return None;
    }

    let base = overlap as f64 / union as f64;
    let mut explanation = vec![ScoreComponent {
        name: "Token overlap",
        value: base,
        description: format!("{overlap} of {union} tokens shared"),
    }];
    let mut score = base;

    let shared_family = config.families.iter().find(|family| {
        rank.lowered.contains(family.as_str()) && candidate.lowered.contains(family.as_str())
    });
    if let Some(family) = shared_family {
        score += config.family_bonus;
        explanation.push(ScoreComponent {
            name: "Family match",
            value: config.family_bonus,
            description: format!("both are {family}"),
        });
        let candidate_version = leading_version(candidate.lowered);
        if let Some(version) =
            leading_version(rank.lowered).filter(|version| Some(*version) == candidate_version)
        {
            score += config.version_bonus;
            explanation.push(ScoreComponent {
                name: "Version match",
                value: config.version_bonus,
                description: format!("both at {version}"),
            });
        }
    }

    Some(PairScore { score, explanation })
}

fn tokens(name: &str) -> BTreeSet<&str> {
    TOKEN_REGEX.find_iter(name).map(|m| m.as_str()).collect()
}

/// First run of digits, with an optional decimal part.
fn leading_version(name: &str) -> Option<&str> {
    VERSION_REGEX.find(name).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn score(config: &MatchConfig, rank: &str, candidate: &str) -> Option<f64> {
        let rank_lower = rank.to_lowercase();
        let rank_norm = normalize(rank);
        let cand_lower = candidate.to_lowercase();
        let cand_norm = normalize(candidate);
        score_pair(
            config,
            NameForms {
                lowered: &rank_lower,
                normalized: &rank_norm,
            },
            NameForms {
                lowered: &cand_lower,
                normalized: &cand_norm,
            },
        )
        .map(|s| s.score)
    }

    #[test]
    fn single_shared_token_never_scores() {
        let config = MatchConfig::default();
        assert_eq!(score(&config, "model-x", "model-y"), None);
        // The family bonus cannot rescue a pair below the overlap floor.
        assert_eq!(score(&config, "gpt-x", "gpt-y"), None);
    }

    #[test]
    fn jaccard_without_family() {
        let config = MatchConfig::default();
        let value = score(&config, "alpha-bravo-charlie", "alpha-bravo-delta").unwrap();
        assert!((value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn family_and_version_bonus_stack() {
        let config = MatchConfig::default();
        let value = score(&config, "gemini-1.5-pro", "gemini-1.5-flash").unwrap();
        // \w+ splits "1.5" into "1" and "5": {gemini,1,5,pro} vs {gemini,1,5,flash}
        let expected = 3.0 / 5.0 + 0.3 + 0.2;
        assert!((value - expected).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn family_bonus_without_version_agreement() {
        let config = MatchConfig::default();
        let value = score(&config, "claude-3-opus", "claude-2-opus").unwrap();
        // {claude,3,opus} vs {claude,2,opus}: 2 of 4
        assert!((value - (0.5 + 0.3)).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn only_first_family_counts() {
        let config = MatchConfig::default().with_version_bonus(0.0);
        let value = score(&config, "gpt-claude-mix", "gpt-claude-blend").unwrap();
        // {gpt,claude,mix} vs {gpt,claude,blend}: 2 of 4, one bonus only
        assert!((value - 0.8).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn explanation_lists_components() {
        let config = MatchConfig::default();
        let lowered = "gemini-1.5-pro";
        let normalized = normalize(lowered);
        let result = score_pair(
            &config,
            NameForms {
                lowered,
                normalized: &normalized,
            },
            NameForms {
                lowered: "gemini-1.5-pro-002",
                normalized: "gemini 1.5 pro 002",
            },
        )
        .unwrap();
        let text = result.explain();
        assert!(text.contains("Token overlap"));
        assert!(text.contains("Family match"));
        assert!(text.contains("Version match"));
    }

    #[test]
    fn threshold_is_strict() {
        let config = MatchConfig::default();
        assert!(!config.accepts(0.5));
        assert!(config.accepts(0.50001));
    }
}
