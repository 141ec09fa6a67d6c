//! Fallback pricing for names the catalog cannot match.
//!
//! The rule set is data: an ordered table of provider families, each with
//! trigger keywords, ordered price patterns and a flat default. The first
//! family whose keyword occurs in the lowercased name or organization
//! wins; within it the first matching pattern sets the price.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use pareto_model::UNKNOWN_ORGANIZATION;

/// Price used when no family is recognized.
pub const FALLBACK_PRICE: f64 = 1.0;

/// A price rule within a family.
#[derive(Debug, Clone)]
pub struct PriceRule {
    pub pattern: Regex,
    pub price: f64,
    pub description: &'static str,
}

/// A provider family with its keywords and pricing rules.
#[derive(Debug, Clone)]
pub struct ProviderFamily {
    pub id: &'static str,
    /// Canonical provider label reported for estimates in this family.
    pub provider: &'static str,
    pub keywords: &'static [&'static str],
    pub rules: Vec<PriceRule>,
    pub default_price: f64,
}

impl ProviderFamily {
    fn new(
        id: &'static str,
        provider: &'static str,
        keywords: &'static [&'static str],
        rules: &[(&str, f64, &'static str)],
        default_price: f64,
    ) -> Self {
        let rules = rules
            .iter()
            .map(|(pattern, price, description)| PriceRule {
                pattern: Regex::new(pattern).expect("Invalid price rule regex"),
                price: *price,
                description: *description,
            })
            .collect();
        Self {
            id,
            provider,
            keywords,
            rules,
            default_price,
        }
    }

    fn claims(&self, name_lower: &str, organization_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| name_lower.contains(keyword) || organization_lower.contains(keyword))
    }
}

static BUILTIN_FAMILIES: LazyLock<Vec<ProviderFamily>> = LazyLock::new(|| {
    vec![
        ProviderFamily::new(
            "openai",
            "OpenAI",
            &["gpt", "openai"],
            &[
                (r"4\.5|o3", 15.0, "Premium models"),
                (r"4o|4\.1", 2.5, "Standard GPT-4 models"),
                (r"mini|nano", 0.5, "Smaller models"),
            ],
            5.0,
        ),
        ProviderFamily::new(
            "anthropic",
            "Anthropic",
            &["claude", "anthropic"],
            &[
                (r"3\.7|opus", 15.0, "Premium Claude"),
                (r"sonnet", 3.0, "Standard Claude"),
                (r"haiku", 0.8, "Smaller Claude"),
            ],
            3.0,
        ),
        ProviderFamily::new(
            "google",
            "Google",
            &["gemini", "google"],
            &[
                (r"2\.5.*pro", 1.25, "Gemini 2.5 Pro"),
                (r"pro", 1.25, "Pro models"),
                (r"flash", 0.15, "Flash models"),
            ],
            1.0,
        ),
        ProviderFamily::new(
            "deepseek",
            "DeepSeek",
            &["deepseek"],
            &[(r"v3", 0.27, "DeepSeek V3"), (r"r1", 0.55, "DeepSeek R1")],
            0.5,
        ),
        ProviderFamily::new("alibaba", "Alibaba", &["qwen", "alibaba"], &[], 0.9),
        ProviderFamily::new("xai", "xAI", &["grok", "xai"], &[], 2.0),
    ]
});

/// An estimated price and the provider it is attributed to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub price: f64,
    pub provider: String,
    /// Family id, when a family was recognized.
    pub family: Option<&'static str>,
    /// Description of the rule that fired, when one did.
    pub rule: Option<&'static str>,
}

/// Heuristic price estimator over an ordered family table.
#[derive(Debug, Clone, Copy)]
pub struct DefaultPriceEstimator {
    families: &'static [ProviderFamily],
}

impl Default for DefaultPriceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultPriceEstimator {
    /// Estimator over the builtin family table.
    pub fn new() -> Self {
        Self {
            families: BUILTIN_FAMILIES.as_slice(),
        }
    }

    pub fn families(&self) -> &[ProviderFamily] {
        self.families
    }

    /// Estimates a price for `name`, published by `organization`.
    ///
    /// Never fails: an unrecognized family yields [`FALLBACK_PRICE`] and the
    /// organization (or "Unknown") as provider.
    pub fn estimate(&self, name: &str, organization: &str) -> PriceEstimate {
        let name_lower = name.to_lowercase();
        let organization_lower = organization.to_lowercase();

        let Some(family) = self
            .families
            .iter()
            .find(|family| family.claims(&name_lower, &organization_lower))
        else {
            let organization = organization.trim();
            return PriceEstimate {
                price: FALLBACK_PRICE,
                provider: if organization.is_empty() {
                    UNKNOWN_ORGANIZATION.to_string()
                } else {
                    organization.to_string()
                },
                family: None,
                rule: None,
            };
        };

        match family
            .rules
            .iter()
            .find(|rule| rule.pattern.is_match(&name_lower))
        {
            Some(rule) => {
                debug!(
                    model = %name,
                    family = family.id,
                    rule = rule.description,
                    price = rule.price,
                    "estimated price from family rule"
                );
                PriceEstimate {
                    price: rule.price,
                    provider: family.provider.to_string(),
                    family: Some(family.id),
                    rule: Some(rule.description),
                }
            }
            None => PriceEstimate {
                price: family.default_price,
                provider: family.provider.to_string(),
                family: Some(family.id),
                rule: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_default_when_no_rule_matches() {
        let estimate = DefaultPriceEstimator::new().estimate("totally-unknown-model-v9", "OpenAI");
        assert_eq!(estimate.price, 5.0);
        assert_eq!(estimate.provider, "OpenAI");
        assert_eq!(estimate.family, Some("openai"));
        assert_eq!(estimate.rule, None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let estimator = DefaultPriceEstimator::new();
        assert_eq!(estimator.estimate("gpt-4.5-preview", "OpenAI").price, 15.0);
        assert_eq!(estimator.estimate("gpt-4o-mini", "OpenAI").price, 2.5);
        assert_eq!(estimator.estimate("gpt-5-nano", "OpenAI").price, 0.5);
        assert_eq!(estimator.estimate("gemini-2.5-pro-exp", "Google").price, 1.25);
        assert_eq!(estimator.estimate("gemini-2.0-flash", "Google").price, 0.15);
    }

    #[test]
    fn keyword_in_name_beats_organization_order() {
        let estimate = DefaultPriceEstimator::new().estimate("claude-3-haiku", "Some Lab");
        assert_eq!(estimate.provider, "Anthropic");
        assert_eq!(estimate.price, 0.8);
    }

    #[test]
    fn family_priority_follows_table_order() {
        // "gpt" (openai) is checked before "qwen" (alibaba).
        let estimate = DefaultPriceEstimator::new().estimate("qwen-gpt-distill", "Alibaba");
        assert_eq!(estimate.provider, "OpenAI");
    }

    #[test]
    fn organization_keyword_selects_family() {
        let estimate = DefaultPriceEstimator::new().estimate("r1-distill", "DeepSeek");
        assert_eq!(estimate.provider, "DeepSeek");
        assert_eq!(estimate.price, 0.55);
    }

    #[test]
    fn unknown_family_passes_organization_through() {
        let estimator = DefaultPriceEstimator::new();
        let estimate = estimator.estimate("yi-lightning", "01 AI");
        assert_eq!(estimate.price, FALLBACK_PRICE);
        assert_eq!(estimate.provider, "01 AI");

        let blank = estimator.estimate("mystery", "");
        assert_eq!(blank.provider, "Unknown");
    }
}
