//! Property tests for name normalization.

use pareto_map::normalize;
use proptest::prelude::*;

proptest! {
    /// Normalizing a normalized name changes nothing.
    #[test]
    fn normalize_is_idempotent(name in "[A-Za-z0-9._ -]{0,40}") {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Output is lowercase, trimmed and never holds hyphens or runs of spaces.
    #[test]
    fn normalize_output_is_canonical(name in "[A-Za-z0-9._ -]{0,40}") {
        let normalized = normalize(&name);
        prop_assert_eq!(normalized.to_lowercase(), normalized.clone());
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains('-'));
        prop_assert!(!normalized.contains("  "));
    }

    /// Date stamps appended to a plain name never change its identity.
    #[test]
    fn date_suffix_is_ignored(
        stem in "[a-z]{2,8}-[0-9]o",
        year in 2020u32..2030,
        month in 1u32..13,
        day in 1u32..29,
    ) {
        let dated = format!("{stem}-{year}-{month:02}-{day:02}");
        let compact = format!("{stem}-{year}{month:02}{day:02}");
        prop_assert_eq!(normalize(&dated), normalize(&stem));
        prop_assert_eq!(normalize(&compact), normalize(&stem));
    }
}

#[test]
fn aliases_fold_vendor_spellings() {
    assert_eq!(normalize("chatgpt-4o-latest"), normalize("gpt-4o"));
    assert_eq!(normalize("meta-llama-3.1-8b-instruct"), "llama 3.1 8b");
    assert_eq!(normalize("claude-3-7-sonnet-20250219"), normalize("claude-3.7-sonnet"));
}
