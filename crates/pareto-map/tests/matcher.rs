//! Tests for the exact, normalized and fuzzy matching ladder.

use pareto_map::{EntityMatcher, MatchConfig, PriceCatalogIndex};
use pareto_model::{MatchStrategy, PriceEntry};

fn entry(name: &str, price: f64) -> PriceEntry {
    PriceEntry {
        name: name.to_string(),
        input_price: price,
        output_price: price * 4.0,
        provider: "Acme".to_string(),
    }
}

fn matcher(entries: &[PriceEntry]) -> EntityMatcher {
    matcher_with(entries, MatchConfig::default())
}

fn matcher_with(entries: &[PriceEntry], config: MatchConfig) -> EntityMatcher {
    EntityMatcher::new(PriceCatalogIndex::build(entries), config)
}

#[test]
fn exact_match_beats_normalized_match() {
    let matcher = matcher(&[entry("gpt-4o-2024-08-06", 2.5), entry("gpt-4o", 5.0)]);

    let result = matcher.find_match("GPT-4o");
    assert_eq!(result.strategy, MatchStrategy::Exact);
    assert_eq!(result.matched.map(|e| e.input_price), Some(5.0));
    assert_eq!(result.score, 1.0);
}

#[test]
fn dated_rank_name_resolves_through_normalization() {
    let matcher = matcher(&[entry("gpt-4o", 2.5)]);

    let result = matcher.find_match("gpt-4o-2024-08-06");
    assert_eq!(result.strategy, MatchStrategy::Normalized);
    assert_eq!(result.matched.map(|e| e.name.as_str()), Some("gpt-4o"));
}

#[test]
fn normalized_match_takes_first_in_catalog_order() {
    let matcher = matcher(&[
        entry("gpt-4o-2024-05-13", 5.0),
        entry("gpt-4o-2024-08-06", 2.5),
    ]);

    let result = matcher.find_match("gpt-4o-latest");
    assert_eq!(result.strategy, MatchStrategy::Normalized);
    assert_eq!(
        result.matched.map(|e| e.name.as_str()),
        Some("gpt-4o-2024-05-13")
    );
}

#[test]
fn fuzzy_tie_goes_to_first_seen_entry() {
    let forward = matcher(&[
        entry("alpha-bravo-charlie-one", 1.0),
        entry("alpha-bravo-charlie-two", 2.0),
    ]);
    let result = forward.find_match("alpha-bravo-charlie-three");
    assert_eq!(result.strategy, MatchStrategy::Fuzzy);
    assert!((result.score - 0.6).abs() < 1e-9);
    assert_eq!(
        result.matched.map(|e| e.name.as_str()),
        Some("alpha-bravo-charlie-one")
    );

    let reversed = matcher(&[
        entry("alpha-bravo-charlie-two", 2.0),
        entry("alpha-bravo-charlie-one", 1.0),
    ]);
    let result = reversed.find_match("alpha-bravo-charlie-three");
    assert_eq!(
        result.matched.map(|e| e.name.as_str()),
        Some("alpha-bravo-charlie-two")
    );
}

#[test]
fn score_equal_to_threshold_is_rejected() {
    let catalog = [entry("alpha-bravo-delta", 1.0)];

    let strict = matcher(&catalog);
    let result = strict.find_match("alpha-bravo-charlie");
    assert_eq!(result.strategy, MatchStrategy::NoMatch);
    assert!(result.matched.is_none());
    assert_eq!(result.score, 0.5);
    assert!(result.explanation.is_some());

    let lenient = matcher_with(&catalog, MatchConfig::default().with_threshold(0.49));
    let result = lenient.find_match("alpha-bravo-charlie");
    assert_eq!(result.strategy, MatchStrategy::Fuzzy);
}

#[test]
fn single_shared_token_never_matches() {
    let matcher = matcher(&[entry("gpt-y", 1.0)]);

    let result = matcher.find_match("gpt-x");
    assert_eq!(result.strategy, MatchStrategy::NoMatch);
    assert_eq!(result.score, 0.0);
    assert!(result.explanation.is_none());
}

#[test]
fn family_and_version_bonus_lift_weak_overlap() {
    let matcher = matcher(&[entry("gemini-1.5-flash", 0.075), entry("gemini-1.0-ultra", 7.0)]);

    let result = matcher.find_match("gemini-1.5-pro-002");
    assert_eq!(result.strategy, MatchStrategy::Fuzzy);
    assert_eq!(
        result.matched.map(|e| e.name.as_str()),
        Some("gemini-1.5-flash")
    );
    assert!((result.score - 1.0).abs() < 1e-9);
    let explanation = result.explanation.unwrap_or_default();
    assert!(explanation.contains("Family match"), "{explanation}");
    assert!(explanation.contains("Version match"), "{explanation}");
}

#[test]
fn empty_catalog_never_matches() {
    let matcher = matcher(&[]);

    let result = matcher.find_match("gpt-4o");
    assert_eq!(result.strategy, MatchStrategy::NoMatch);
    assert!(result.matched.is_none());
}

#[test]
fn duplicate_catalog_names_keep_the_cheaper_entry() {
    let matcher = matcher(&[entry("Model-A", 3.0), entry("model-a", 1.0), entry("MODEL-A", 2.0)]);

    assert_eq!(matcher.index().len(), 1);
    let result = matcher.find_match("model-a");
    assert_eq!(result.matched.map(|e| e.input_price), Some(1.0));
}

#[test]
fn names_reduced_to_nothing_match_each_other() {
    let matcher = matcher(&[entry("latest-alias", 1.5)]);

    let result = matcher.find_match("preview-build");
    assert_eq!(result.strategy, MatchStrategy::Normalized);
    assert_eq!(
        result.matched.map(|e| e.name.as_str()),
        Some("latest-alias")
    );
}
