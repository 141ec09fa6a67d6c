//! Tests for display name collision repair.

use pareto_map::resolve_collisions;
use pareto_model::{MatchStrategy, ResolvedRecord};

fn record(rank_name: &str, matched: &str) -> ResolvedRecord {
    ResolvedRecord {
        display_name: String::new(),
        rank_name: rank_name.to_string(),
        score: 1300,
        input_price: 1.0,
        output_price: 4.0,
        provider: "Acme".to_string(),
        votes: 100,
        organization: "Acme".to_string(),
        matched_catalog_name: matched.to_string(),
        strategy: MatchStrategy::Normalized,
    }
}

fn display_names(records: &[ResolvedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.display_name.as_str()).collect()
}

#[test]
fn dated_snapshots_of_one_entry_get_date_suffixes() {
    let resolved = resolve_collisions(vec![
        record("Family-X-20240601", "Family-X"),
        record("Family-X-20240915", "Family-X"),
    ]);
    assert_eq!(
        display_names(&resolved),
        ["Family X (20240601)", "Family X (20240915)"]
    );
}

#[test]
fn suffixes_do_not_depend_on_input_order() {
    let resolved = resolve_collisions(vec![
        record("Family-X-20240915", "Family-X"),
        record("Family-X-20240601", "Family-X"),
    ]);
    assert_eq!(
        display_names(&resolved),
        ["Family X (20240915)", "Family X (20240601)"]
    );
}

#[test]
fn unique_matches_keep_the_catalog_name() {
    let resolved = resolve_collisions(vec![
        record("gpt-4o-2024-08-06", "gpt-4o"),
        record("meta-llama-3.1-405b-instruct", "meta-llama/Llama-3.1-405B"),
    ]);
    assert_eq!(display_names(&resolved), ["gpt-4o", "Llama-3.1-405B"]);
}

#[test]
fn missing_disambiguator_falls_back_to_rank_name() {
    let resolved = resolve_collisions(vec![
        record("gpt-4o-2024-05-13", "gpt-4o"),
        record("chatgpt-4o-latest", "gpt-4o"),
    ]);
    assert_eq!(
        display_names(&resolved),
        ["gpt 4o (2024-05-13)", "chatgpt-4o-latest"]
    );
}

#[test]
fn identical_suffixes_fall_back_to_rank_names() {
    let resolved = resolve_collisions(vec![
        record("model-v2-fast", "model"),
        record("model-v2-slow", "model"),
    ]);
    assert_eq!(display_names(&resolved), ["model-v2-fast", "model-v2-slow"]);
}

#[test]
fn resolved_names_are_unique() {
    let resolved = resolve_collisions(vec![
        record("grok-2-08-13", "grok-2"),
        record("grok-2-12-12", "grok-2"),
        record("deepseek-v3", "deepseek-chat"),
        record("deepseek-v2.5", "deepseek-chat"),
        record("qwen-max", "qwen-max"),
    ]);
    let mut names = display_names(&resolved);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), resolved.len());
    assert_eq!(resolved[0].display_name, "grok 2 (08-13)");
    assert_eq!(resolved[2].display_name, "deepseek chat (v3)");
}
