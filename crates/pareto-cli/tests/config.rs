//! Tests for layered configuration.

use std::fs;

use pareto_cli::config::{FileConfig, FlagOverrides, load_config, resolve_options};
use pareto_core::SynthesisOptions;
use tempfile::TempDir;

#[test]
fn no_file_and_no_flags_gives_defaults() {
    let options = resolve_options(None, &FlagOverrides::default()).expect("resolve options");
    assert_eq!(options, SynthesisOptions::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pareto.toml");
    fs::write(
        &path,
        "[synthesis]\nmin_score = 1300\nexclude_free = false\n\n\
         [matching]\nthreshold = 0.6\nfamilies = [\"gpt\", \"claude\"]\n",
    )
    .expect("write config");

    let options = resolve_options(Some(&path), &FlagOverrides::default()).expect("resolve");

    assert_eq!(options.min_score, 1300);
    assert!(!options.exclude_free);
    assert!(!options.exclude_default_estimates);
    assert_eq!(options.matching.threshold, 0.6);
    assert_eq!(options.matching.family_bonus, 0.3);
    assert_eq!(options.matching.families, ["gpt", "claude"]);
}

#[test]
fn flags_override_file_values() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pareto.toml");
    fs::write(&path, "[synthesis]\nmin_score = 1300\n[matching]\nthreshold = 0.6\n")
        .expect("write config");
    let flags = FlagOverrides {
        min_score: Some(1000),
        include_free: true,
        exclude_default_estimates: true,
        fuzzy_threshold: Some(0.7),
        family_bonus: None,
        version_bonus: Some(0.1),
    };

    let options = resolve_options(Some(&path), &flags).expect("resolve");

    assert_eq!(options.min_score, 1000);
    assert!(!options.exclude_free);
    assert!(options.exclude_default_estimates);
    assert_eq!(options.matching.threshold, 0.7);
    assert_eq!(options.matching.family_bonus, 0.3);
    assert_eq!(options.matching.version_bonus, 0.1);
}

#[test]
fn non_numeric_threshold_fails_naming_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[matching]\nthreshold = \"high\"\n").expect("write config");

    let error = load_config(&path).unwrap_err();

    assert!(format!("{error}").contains("bad.toml"), "{error:#}");
}

#[test]
fn unknown_keys_are_rejected() {
    let error = toml::from_str::<FileConfig>("[synthesis]\nmin_scor = 1\n").unwrap_err();
    assert!(error.to_string().contains("min_scor"), "{error}");
}
