//! Canonical comparison form for model names.
//!
//! Ranking and pricing sources spell the same model differently: date
//! stamps, preview/latest qualifiers, quantization tags and separator
//! conventions all vary. [`normalize`] strips that noise so two spellings
//! of one model compare equal.

use std::sync::LazyLock;

use regex::Regex;

/// Known aliasing anomalies, rewritten before the general rules run.
static ALIASES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"chatgpt", "gpt"),
        (r"meta-llama", "llama"),
        (r"claude-(\d)-(\d)", "claude-${1}.${2}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("Invalid alias regex"),
            replacement,
        )
    })
    .collect()
});

static DATE_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\d{4}-\d{2}-\d{2}|-\d{4,}").expect("Invalid date suffix regex")
});

static SHORT_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d{2}-\d{2}").expect("Invalid short date regex"));

static TUNING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-bf16|-fp\d+|-instruct|-chat").expect("Invalid tuning qualifier regex")
});

/// A qualifier and everything after it.
static QUALIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:preview|exp|latest|beta|v\d).*").expect("Invalid qualifier regex")
});

static SIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)b-").expect("Invalid size regex"));

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("Invalid separator regex"));

/// Maps a raw model name to its canonical comparison form.
///
/// Total and idempotent: every input yields a value, and normalizing a
/// normalized name returns it unchanged.
///
/// ```
/// use pareto_map::normalize;
///
/// assert_eq!(normalize("gpt-4o-2024-08-06"), "gpt 4o");
/// assert_eq!(normalize("Gemini-2.5-Pro-Preview-05-06"), "gemini 2.5 pro");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    let mut current = normalize_pass(name);
    // After the first pass the string holds no separators other than single
    // spaces, so every further change shortens it.
    for _ in 0..current.len() {
        let next = normalize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn normalize_pass(name: &str) -> String {
    let mut name = name.to_lowercase();
    for (pattern, replacement) in ALIASES.iter() {
        name = pattern.replace_all(&name, *replacement).into_owned();
    }
    name = DATE_SUFFIX_REGEX.replace_all(&name, "").into_owned();
    name = SHORT_DATE_REGEX.replace_all(&name, "").into_owned();
    // Truncation runs after the tag removals so a removal cannot expose a
    // qualifier that was already scanned for.
    name = TUNING_REGEX.replace_all(&name, "").into_owned();
    name = QUALIFIER_REGEX.replace_all(&name, "").into_owned();
    name = SIZE_REGEX.replace_all(&name, "${1}b ").into_owned();
    SEPARATOR_REGEX.replace_all(&name, " ").trim().to_string()
}
