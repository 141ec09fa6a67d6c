//! Stable display names for resolved records.
//!
//! Several ranking entries (dated snapshots of one model, say) can resolve
//! to the same catalog entry. Their catalog name alone would then label
//! several rows identically, so the date or version stamp carried by each
//! rank-side name is appended as a disambiguating suffix.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use pareto_model::ResolvedRecord;

/// Disambiguating tokens in preference order: dates before versions.
static DISAMBIGUATOR_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{8}",
        r"\d{6}",
        r"\d{4}-\d{2}-\d{2}",
        r"\d{2}-\d{2}",
        r"[vV]\d+(?:\.\d+)?",
    ]
    .into_iter()
    .map(|token| {
        Regex::new(&format!(r"(?:^|[^0-9A-Za-z])({token})(?:[^0-9A-Za-z]|$)"))
            .expect("Invalid disambiguator regex")
    })
    .collect()
});

static EMBEDDED_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^0-9A-Za-z])(?:\d{4}-\d{2}-\d{2}|\d{8}|\d{6}|\d{2}-\d{2}|[vV]\d+(?:\.\d+)?)(?:[^0-9A-Za-z]|$)",
    )
    .expect("Invalid embedded token regex")
});

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("Invalid separator regex"));

/// Assigns `display_name` to every record, repairing collisions.
///
/// Records are grouped by `matched_catalog_name`. A record alone in its
/// group is labelled with the catalog name; members of a larger group get
/// `"<base> (<suffix>)"`, where the suffix is the first date or version
/// token found in their rank-side name, or their raw rank-side name when
/// none exists. Vendor path prefixes are dropped from every label.
pub fn resolve_collisions(mut records: Vec<ResolvedRecord>) -> Vec<ResolvedRecord> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (position, record) in records.iter().enumerate() {
        groups
            .entry(record.matched_catalog_name.clone())
            .or_default()
            .push(position);
    }

    for (catalog_name, members) in &groups {
        if let [only] = members.as_slice() {
            records[*only].display_name = strip_vendor_prefix(catalog_name).to_string();
            continue;
        }

        let base = base_name(catalog_name);
        let mut labels: Vec<String> = members
            .iter()
            .map(|&position| {
                let rank_name = &records[position].rank_name;
                match find_disambiguator(rank_name) {
                    Some(suffix) if !base.is_empty() => format!("{base} ({suffix})"),
                    _ => strip_vendor_prefix(rank_name).to_string(),
                }
            })
            .collect();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for label in &labels {
            *counts.entry(label.as_str()).or_default() += 1;
        }
        let repeated: Vec<bool> = labels.iter().map(|label| counts[label.as_str()] > 1).collect();
        for (label, (&position, clash)) in labels.iter_mut().zip(members.iter().zip(repeated)) {
            if clash {
                *label = strip_vendor_prefix(&records[position].rank_name).to_string();
            }
        }

        debug!(
            catalog_name = %catalog_name,
            members = members.len(),
            "repaired display name collision"
        );
        for (&position, label) in members.iter().zip(labels) {
            records[position].display_name = strip_vendor_prefix(&label).to_string();
        }
    }

    records
}

/// First date-like or version token in `rank_name`.
pub fn find_disambiguator(rank_name: &str) -> Option<&str> {
    DISAMBIGUATOR_REGEXES.iter().find_map(|regex| {
        regex
            .captures(rank_name)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    })
}

/// Drops everything up to and including the last `/`.
pub fn strip_vendor_prefix(name: &str) -> &str {
    match name.rsplit_once('/') {
        Some((_, tail)) if !tail.trim().is_empty() => tail,
        _ => name,
    }
}

/// Catalog name without vendor prefix or embedded date/version tokens,
/// separators collapsed to single spaces.
fn base_name(catalog_name: &str) -> String {
    let mut base = strip_vendor_prefix(catalog_name).to_string();
    // Adjacent tokens share a boundary character, so one pass can miss one.
    loop {
        let next = EMBEDDED_TOKEN_REGEX.replace_all(&base, " ").into_owned();
        if next == base {
            break;
        }
        base = next;
    }
    SEPARATOR_REGEX.replace_all(&base, " ").trim().to_string()
}
