//! Deduplicated lookup over the price catalog.

use std::collections::BTreeMap;

use pareto_model::PriceEntry;
use tracing::trace;

use crate::normalize::normalize;

/// A catalog entry together with its precomputed lookup keys.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedEntry {
    /// Lowercased raw name.
    pub key: String,
    /// [`normalize`]d raw name.
    pub normalized: String,
    pub entry: PriceEntry,
}

/// Read-only index of price entries keyed by lowercased and normalized name.
///
/// Entries sharing a lowercased name are collapsed to the one with the
/// lower input price; on equal prices the first one seen is kept. A
/// replacement keeps the slot of the entry it replaces, so iteration order
/// is the first-seen order of each key.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalogIndex {
    entries: Vec<IndexedEntry>,
    by_key: BTreeMap<String, usize>,
    by_normalized: BTreeMap<String, Vec<usize>>,
}

impl PriceCatalogIndex {
    /// Builds the index from validated entries in catalog order.
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a PriceEntry>,
    {
        let mut entries_out: Vec<IndexedEntry> = Vec::new();
        let mut by_key: BTreeMap<String, usize> = BTreeMap::new();
        for entry in entries {
            let key = entry.name.to_lowercase();
            match by_key.get(&key) {
                Some(&slot) => {
                    let existing = &mut entries_out[slot];
                    if entry.input_price < existing.entry.input_price {
                        trace!(
                            key = %key,
                            kept = entry.input_price,
                            dropped = existing.entry.input_price,
                            "cheaper duplicate replaces catalog entry"
                        );
                        existing.normalized = normalize(&entry.name);
                        existing.entry = entry.clone();
                    }
                }
                None => {
                    by_key.insert(key.clone(), entries_out.len());
                    entries_out.push(IndexedEntry {
                        normalized: normalize(&entry.name),
                        key,
                        entry: entry.clone(),
                    });
                }
            }
        }

        let mut by_normalized: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (slot, indexed) in entries_out.iter().enumerate() {
            by_normalized
                .entry(indexed.normalized.clone())
                .or_default()
                .push(slot);
        }

        Self {
            entries: entries_out,
            by_key,
            by_normalized,
        }
    }

    /// Looks up an entry by its lowercased raw name.
    pub fn by_exact_name(&self, lowercased_name: &str) -> Option<&PriceEntry> {
        self.by_key
            .get(lowercased_name)
            .map(|&slot| &self.entries[slot].entry)
    }

    /// First entry, in catalog order, whose normalized name equals `normalized`.
    pub fn by_normalized_name(&self, normalized: &str) -> Option<&PriceEntry> {
        self.by_normalized
            .get(normalized)
            .and_then(|slots| slots.first())
            .map(|&slot| &self.entries[slot].entry)
    }

    /// All normalized-name matches in catalog order.
    pub fn all_by_normalized_name(&self, normalized: &str) -> Vec<&PriceEntry> {
        self.by_normalized
            .get(normalized)
            .map(|slots| slots.iter().map(|&slot| &self.entries[slot].entry).collect())
            .unwrap_or_default()
    }

    /// Iterates over all entries in catalog order.
    pub fn all_entries(&self) -> impl Iterator<Item = &IndexedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, provider: &str, input_price: f64) -> PriceEntry {
        PriceEntry {
            name: name.to_string(),
            input_price,
            output_price: input_price,
            provider: provider.to_string(),
        }
    }

    #[test]
    fn cheaper_duplicate_wins() {
        let entries = vec![entry("Model-A", "First", 2.0), entry("model-a", "Second", 1.0)];
        let index = PriceCatalogIndex::build(&entries);

        assert_eq!(index.len(), 1);
        let kept = index.by_exact_name("model-a").expect("entry present");
        assert_eq!(kept.input_price, 1.0);
        assert_eq!(kept.provider, "Second");
    }

    #[test]
    fn equal_price_keeps_first_seen() {
        let entries = vec![entry("model-a", "First", 1.0), entry("MODEL-A", "Second", 1.0)];
        let index = PriceCatalogIndex::build(&entries);

        let kept = index.by_exact_name("model-a").expect("entry present");
        assert_eq!(kept.provider, "First");
        assert_eq!(kept.name, "model-a");
    }

    #[test]
    fn replacement_keeps_catalog_position() {
        let entries = vec![
            entry("alpha", "P", 3.0),
            entry("beta-model", "P", 1.0),
            entry("ALPHA", "Q", 0.5),
        ];
        let index = PriceCatalogIndex::build(&entries);
        let names: Vec<&str> = index.all_entries().map(|e| e.entry.name.as_str()).collect();

        assert_eq!(names, vec!["ALPHA", "beta-model"]);
    }

    #[test]
    fn normalized_lookup_returns_first_in_order() {
        let entries = vec![
            entry("gpt-4o-2024-05-13", "OpenAI", 5.0),
            entry("gpt-4o", "OpenAI", 2.5),
        ];
        let index = PriceCatalogIndex::build(&entries);

        let hit = index.by_normalized_name("gpt 4o").expect("normalized hit");
        assert_eq!(hit.name, "gpt-4o-2024-05-13");
        assert_eq!(index.all_by_normalized_name("gpt 4o").len(), 2);
        assert!(index.by_normalized_name("gpt 5").is_none());
    }

    #[test]
    fn empty_catalog_builds_empty_index() {
        let index = PriceCatalogIndex::build(&Vec::<PriceEntry>::new());
        assert!(index.is_empty());
        assert!(index.by_exact_name("anything").is_none());
    }
}
