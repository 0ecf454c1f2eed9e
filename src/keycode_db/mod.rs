//! Keycode dictionaries and label lookup.
//!
//! Two dictionary tiers are consulted for every lookup: the *primary*
//! dictionary (QMK's basic keycode set) and the *extra* dictionary
//! (language/locale aliases). Within a tier the earliest entry claiming a
//! raw keycode string wins, matching the source document's insertion order;
//! the primary tier always shadows the extra tier. Dictionary contents may
//! legitimately overlap, so this order is load-bearing.

pub mod resolver;

pub use resolver::KeyToken;

use serde::Deserialize;
use serde_json::Map;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// A single dictionary entry: canonical keycode, display label, and
/// alternate raw forms that map to the same label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeycodeEntry {
    /// Canonical raw keycode (e.g., "`KC_ENT`").
    pub key: String,
    /// Display label (e.g., "Enter").
    pub label: String,
    /// Alternate raw keycodes mapping to the same label (e.g., "`KC_ENTER`").
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One dictionary tier: ordered entries plus a first-wins lookup table.
///
/// Matching is exact string equality against an entry's `key` or any of its
/// aliases, so a hash table populated with first-wins insertion is
/// observably identical to scanning the entries in source order.
#[derive(Debug, Clone, Default)]
struct DictionaryTier {
    entries: Vec<KeycodeEntry>,
    lookup: HashMap<String, usize>,
}

impl DictionaryTier {
    fn from_entries(entries: Vec<KeycodeEntry>) -> Self {
        let mut lookup = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            lookup.entry(entry.key.clone()).or_insert(idx);
            for alias in &entry.aliases {
                lookup.entry(alias.clone()).or_insert(idx);
            }
        }
        Self { entries, lookup }
    }

    fn label_for(&self, raw: &str) -> Option<&str> {
        let idx = self.lookup.get(raw)?;
        self.entries.get(*idx).map(|entry| entry.label.as_str())
    }
}

/// Primary dictionary document shape: entries live under `keycodes`.
#[derive(Debug, Deserialize)]
struct PrimaryDocument {
    keycodes: Map<String, serde_json::Value>,
}

/// Extra dictionary document shape: entries live under `aliases`.
#[derive(Debug, Deserialize)]
struct ExtraDocument {
    aliases: Map<String, serde_json::Value>,
}

/// Keycode database backed by the primary and extra dictionaries.
#[derive(Debug, Clone)]
pub struct KeycodeDb {
    primary: DictionaryTier,
    extra: DictionaryTier,
}

impl KeycodeDb {
    /// Loads the database from the two dictionary documents.
    ///
    /// Both documents are json5/hjson-style structured text as shipped by
    /// QMK: the primary document holds a `keycodes` object, the extra
    /// document an `aliases` object, each mapping an arbitrary entry name
    /// to `{ key, label, aliases? }`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`] when either document fails to
    /// parse or an entry violates the schema.
    pub fn from_sources(primary: &str, extra: &str) -> Result<Self> {
        let primary_doc: PrimaryDocument = json5::from_str(primary).map_err(|e| {
            Error::MalformedDocument(format!("failed to parse primary keycode dictionary: {e}"))
        })?;
        let extra_doc: ExtraDocument = json5::from_str(extra).map_err(|e| {
            Error::MalformedDocument(format!("failed to parse extra keycode dictionary: {e}"))
        })?;

        let primary_entries = convert_entries(primary_doc.keycodes, "primary")?;
        let extra_entries = convert_entries(extra_doc.aliases, "extra")?;

        tracing::debug!(
            primary = primary_entries.len(),
            extra = extra_entries.len(),
            "loaded keycode dictionaries"
        );

        Ok(Self::from_entries(primary_entries, extra_entries))
    }

    /// Builds the database from already-parsed entry lists.
    ///
    /// Entry order is significant: within a tier the earliest entry wins
    /// when two entries claim the same raw keycode.
    #[must_use]
    pub fn from_entries(primary: Vec<KeycodeEntry>, extra: Vec<KeycodeEntry>) -> Self {
        Self {
            primary: DictionaryTier::from_entries(primary),
            extra: DictionaryTier::from_entries(extra),
        }
    }

    /// Looks up the display label for a raw keycode.
    ///
    /// Searches the primary tier first, then the extra tier; a raw keycode
    /// matches an entry when it equals the entry's `key` or any of its
    /// aliases. Returns `None` when both tiers miss; the caller decides the
    /// fallback.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.primary
            .label_for(raw)
            .or_else(|| self.extra.label_for(raw))
    }

    /// Total number of entries across both tiers.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.primary.entries.len() + self.extra.entries.len()
    }
}

/// Converts a dictionary document's entry map into an ordered entry list.
fn convert_entries(map: Map<String, serde_json::Value>, tier: &str) -> Result<Vec<KeycodeEntry>> {
    map.into_iter()
        .map(|(name, value)| {
            serde_json::from_value(value).map_err(|e| {
                Error::MalformedDocument(format!(
                    "invalid entry '{name}' in {tier} keycode dictionary: {e}"
                ))
            })
        })
        .collect()
}
