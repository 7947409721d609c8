//! Theme registry and lookup.
//!
//! The registry is built exactly once per load (from cache or from a fresh
//! materialization pass) and is immutable afterwards: consumers receive it
//! behind an `Arc` via the readiness signal and only ever call [`ThemeRegistry::get`].
//! Insertion order is discovery order and drives the lookup fallback chain,
//! so the maps are index maps rather than hash maps.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One materialized class combination: variable name -> resolved value.
///
/// Restricted to variables that resolved to a non-empty value; empty or
/// whitespace-only resolutions are omitted, never stored as empty strings.
pub type Snapshot = BTreeMap<String, String>;

/// Brand name -> snapshot, in discovery order.
pub type BrandMap = IndexMap<String, Snapshot>;

static EMPTY: Lazy<Snapshot> = Lazy::new(Snapshot::new);

/// The shared empty snapshot returned by every failed lookup.
pub fn empty_snapshot() -> &'static Snapshot {
    &EMPTY
}

/// A theme's materialized form.
///
/// Serialized untagged so the cached JSON mirrors the natural shape of the
/// data: a flat theme is a string map, a branded theme a map of maps. The
/// branded variant is tried first on deserialization; the two are otherwise
/// distinguishable by their value types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeEntry {
    /// Theme co-existing with discovered brand classes: one snapshot per brand.
    Branded(BrandMap),
    /// Theme with no brand classes anywhere in the corpus: one flat snapshot.
    Flat(Snapshot),
}

/// Theme name -> materialized entry, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeRegistry {
    entries: IndexMap<String, ThemeEntry>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a theme entry. Only the materializer and tests build registries;
    /// once handed out behind an `Arc` the registry is never mutated again.
    pub fn insert(&mut self, theme: impl Into<String>, entry: ThemeEntry) {
        self.entries.insert(theme.into(), entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate themes in discovery order.
    pub fn themes(&self) -> impl Iterator<Item = (&str, &ThemeEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn entry(&self, theme: &str) -> Option<&ThemeEntry> {
        self.entries.get(theme)
    }

    /// Look up a snapshot with the fallback chain:
    ///
    /// - theme omitted or empty: fall back to the first theme (insertion
    ///   order), preserving the brand argument;
    /// - unknown theme: the empty snapshot;
    /// - flat theme: its snapshot, any brand argument ignored;
    /// - branded theme with brand omitted or empty: the first brand's snapshot;
    /// - branded theme with an unknown brand: the empty snapshot;
    /// - otherwise the matching brand's snapshot.
    ///
    /// Pure and side-effect-free; this is the hot read path for downstream
    /// animation logic and never re-triggers materialization.
    pub fn get(&self, theme: Option<&str>, brand: Option<&str>) -> &Snapshot {
        let theme = theme.filter(|name| !name.is_empty());
        let name = match theme {
            Some(name) => name,
            None => match self.entries.keys().next() {
                Some(first) => first.as_str(),
                None => return empty_snapshot(),
            },
        };
        match self.entries.get(name) {
            None => empty_snapshot(),
            Some(ThemeEntry::Flat(snapshot)) => snapshot,
            Some(ThemeEntry::Branded(brands)) => {
                match brand.filter(|name| !name.is_empty()) {
                    None => brands.values().next().unwrap_or_else(|| empty_snapshot()),
                    Some(brand) => brands.get(brand).unwrap_or_else(|| empty_snapshot()),
                }
            }
        }
    }
}
