//! TINCT Test Utilities
//!
//! Centralized test infrastructure for the TINCT workspace:
//! - A scripted host page standing in for the DOM/CSSOM oracle
//! - A scripted stylesheet fetcher with call counting
//! - Proptest generators for registries
//! - Canonical corpus and publish-marker fixtures

// Re-export the in-memory store and the traits the doubles implement
pub use tinct_core::{Fingerprint, Snapshot, ThemeEntry, ThemeRegistry};
pub use tinct_fetch::StylesheetFetcher;
pub use tinct_probe::{HostPage, StyleOracle};
pub use tinct_store::{KeyValueStore, MemoryStore};

use async_trait::async_trait;
use proptest::collection::btree_map;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tinct_core::{BrandMap, FetchError};

/// A publish marker whose fingerprint is 2024-08-27T07:07:07Z.
pub const SAMPLE_MARKER: &str =
    "Last Published: Tue Aug 27 2024 07:07:07 GMT+0000 (Coordinated Universal Time)";

/// A corpus with two themes, two brands, and one variable of each namespace.
pub const SAMPLE_CORPUS: &str = r#"
    .u-theme-dark { --_theme---bg: #111; }
    .u-theme-light { --_theme---bg: #fff; }
    .u-brand-acme { --_brand---accent: red; }
    .u-brand-zen { --_brand---accent: green; }
"#;

// ============================================================================
// SCRIPTED HOST PAGE
// ============================================================================

/// Host page double: scripted marker, stylesheet list, and resolved values.
///
/// Resolution is keyed by `(class combination, variable)` where the
/// combination is the exact class attribute applied by the probe. Every
/// class attribute the page is asked to apply is recorded in `applied`.
pub struct ScriptedPage {
    marker: Option<String>,
    hrefs: Vec<String>,
    class: String,
    values: HashMap<(String, String), String>,
    /// Every value passed to `set_root_class`, in order.
    pub applied: Vec<String>,
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self {
            marker: Some(SAMPLE_MARKER.to_string()),
            hrefs: vec!["site.css".to_string()],
            class: String::new(),
            values: HashMap::new(),
            applied: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Option<&str>) -> Self {
        self.marker = marker.map(ToString::to_string);
        self
    }

    pub fn with_hrefs(mut self, hrefs: &[&str]) -> Self {
        self.hrefs = hrefs.iter().map(ToString::to_string).collect();
        self
    }

    pub fn with_root_class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    pub fn with_value(mut self, combination: &str, variable: &str, value: &str) -> Self {
        self.values
            .insert((combination.to_string(), variable.to_string()), value.to_string());
        self
    }

    /// Script every theme/brand combination of [`SAMPLE_CORPUS`].
    pub fn with_sample_values(mut self) -> Self {
        for (theme, bg) in [("dark", "#111"), ("light", "#fff")] {
            for (brand, accent) in [("acme", "red"), ("zen", "green")] {
                let combo = format!("u-theme-{theme} u-brand-{brand}");
                self = self
                    .with_value(&combo, "--_theme---bg", bg)
                    .with_value(&combo, "--_brand---accent", accent);
            }
        }
        self
    }
}

impl Default for ScriptedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleOracle for ScriptedPage {
    fn root_class(&self) -> String {
        self.class.clone()
    }

    fn set_root_class(&mut self, value: &str) {
        self.class = value.to_string();
        self.applied.push(value.to_string());
    }

    fn resolve(&self, variable: &str) -> String {
        self.values
            .get(&(self.class.clone(), variable.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl HostPage for ScriptedPage {
    fn publish_marker(&self) -> Option<String> {
        self.marker.clone()
    }

    fn stylesheet_hrefs(&self) -> Vec<String> {
        self.hrefs.clone()
    }
}

// ============================================================================
// SCRIPTED FETCHER
// ============================================================================

/// Stylesheet fetcher double: href -> outcome, with a fetch counter so tests
/// can assert the cache fast path skipped the network entirely.
pub struct ScriptedFetcher {
    outcomes: HashMap<String, Result<String, FetchError>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A fetcher serving [`SAMPLE_CORPUS`] for `site.css`.
    pub fn serving_sample_corpus() -> Self {
        Self::new().with_body("site.css", SAMPLE_CORPUS)
    }

    pub fn with_body(mut self, href: &str, body: &str) -> Self {
        self.outcomes.insert(href.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_failure(mut self, href: &str, error: FetchError) -> Self {
        self.outcomes.insert(href.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StylesheetFetcher for ScriptedFetcher {
    async fn fetch_body(&self, href: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes.get(href).cloned().unwrap_or_else(|| {
            Err(FetchError::Status {
                href: href.to_string(),
                status: 404,
            })
        })
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

fn arb_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

// Non-empty: an empty flat snapshot serializes to `{}`, which reads back as
// an empty branded entry. Lookup treats the two identically, but round-trip
// properties compare structurally.
fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    btree_map("--_theme---[a-z]{1,6}", "[#a-z0-9]{1,10}", 1..4)
}

fn arb_entry() -> impl Strategy<Value = ThemeEntry> {
    prop_oneof![
        arb_snapshot().prop_map(ThemeEntry::Flat),
        proptest::collection::vec((arb_token(), arb_snapshot()), 1..3).prop_map(|brands| {
            let mut map = BrandMap::new();
            for (name, snapshot) in brands {
                map.insert(name, snapshot);
            }
            ThemeEntry::Branded(map)
        }),
    ]
}

/// Arbitrary registries for round-trip and lookup-totality properties.
pub fn arb_registry() -> impl Strategy<Value = ThemeRegistry> {
    proptest::collection::vec((arb_token(), arb_entry()), 0..4).prop_map(|themes| {
        let mut registry = ThemeRegistry::new();
        for (name, entry) in themes {
            registry.insert(name, entry);
        }
        registry
    })
}
