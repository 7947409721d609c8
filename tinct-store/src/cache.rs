//! Fingerprinted registry cache.

use tinct_core::{Fingerprint, ThemeRegistry};

use crate::store::KeyValueStore;

/// Store key holding the decimal fingerprint of the cached registry.
pub const FINGERPRINT_KEY: &str = "tinct:publish-stamp";
/// Store key holding the JSON-serialized registry.
pub const REGISTRY_KEY: &str = "tinct:theme-registry";

/// Read/write gate between the discovery pipeline and the persistent store.
///
/// A load only hits when the stored fingerprint string-exactly matches the
/// current one; everything else - absent fingerprint, absent record, decode
/// failure, storage failure - is a miss that falls through to fresh
/// computation. Writes go fingerprint first, registry second: a partial
/// write can only cause a spurious miss on the next load, never a stale hit.
#[derive(Debug, Clone)]
pub struct ThemeCache<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the cached registry if it is still fresh. Never errors.
    pub fn load(&self, current: Option<Fingerprint>) -> Option<ThemeRegistry> {
        let current = match current {
            Some(fp) => fp,
            None => {
                tracing::debug!("no current fingerprint; skipping cache");
                return None;
            }
        };

        let stored = match self.store.get(FINGERPRINT_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "cache fingerprint read failed; treating as miss");
                return None;
            }
        };
        if stored != current.to_string() {
            tracing::debug!(stored = %stored, current = %current, "cache fingerprint stale");
            return None;
        }

        let raw = match self.store.get(REGISTRY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "cache registry read failed; treating as miss");
                return None;
            }
        };
        match serde_json::from_str::<ThemeRegistry>(&raw) {
            Ok(registry) => {
                tracing::debug!(themes = registry.len(), "theme registry served from cache");
                Some(registry)
            }
            Err(err) => {
                tracing::warn!(error = %err, "cached registry malformed; treating as miss");
                None
            }
        }
    }

    /// Persist the registry under the current fingerprint. Never errors;
    /// a missing fingerprint makes this a no-op.
    pub fn save(&self, current: Option<Fingerprint>, registry: &ThemeRegistry) {
        let current = match current {
            Some(fp) => fp,
            None => {
                tracing::debug!("no current fingerprint; not caching registry");
                return;
            }
        };

        let serialized = match serde_json::to_string(registry) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(error = %err, "registry serialization failed; not cached");
                return;
            }
        };
        // Fingerprint before registry; see the type-level comment.
        if let Err(err) = self.store.put(FINGERPRINT_KEY, &current.to_string()) {
            tracing::warn!(error = %err, "cache fingerprint write failed");
            return;
        }
        if let Err(err) = self.store.put(REGISTRY_KEY, &serialized) {
            tracing::warn!(error = %err, "cache registry write failed");
        }
    }
}
