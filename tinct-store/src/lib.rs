//! TINCT Store - Persistent Cache
//!
//! Caches the materialized theme registry across page loads, keyed to the
//! content-publish fingerprint. The whole layer fails soft: a storage error
//! on read is a miss, a storage error on write is a log line, and a
//! fingerprint mismatch discards the stored record wholesale - it is never
//! merged or partially trusted.

pub mod cache;
pub mod store;

pub use cache::{ThemeCache, FINGERPRINT_KEY, REGISTRY_KEY};
pub use store::{KeyValueStore, MemoryStore};
