//! TINCT - Theme Discovery & Materialization Engine
//!
//! Discovers named visual themes (and optional brand sub-variants) declared
//! as CSS custom properties under marker classes, materializes each one into
//! a concrete property -> value snapshot by probing the host page's resolved
//! styles, and caches the result keyed to the content-publish fingerprint so
//! repeated loads skip re-probing until the styles actually change.
//!
//! # Pipeline
//!
//! ```text
//! fingerprint -> cache (hit short-circuits) -> aggregate stylesheets
//!             -> scan tokens -> probe themes -> registry
//!             -> cache write-back -> readiness signal
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tinct::{EngineConfig, ThemeEngine};
//! use tinct_fetch::HttpStylesheetFetcher;
//! use tinct_store::MemoryStore;
//!
//! let engine = ThemeEngine::new(
//!     EngineConfig::default(),
//!     HttpStylesheetFetcher::new(),
//!     MemoryStore::new(),
//! )?;
//! let mut ready = engine.subscribe();
//! let registry = engine.run(&mut page).await;
//! let snapshot = registry.get(Some("dark"), None);
//! ```
//!
//! No failure in the pipeline ever reaches the host page: cache and fetch
//! problems degrade, discovery problems end the load with an empty registry
//! and a log line, and the readiness signal then simply never fires.

pub mod config;
pub mod engine;
pub mod signal;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig};
pub use engine::ThemeEngine;
pub use signal::ReadySignal;

// Re-export the types embedders interact with
pub use tinct_core::{Fingerprint, Snapshot, ThemeEntry, ThemeRegistry};
pub use tinct_fetch::{HttpStylesheetFetcher, StylesheetFetcher};
pub use tinct_probe::{HostPage, StyleOracle};
pub use tinct_scan::ScanConfig;
pub use tinct_store::{KeyValueStore, MemoryStore};
