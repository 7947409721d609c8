//! TINCT Core - Data Types
//!
//! Pure data structures shared by every other crate in the workspace.
//! This crate contains the theme registry, the publish-stamp fingerprint,
//! and the error taxonomy - no I/O, no async, no business logic beyond
//! registry lookup and fingerprint parsing.

pub mod error;
pub mod fingerprint;
pub mod registry;

pub use error::{DiscoveryError, FetchError, StoreError, TinctError, TinctResult};
pub use fingerprint::Fingerprint;
pub use registry::{empty_snapshot, BrandMap, Snapshot, ThemeEntry, ThemeRegistry};
