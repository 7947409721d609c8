//! Publish-stamp fingerprinting.
//!
//! Published page content carries a free-text marker immediately before the
//! document root: `Last Published: Tue Aug 27 2024 07:07:07 GMT+0000 (...)`.
//! The fingerprint is the millisecond timestamp parsed out of that marker.
//! Two loads of unchanged content produce the same fingerprint; a republish
//! moves the stamp and therefore the fingerprint.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches the publish stamp up to (and excluding) the `GMT` offset suffix.
static PUBLISH_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Last Published:\s*(.+?)\s+GMT").expect("publish marker pattern"));

/// Date layout used inside the marker, e.g. `Tue Aug 27 2024 07:07:07`.
const STAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

/// Content-publish freshness token: a Unix-millisecond timestamp.
///
/// Opaque to everything except the cache, which stores its decimal string
/// and compares string-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(i64);

impl Fingerprint {
    /// Construct from a raw millisecond timestamp.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Parse the fingerprint out of a publish marker, if one is present.
    ///
    /// Returns `None` when the marker is missing or its date fails to parse.
    /// Pure and synchronous; called with the same marker text for the cache
    /// check and the write-back, so both see the same value within a load.
    pub fn from_publish_marker(marker: &str) -> Option<Self> {
        let captures = PUBLISH_MARKER.captures(marker)?;
        let stamp = captures.get(1)?.as_str();
        let parsed = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()?;
        Some(Self(parsed.and_utc().timestamp_millis()))
    }

    /// The raw millisecond timestamp.
    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
