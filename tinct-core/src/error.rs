//! Error types for TINCT operations

use thiserror::Error;

/// Persistent key-value store errors.
///
/// These are always absorbed by the cache layer (a failed read is a miss,
/// a failed write is logged and dropped). They exist so store backends can
/// report what went wrong without deciding policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Per-stylesheet fetch errors.
///
/// Absorbed by the aggregator: a failed sheet contributes an empty string
/// and the remaining sheets are still used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport failure for {href}: {reason}")]
    Transport { href: String, reason: String },

    #[error("Non-success status {status} for {href}")]
    Status { href: String, status: u16 },
}

/// Terminal discovery conditions.
///
/// Any of these ends the current load: the registry stays empty and the
/// readiness signal does not fire. None of them is fatal to the host page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("No stylesheets linked into the document")]
    NoStylesheets,

    #[error("No theme classes found in the stylesheet corpus")]
    NoThemeClasses,

    #[error("No theme or brand variables found in the stylesheet corpus")]
    NoVariables,
}

/// Master error type for all TINCT errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TinctError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}

/// Result type alias for TINCT operations.
pub type TinctResult<T> = Result<T, TinctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_read_failed() {
        let err = StoreError::ReadFailed {
            key: "tinct:theme-registry".to_string(),
            reason: "backend closed".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Read failed"));
        assert!(msg.contains("tinct:theme-registry"));
        assert!(msg.contains("backend closed"));
    }

    #[test]
    fn test_fetch_error_display_status() {
        let err = FetchError::Status {
            href: "https://cdn.example.com/site.css".to_string(),
            status: 404,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("404"));
        assert!(msg.contains("site.css"));
    }

    #[test]
    fn test_discovery_error_converts_into_master() {
        let err: TinctError = DiscoveryError::NoThemeClasses.into();
        assert_eq!(err, TinctError::Discovery(DiscoveryError::NoThemeClasses));
        let msg = format!("{}", err);
        assert!(msg.contains("No theme classes"));
    }
}
