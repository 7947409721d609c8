//! Fuzz test for publish-marker fingerprint parsing
//!
//! The marker is free text scraped from a comment node; parsing must never
//! panic, and a successful parse must be deterministic.
//!
//! Run with: cargo +nightly fuzz run fingerprint_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use tinct_core::Fingerprint;

fuzz_target!(|data: &[u8]| {
    if let Ok(marker) = std::str::from_utf8(data) {
        let first = Fingerprint::from_publish_marker(marker);
        let second = Fingerprint::from_publish_marker(marker);
        assert_eq!(first, second);
    }
});
