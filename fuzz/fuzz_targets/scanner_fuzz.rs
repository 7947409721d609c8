//! Fuzz test for the stylesheet token scanner
//!
//! The scanner runs speculative pattern matching over whatever text the
//! linked stylesheets happen to contain, so it must tolerate arbitrary
//! input: no panics, no hangs, and every discovered token actually carries
//! its namespace prefix.
//!
//! Run with: cargo +nightly fuzz run scanner_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use tinct_scan::{diagnostic_candidates, ScanConfig, Scanner};

fuzz_target!(|data: &[u8]| {
    if let Ok(corpus) = std::str::from_utf8(data) {
        let config = ScanConfig::default();
        let report = Scanner::new(&config).scan(corpus);

        for variable in &report.variables {
            assert!(
                variable.starts_with(&config.theme_var_prefix)
                    || variable.starts_with(&config.brand_var_prefix),
                "variable outside its namespace: {variable}"
            );
        }
        for class in report.theme_classes.values() {
            assert!(class.starts_with(&config.theme_class_prefix));
        }
        for class in report.brand_classes.values() {
            assert!(class.starts_with(&config.brand_class_prefix));
        }

        // Diagnostics stay capped no matter the input.
        let (properties, classes) = diagnostic_candidates(corpus);
        assert!(properties.len() <= 12);
        assert!(classes.len() <= 12);
    }
});
