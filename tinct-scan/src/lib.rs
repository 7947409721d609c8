//! TINCT Scan - Token Scanner
//!
//! Speculative pattern matching over the aggregated stylesheet corpus. This
//! is deliberately not a CSS parser: theme tokens follow strict naming
//! conventions, so literal/structural regexes are enough to discover them.
//! The scanner is the only place those patterns live - swapping it for a
//! real tokenizer later would not touch the materializer.

pub mod config;
pub mod report;
pub mod scanner;

pub use config::{ScanConfig, ScanConfigError};
pub use report::ScanReport;
pub use scanner::{diagnostic_candidates, Scanner};
