//! Scanner output.

use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Tokens discovered in the stylesheet corpus.
///
/// Variables are one combined, deduplicated set - theme and brand variables
/// are not distinguished downstream. Classes are keyed by their theme/brand
/// name (the class token minus its namespace prefix) and keep discovery
/// order, which later becomes registry insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Full custom-property names, e.g. `--_theme---surface--raised`.
    pub variables: BTreeSet<String>,
    /// Theme name -> full class token, e.g. `dark` -> `u-theme-dark`.
    pub theme_classes: IndexMap<String, String>,
    /// Brand name -> full class token, e.g. `acme` -> `u-brand-acme`.
    pub brand_classes: IndexMap<String, String>,
}

impl ScanReport {
    /// True when nothing theme-shaped was found at all.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.theme_classes.is_empty() && self.brand_classes.is_empty()
    }
}
