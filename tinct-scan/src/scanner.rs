//! Scanner implementation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ScanConfig;
use crate::report::ScanReport;

/// One name segment: words joined by single hyphens (`surface`, `surface-alt`).
/// Double hyphens separate segments and never appear inside one.
const SEGMENT: &str = r"\w+(?:-\w+)*";

/// Cap on best-effort diagnostic listings.
const DIAGNOSTIC_LIMIT: usize = 12;

static ANY_CUSTOM_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--[A-Za-z_][\w-]*").expect("custom property pattern"));
static ANY_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z][\w-]*").expect("class token pattern"));

/// Compiled patterns for one set of naming conventions.
///
/// Built once per discovery run; `scan` itself is a pure function over the
/// corpus text.
pub struct Scanner {
    variables: Regex,
    theme_classes: Regex,
    brand_classes: Regex,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Self {
        let theme_var = regex::escape(&config.theme_var_prefix);
        let brand_var = regex::escape(&config.brand_var_prefix);
        // Declaration position only (name followed by a colon): a var() usage
        // of the same property does not count as a discovery.
        let variables = Regex::new(&format!(
            r"(?P<name>(?:{theme_var}|{brand_var}){SEGMENT}(?:--{SEGMENT})?)\s*:"
        ))
        .expect("variable pattern from escaped prefixes");

        Self {
            variables,
            theme_classes: Self::class_pattern(&config.theme_class_prefix),
            brand_classes: Self::class_pattern(&config.brand_class_prefix),
        }
    }

    fn class_pattern(prefix: &str) -> Regex {
        let escaped = regex::escape(prefix);
        Regex::new(&format!(r"\.{escaped}(?P<name>[\w-]+)"))
            .expect("class pattern from escaped prefix")
    }

    /// Discover theme variables, theme classes, and brand classes in the
    /// corpus. Duplicates collapse; class discovery order is preserved.
    pub fn scan(&self, corpus: &str) -> ScanReport {
        let mut report = ScanReport::default();

        for captures in self.variables.captures_iter(corpus) {
            report.variables.insert(captures["name"].to_string());
        }
        for (prefix_re, out) in [
            (&self.theme_classes, &mut report.theme_classes),
            (&self.brand_classes, &mut report.brand_classes),
        ] {
            for captures in prefix_re.captures_iter(corpus) {
                let full = captures.get(0).map(|m| m.as_str().trim_start_matches('.'));
                if let Some(full) = full {
                    out.entry(captures["name"].to_string())
                        .or_insert_with(|| full.to_string());
                }
            }
        }

        tracing::debug!(
            variables = report.variables.len(),
            theme_classes = report.theme_classes.len(),
            brand_classes = report.brand_classes.len(),
            "scanned stylesheet corpus"
        );
        report
    }
}

/// Best-effort candidates for warning logs when discovery comes up empty:
/// whatever custom-property and class names the corpus does contain, capped.
pub fn diagnostic_candidates(corpus: &str) -> (Vec<String>, Vec<String>) {
    let mut properties: Vec<String> = Vec::new();
    for m in ANY_CUSTOM_PROPERTY.find_iter(corpus) {
        let name = m.as_str().to_string();
        if !properties.contains(&name) {
            properties.push(name);
            if properties.len() == DIAGNOSTIC_LIMIT {
                break;
            }
        }
    }
    let mut classes: Vec<String> = Vec::new();
    for m in ANY_CLASS.find_iter(corpus) {
        let name = m.as_str().to_string();
        if !classes.contains(&name) {
            classes.push(name);
            if classes.len() == DIAGNOSTIC_LIMIT {
                break;
            }
        }
    }
    (properties, classes)
}
