//! TINCT Probe - Theme Materializer
//!
//! Turns discovered tokens into concrete property -> value snapshots by
//! toggling marker classes on the document root and asking the resolved-style
//! oracle for each variable. The root element is the single shared mutable
//! resource in the whole pipeline, so probes are strictly sequential and each
//! one is a single synchronous block: save the class attribute, measure under
//! exactly the classes under test, restore. Holding `&mut` on the oracle for
//! the duration makes that single-writer discipline a compile-time contract
//! instead of a page-global assumption.

use tinct_core::{BrandMap, Snapshot, ThemeEntry, ThemeRegistry};
use tinct_scan::ScanReport;

/// Narrow capability interface over the host page's style resolution.
///
/// `resolve` reads the computed value of one custom property on the root
/// element under whatever class attribute is currently applied. Mutation of
/// the class attribute requires `&mut self`, so two probes can never overlap.
pub trait StyleOracle {
    /// The root element's current class attribute, verbatim.
    fn root_class(&self) -> String;

    /// Replace the root element's class attribute wholesale.
    fn set_root_class(&mut self, value: &str);

    /// Resolved value of `variable` on the root element; empty string when
    /// the variable does not resolve under the active classes.
    fn resolve(&self, variable: &str) -> String;
}

/// The host page as the pipeline sees it: the style oracle plus the two
/// read-only facts discovery needs up front.
pub trait HostPage: StyleOracle {
    /// Text of the freshness marker preceding the document root, if any.
    fn publish_marker(&self) -> Option<String>;

    /// All stylesheet references currently linked into the document, in
    /// document order.
    fn stylesheet_hrefs(&self) -> Vec<String>;
}

/// Materialize every discovered theme (and brand combination) into a registry.
///
/// A corpus with no brand classes yields one flat snapshot per theme. Any
/// brand classes at all yield the full cross product of themes and brands -
/// brands cannot be scoped to particular themes. Registry insertion order
/// follows class discovery order.
pub fn materialize<O: StyleOracle + ?Sized>(oracle: &mut O, report: &ScanReport) -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();

    for (theme_name, theme_class) in &report.theme_classes {
        let entry = if report.brand_classes.is_empty() {
            ThemeEntry::Flat(probe(oracle, report, &[theme_class]))
        } else {
            let mut brands = BrandMap::new();
            for (brand_name, brand_class) in &report.brand_classes {
                brands.insert(
                    brand_name.clone(),
                    probe(oracle, report, &[theme_class, brand_class]),
                );
            }
            ThemeEntry::Branded(brands)
        };
        registry.insert(theme_name.clone(), entry);
    }

    tracing::debug!(
        themes = registry.len(),
        brands = report.brand_classes.len(),
        "materialized theme registry"
    );
    registry
}

/// One probe: measure every discovered variable under exactly `classes`.
///
/// The saved class attribute may carry unrelated classes from other systems;
/// it is cleared for the measurement (so nothing else interferes) and put
/// back verbatim afterwards. No await point anywhere in here.
fn probe<O: StyleOracle + ?Sized>(
    oracle: &mut O,
    report: &ScanReport,
    classes: &[&String],
) -> Snapshot {
    let saved = oracle.root_class();
    let combination = classes
        .iter()
        .map(|class| class.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    oracle.set_root_class(&combination);

    let mut snapshot = Snapshot::new();
    for variable in &report.variables {
        let value = oracle.resolve(variable);
        let value = value.trim();
        if !value.is_empty() {
            snapshot.insert(variable.clone(), value.to_string());
        }
    }

    oracle.set_root_class(&saved);
    snapshot
}
