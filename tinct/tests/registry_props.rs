//! Property tests over arbitrary registries.

use proptest::prelude::*;
use tinct_test_utils::{arb_registry, ThemeRegistry};

proptest! {
    /// A cached registry deserializes back to exactly what was saved.
    #[test]
    fn serde_round_trip(registry in arb_registry()) {
        let json = serde_json::to_string(&registry).unwrap();
        let back: ThemeRegistry = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, registry);
    }

    /// Lookup is total: any combination of arguments yields a snapshot
    /// (possibly empty), never a panic, and never mutates the registry.
    #[test]
    fn lookup_is_total(
        registry in arb_registry(),
        theme in proptest::option::of("[a-z]{0,6}"),
        brand in proptest::option::of("[a-z]{0,6}"),
    ) {
        let before = registry.clone();
        let snapshot = registry.get(theme.as_deref(), brand.as_deref());
        for value in snapshot.values() {
            prop_assert!(!value.trim().is_empty());
        }
        prop_assert_eq!(registry, before);
    }
}
