//! End-to-end pipeline tests over scripted collaborators: no network, no DOM,
//! no real store.

use std::sync::Arc;
use tinct::{EngineConfig, ThemeEngine};
use tinct_core::FetchError;
use tinct_test_utils::{
    MemoryStore, ScriptedFetcher, ScriptedPage, StyleOracle, SAMPLE_CORPUS,
};
use tokio::sync::broadcast::error::TryRecvError;

fn engine_with_store(store: MemoryStore, fetcher: ScriptedFetcher) -> ThemeEngine<ScriptedFetcher, MemoryStore> {
    ThemeEngine::new(EngineConfig::default(), fetcher, store).unwrap()
}

#[tokio::test]
async fn fresh_run_materializes_full_cross_product() {
    let engine = engine_with_store(MemoryStore::new(), ScriptedFetcher::serving_sample_corpus());
    let mut ready = engine.subscribe();
    let mut page = ScriptedPage::new().with_sample_values();

    let registry = engine.run(&mut page).await;

    assert_eq!(registry.len(), 2);
    for (theme, bg) in [("dark", "#111"), ("light", "#fff")] {
        for (brand, accent) in [("acme", "red"), ("zen", "green")] {
            let snapshot = registry.get(Some(theme), Some(brand));
            assert_eq!(snapshot["--_theme---bg"], bg);
            assert_eq!(snapshot["--_brand---accent"], accent);
        }
    }

    // Signal carries the very registry that was returned.
    let payload = ready.recv().await.unwrap();
    assert!(Arc::ptr_eq(&payload, &registry));
}

#[tokio::test]
async fn run_leaves_root_class_untouched() {
    let engine = engine_with_store(MemoryStore::new(), ScriptedFetcher::serving_sample_corpus());
    let mut page = ScriptedPage::new()
        .with_root_class("wf-loaded nav-open")
        .with_sample_values();

    engine.run(&mut page).await;

    assert_eq!(page.root_class(), "wf-loaded nav-open");
    // Measurements saw only the classes under test.
    assert!(page
        .applied
        .iter()
        .step_by(2)
        .all(|applied| !applied.contains("wf-loaded")));
}

#[tokio::test]
async fn second_load_is_served_from_cache() {
    let store = MemoryStore::new();

    let first = engine_with_store(store.clone(), ScriptedFetcher::serving_sample_corpus());
    let fresh = first.run(&mut ScriptedPage::new().with_sample_values()).await;

    // Same store, same publish marker, a fetcher that would fail if used.
    let fetcher = ScriptedFetcher::new();
    let second = engine_with_store(store, fetcher);
    let mut ready = second.subscribe();
    let cached = second.run(&mut ScriptedPage::new()).await;

    assert_eq!(*cached, *fresh);
    assert_eq!(second.fetcher().calls(), 0);
    assert!(ready.recv().await.is_ok());
}

#[tokio::test]
async fn republish_invalidates_the_cache() {
    let store = MemoryStore::new();

    let first = engine_with_store(store.clone(), ScriptedFetcher::serving_sample_corpus());
    first.run(&mut ScriptedPage::new().with_sample_values()).await;

    let republished = "Last Published: Wed Aug 28 2024 09:00:00 GMT+0000 (Coordinated Universal Time)";
    let second = engine_with_store(store, ScriptedFetcher::serving_sample_corpus());
    let mut page = ScriptedPage::new()
        .with_marker(Some(republished))
        .with_sample_values();
    second.run(&mut page).await;

    assert_eq!(second.fetcher().calls(), 1);
}

#[tokio::test]
async fn zero_stylesheets_is_terminal_without_signal() {
    let store = MemoryStore::new();
    let engine = engine_with_store(store.clone(), ScriptedFetcher::new());
    let mut ready = engine.subscribe();

    let registry = engine.run(&mut ScriptedPage::new().with_hrefs(&[])).await;

    assert!(registry.is_empty());
    assert!(matches!(ready.try_recv(), Err(TryRecvError::Empty)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn no_theme_classes_is_terminal_without_signal() {
    // Variables exist, theme classes do not.
    let fetcher = ScriptedFetcher::new().with_body("site.css", ".card { --_theme---bg: red; }");
    let engine = engine_with_store(MemoryStore::new(), fetcher);
    let mut ready = engine.subscribe();

    let registry = engine.run(&mut ScriptedPage::new()).await;

    assert!(registry.is_empty());
    assert!(matches!(ready.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn no_variables_is_terminal_without_signal() {
    let fetcher = ScriptedFetcher::new().with_body("site.css", ".u-theme-dark { color: red; }");
    let engine = engine_with_store(MemoryStore::new(), fetcher);
    let mut ready = engine.subscribe();

    let registry = engine.run(&mut ScriptedPage::new()).await;

    assert!(registry.is_empty());
    assert!(matches!(ready.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn discovery_survives_partial_fetch_failure() {
    let fetcher = ScriptedFetcher::new()
        .with_failure(
            "a.css",
            FetchError::Transport {
                href: "a.css".to_string(),
                reason: "connection reset".to_string(),
            },
        )
        .with_failure("b.css", FetchError::Status { href: "b.css".to_string(), status: 500 })
        .with_body("c.css", SAMPLE_CORPUS);
    let engine = engine_with_store(MemoryStore::new(), fetcher);
    let mut page = ScriptedPage::new()
        .with_hrefs(&["a.css", "b.css", "c.css"])
        .with_sample_values();

    let registry = engine.run(&mut page).await;

    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn missing_publish_marker_still_computes_but_never_caches() {
    let store = MemoryStore::new();
    let engine = engine_with_store(store.clone(), ScriptedFetcher::serving_sample_corpus());
    let mut page = ScriptedPage::new()
        .with_marker(None)
        .with_sample_values();

    let registry = engine.run(&mut page).await;

    assert_eq!(registry.len(), 2);
    assert!(store.is_empty());
}

#[tokio::test]
async fn cache_disabled_always_recomputes() {
    let config = EngineConfig {
        cache_enabled: false,
        ..EngineConfig::default()
    };
    let store = MemoryStore::new();

    for _ in 0..2 {
        let engine = ThemeEngine::new(
            config.clone(),
            ScriptedFetcher::serving_sample_corpus(),
            store.clone(),
        )
        .unwrap();
        let registry = engine.run(&mut ScriptedPage::new().with_sample_values()).await;
        assert_eq!(registry.len(), 2);
        assert_eq!(engine.fetcher().calls(), 1);
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn flat_registry_when_corpus_has_no_brands() {
    let corpus = r#"
        .u-theme-dark { --_theme---bg: #111; }
        .u-theme-light { --_theme---bg: #fff; }
    "#;
    let fetcher = ScriptedFetcher::new().with_body("site.css", corpus);
    let engine = engine_with_store(MemoryStore::new(), fetcher);
    let mut page = ScriptedPage::new()
        .with_value("u-theme-dark", "--_theme---bg", "#111")
        .with_value("u-theme-light", "--_theme---bg", "#fff");

    let registry = engine.run(&mut page).await;

    assert_eq!(registry.get(Some("dark"), None)["--_theme---bg"], "#111");
    // Flat themes ignore any brand argument.
    assert_eq!(registry.get(Some("dark"), Some("acme"))["--_theme---bg"], "#111");
}
