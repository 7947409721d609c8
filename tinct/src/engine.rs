//! Pipeline orchestration.

use std::sync::Arc;

use tinct_core::{DiscoveryError, Fingerprint, ThemeRegistry};
use tinct_fetch::{aggregate, StylesheetFetcher};
use tinct_probe::{materialize, HostPage};
use tinct_scan::{diagnostic_candidates, Scanner};
use tinct_store::{KeyValueStore, ThemeCache};

use crate::config::{ConfigError, EngineConfig};
use crate::signal::ReadySignal;

/// The discovery-and-materialization engine.
///
/// Holds the compiled scanner, the fetcher, the fingerprinted cache, and the
/// readiness signal. One engine serves one page load; `run` is called once
/// and every failure inside it degrades or terminates quietly - it never
/// returns an error to the host page.
pub struct ThemeEngine<F, S> {
    config: EngineConfig,
    scanner: Scanner,
    fetcher: F,
    cache: ThemeCache<S>,
    signal: ReadySignal,
}

impl<F: StylesheetFetcher, S: KeyValueStore> ThemeEngine<F, S> {
    pub fn new(config: EngineConfig, fetcher: F, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let scanner = Scanner::new(&config.scan);
        let signal = ReadySignal::new(config.signal_capacity);
        Ok(Self {
            config,
            scanner,
            fetcher,
            cache: ThemeCache::new(store),
            signal,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Subscribe to the readiness signal. Must happen before `run` fires it;
    /// there is no replay for late subscribers.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Arc<ThemeRegistry>> {
        self.signal.subscribe()
    }

    /// Run the full pipeline against one host page.
    ///
    /// Fast path: a cache hit under the current fingerprint skips fetch,
    /// scan, and probing entirely. Either path ends with the readiness
    /// signal carrying the registry - unless discovery terminated, in which
    /// case the returned registry is empty and the signal never fires.
    ///
    /// Everything after the fetch join runs synchronously; the `&mut` on the
    /// page keeps probes exclusive for the whole run.
    pub async fn run<P: HostPage + ?Sized>(&self, page: &mut P) -> Arc<ThemeRegistry> {
        let fingerprint = page
            .publish_marker()
            .as_deref()
            .and_then(Fingerprint::from_publish_marker);

        if self.config.cache_enabled {
            if let Some(cached) = self.cache.load(fingerprint) {
                let registry = Arc::new(cached);
                self.signal.fire(Arc::clone(&registry));
                return registry;
            }
        }

        let hrefs = page.stylesheet_hrefs();
        if hrefs.is_empty() {
            tracing::error!("{}", DiscoveryError::NoStylesheets);
            return Arc::new(ThemeRegistry::new());
        }

        let corpus = aggregate(&self.fetcher, &hrefs).await;
        let report = self.scanner.scan(&corpus);

        if report.theme_classes.is_empty() {
            let (_, classes) = diagnostic_candidates(&corpus);
            tracing::warn!(
                nearby_classes = ?classes,
                "{}", DiscoveryError::NoThemeClasses
            );
            return Arc::new(ThemeRegistry::new());
        }
        if report.variables.is_empty() {
            let (properties, _) = diagnostic_candidates(&corpus);
            tracing::warn!(
                nearby_properties = ?properties,
                "{}", DiscoveryError::NoVariables
            );
            return Arc::new(ThemeRegistry::new());
        }

        let registry = Arc::new(materialize(page, &report));
        if self.config.cache_enabled {
            self.cache.save(fingerprint, &registry);
        }
        self.signal.fire(Arc::clone(&registry));
        registry
    }
}
