//! Readiness signal.
//!
//! One-shot notification that the registry is populated, carrying the
//! registry itself as payload - consumers own what they receive instead of
//! reaching into process-global state. Always asynchronous relative to the
//! code that starts the pipeline; there is no replay, so consumers must hold
//! a receiver before the signal fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tinct_core::ThemeRegistry;
use tokio::sync::broadcast;

pub struct ReadySignal {
    tx: broadcast::Sender<Arc<ThemeRegistry>>,
    fired: AtomicBool,
}

impl ReadySignal {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self {
            tx,
            fired: AtomicBool::new(false),
        }
    }

    /// Subscribe before the pipeline runs; a receiver obtained after the
    /// fire sees nothing.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ThemeRegistry>> {
        self.tx.subscribe()
    }

    /// Emit the signal. At most one emission goes out per signal instance;
    /// any further attempt is dropped with a warning. Having no subscribers
    /// is not an error.
    pub fn fire(&self, registry: Arc<ThemeRegistry>) {
        if self.fired.swap(true, Ordering::SeqCst) {
            tracing::warn!("readiness signal already fired; dropping duplicate");
            return;
        }
        if self.tx.send(registry).is_err() {
            tracing::debug!("readiness signal fired with no subscribers");
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}
