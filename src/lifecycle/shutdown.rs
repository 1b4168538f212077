//! Graceful shutdown signalling.
//!
//! The server has no long-running tasks beyond the listener loop, so the
//! whole surface is one pair: `trigger` fires the signal, `wait` resolves
//! once it has fired. `HttpServer::run` waits on this to drain in-flight
//! requests and exit; the signal task and the tests trigger it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Handle used to stop the running server.
///
/// Clones share one signal: triggering any clone releases every waiter,
/// including waiters that only start after the trigger.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fire the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }

    /// Resolve once the signal has fired, immediately if it already has.
    pub async fn wait(&self) {
        // Subscribe before checking the flag so a trigger between the two
        // cannot be lost.
        let mut rx = self.tx.subscribe();
        if self.triggered.load(Ordering::SeqCst) {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
