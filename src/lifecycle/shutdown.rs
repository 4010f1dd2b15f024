//! Shutdown coordination for long-running sessions.

use std::future::Future;
use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that every long-running loop subscribes to.
/// Clones share the same channel.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Drive `work` until it finishes or shutdown is triggered.
    ///
    /// Returns `None` when shutdown won; `work` is dropped mid-flight.
    pub async fn run_until<F: Future>(&self, work: F) -> Option<F::Output> {
        let mut rx = self.subscribe();
        tokio::select! {
            output = work => Some(output),
            _ = rx.recv() => None,
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_trigger_reaches_subscribers_of_clones() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();

        let handle = shutdown.clone();
        handle.trigger();
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_run_until_interrupts_pending_work() {
        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.trigger();
        });

        let started = Instant::now();
        let output = shutdown
            .run_until(async {
                tokio::time::sleep(Duration::from_secs(8)).await;
                "fetched"
            })
            .await;

        assert_eq!(output, None);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_run_until_returns_finished_work() {
        let shutdown = Shutdown::new();
        assert_eq!(shutdown.run_until(async { 7 }).await, Some(7));
    }

    #[test]
    fn test_trigger_without_subscribers() {
        Shutdown::new().trigger();
    }
}
