//! Trailing-edge debounce on the Tokio timer.
//!
//! Each call arms a timer and supersedes any armed one. When a timer fires
//! it runs its action only if no later call happened in the meantime.
//! Actions that already started are never interrupted.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct DebounceState {
    generation: u64,
    armed: bool,
    latest: Option<JoinHandle<()>>,
}

/// Coalesces bursts of calls into one action after a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    state: Arc<Mutex<DebounceState>>,
}

fn lock(state: &Mutex<DebounceState>) -> MutexGuard<'_, DebounceState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(Mutex::new(DebounceState::default())),
        }
    }

    /// Schedule `action` after the quiet period, replacing any armed call.
    /// Must be called from within a Tokio runtime.
    pub fn call<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        let delay = self.delay;

        let mut guard = lock(&self.state);
        guard.generation += 1;
        guard.armed = true;
        let generation = guard.generation;

        guard.latest = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut guard = lock(&state);
                if guard.generation != generation {
                    return;
                }
                guard.armed = false;
            }
            action.await;
        }));
    }

    /// True while a timer is armed and has not fired.
    pub fn is_pending(&self) -> bool {
        lock(&self.state).armed
    }

    /// Wait until the most recent call has fired and its action finished.
    pub async fn settle(&self) {
        loop {
            let latest = lock(&self.state).latest.take();
            match latest {
                Some(handle) => {
                    if let Err(e) = handle.await {
                        tracing::warn!(error = %e, "Debounced action did not complete");
                    }
                }
                None => break,
            }
        }
    }
}
