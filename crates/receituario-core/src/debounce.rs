//! Debounced task scheduling and stale-result detection.
//!
//! Free-text edits fire a regeneration request per keystroke. The
//! debouncer collapses those into one run after the typing pause, and the
//! context token lets callers discard results that arrive for an input
//! that has since changed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Delay between the last edit and the scheduled run.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1200);

/// Collapses rapid schedule calls so only the latest task runs.
///
/// Each call bumps a generation counter and spawns a waiter thread; when
/// the wait ends, the task runs only if no newer call superseded it.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run after `delay`, cancelling any pending task.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);

        thread::spawn(move || {
            thread::sleep(delay);
            if generation.load(Ordering::SeqCst) == my_generation {
                task();
            }
        });
    }

    /// Drop any pending task without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Monotonic token for detecting stale async results.
///
/// Capture the token before starting a slow operation; if it changed by
/// the time the result arrives, a newer operation owns the output slot
/// and the result must be dropped.
#[derive(Debug, Default)]
pub struct ContextToken {
    current: AtomicU64,
}

impl ContextToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding captures and return the new value.
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn capture(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, captured: u64) -> bool {
        self.current.load(Ordering::SeqCst) == captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_only_latest_scheduled_task_runs() {
        let debouncer = Debouncer::new();
        let (tx, rx) = mpsc::channel();

        for i in 0..5 {
            let tx = tx.clone();
            debouncer.schedule(Duration::from_millis(50), move || {
                tx.send(i).unwrap();
            });
        }

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first, 4);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_cancel_drops_pending_task() {
        let debouncer = Debouncer::new();
        let (tx, rx) = mpsc::channel();

        debouncer.schedule(Duration::from_millis(50), move || {
            tx.send(()).unwrap();
        });
        debouncer.cancel();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn test_context_token_invalidates_older_captures() {
        let token = ContextToken::new();
        let captured = token.capture();
        assert!(token.is_current(captured));

        token.advance();
        assert!(!token.is_current(captured));
        assert!(token.is_current(token.capture()));
    }
}
