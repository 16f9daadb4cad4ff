//! Search input debouncing.
//!
//! Each query change restarts a fixed quiet-period timer; only a timer
//! that survives the full period uninterrupted delivers its query. The
//! timer is a spawned sleep whose `JoinHandle` is aborted on restart, so
//! a superseded timer never fires and never leaks a task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Debounces rapid query changes down to settled values.
///
/// At most one timer is pending per instance: starting a new one always
/// cancels the previous outright, with no coalescing and no trailing
/// queue. Dropping the debouncer cancels the pending timer with no
/// delivery.
pub struct SearchDebouncer {
    quiet_period: Duration,
    tx: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Create a debouncer and the receiver its settled queries arrive on.
    pub fn new(quiet_period: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                quiet_period,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Restart the quiet-period timer for a new query value.
    pub fn on_query_change(&mut self, query: String) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let _ = tx.send(query);
        }));
    }

    /// Cancel the pending timer, if any, without delivering.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a timer is currently pending.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
