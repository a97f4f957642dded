use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancellation scope shared by a presenter and the fetch tasks it spawns.
///
/// Once cancelled it stays cancelled; a presenter that needs to fetch again
/// after teardown must be rebuilt.
#[derive(Clone)]
pub struct FetchScope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("Fetch scope cancelled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        // Register interest before reading the flag, otherwise a cancel()
        // landing between the two is never observed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

impl Default for FetchScope {
    fn default() -> Self {
        Self::new()
    }
}
