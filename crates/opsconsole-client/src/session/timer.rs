//! Inactivity auto-logout timer.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Callback invoked when the inactivity window elapses.
pub type ExpiryCallback = Arc<dyn Fn() + Send + Sync>;

/// Single-shot timer that runs a callback after a window of inactivity.
///
/// At most one countdown is pending. Starting again aborts the pending
/// countdown and begins a full window from now.
pub struct InactivityTimer {
    window: Duration,
    on_expire: ExpiryCallback,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for InactivityTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InactivityTimer")
            .field("window", &self.window)
            .field("running", &self.is_running())
            .finish()
    }
}

impl InactivityTimer {
    /// Create an idle timer.
    pub fn new(window: Duration, on_expire: ExpiryCallback) -> Self {
        Self {
            window,
            on_expire,
            pending: Mutex::new(None),
        }
    }

    /// The inactivity window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// (Re)start the countdown. Requires a tokio runtime; outside one the
    /// call is logged and ignored.
    pub fn start(&self) {
        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime available; inactivity timer not started");
            return;
        };

        let window = self.window;
        let on_expire = Arc::clone(&self.on_expire);
        let task = handle.spawn(async move {
            tokio::time::sleep(window).await;
            debug!(window_secs = window.as_secs(), "Inactivity window elapsed");
            on_expire();
        });

        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Abort the pending countdown, if any.
    pub fn cancel(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = pending {
            task.abort();
        }
    }

    /// Whether a countdown is pending.
    pub fn is_running(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for InactivityTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
