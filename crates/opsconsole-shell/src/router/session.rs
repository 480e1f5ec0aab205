//! Authentication state read straight from client storage.

use std::sync::Arc;

use tracing::warn;

use opsconsole_core::keys;
use opsconsole_core::traits::session::AuthenticationState;
use opsconsole_core::traits::storage::KeyValueStore;

/// Reports a session whenever a non-blank token is stored.
#[derive(Debug, Clone)]
pub struct StoredSession {
    store: Arc<dyn KeyValueStore>,
}

impl StoredSession {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl AuthenticationState for StoredSession {
    fn is_authenticated(&self) -> bool {
        match self.store.get(keys::TOKEN) {
            Ok(token) => token.is_some_and(|t| !t.trim().is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                false
            }
        }
    }
}
