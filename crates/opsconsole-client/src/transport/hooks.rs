//! Request/response middleware.
//!
//! Hooks run in registration order. Request hooks may rewrite the outgoing
//! request; response hooks observe the outcome and perform side effects.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{error, warn};

use opsconsole_core::keys;
use opsconsole_core::traits::navigator::Navigator;
use opsconsole_core::traits::storage::KeyValueStore;
use opsconsole_core::types::SessionToken;

use super::failure::HttpFailure;
use super::request::{ApiRequest, ApiResponse};

/// Runs before a request is dispatched.
pub trait RequestHook: Send + Sync + 'static {
    /// Inspect or modify the outgoing request.
    fn before_send(&self, request: &mut ApiRequest);
}

/// Runs after the backend answered or the request failed.
pub trait ResponseHook: Send + Sync + 'static {
    /// Called for every 2xx response.
    fn on_success(&self, _response: &ApiResponse) {}

    /// Called for every normalized failure.
    fn on_failure(&self, failure: &HttpFailure);
}

/// Attaches `Authorization: Bearer <token>` when a session token is stored.
#[derive(Debug, Clone)]
pub struct BearerTokenHook {
    store: Arc<dyn KeyValueStore>,
}

impl BearerTokenHook {
    /// Read tokens from `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn current_token(&self) -> Option<SessionToken> {
        match self.store.get(keys::TOKEN) {
            Ok(raw) => raw.and_then(SessionToken::parse),
            Err(e) => {
                warn!(error = %e, "Failed to read session token; sending request without it");
                None
            }
        }
    }
}

impl RequestHook for BearerTokenHook {
    fn before_send(&self, request: &mut ApiRequest) {
        let Some(token) = self.current_token() else {
            request.headers.remove(AUTHORIZATION);
            return;
        };

        match HeaderValue::from_str(&token.bearer()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!("Stored session token is not a valid header value; ignoring it");
                request.headers.remove(AUTHORIZATION);
            }
        }
    }
}

/// On 401/403: clears the stored token and redirects to the entry point.
pub struct AuthFailureHook {
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    entry_point: String,
}

impl std::fmt::Debug for AuthFailureHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthFailureHook")
            .field("entry_point", &self.entry_point)
            .finish()
    }
}

impl AuthFailureHook {
    /// Create a hook that redirects to `entry_point`.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        entry_point: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            entry_point: entry_point.into(),
        }
    }
}

impl ResponseHook for AuthFailureHook {
    fn on_failure(&self, failure: &HttpFailure) {
        if !failure.is_auth_failure() {
            return;
        }

        warn!(
            status = ?failure.status.map(|s| s.as_u16()),
            "Backend rejected the session; clearing token"
        );
        if let Err(e) = self.store.remove(keys::TOKEN) {
            error!(error = %e, "Failed to clear session token");
        }
        self.navigator.redirect(&self.entry_point);
    }
}
