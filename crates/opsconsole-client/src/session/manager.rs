//! Session lifecycle manager: login flows, logout, activity tracking and
//! user administration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use opsconsole_core::config::SessionConfig;
use opsconsole_core::error::AppError;
use opsconsole_core::keys;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::session::AuthenticationState;
use opsconsole_core::traits::storage::KeyValueStore;
use opsconsole_core::types::{Record, SessionToken, UserId};

use crate::transport::{ApiPath, ApiResponse, FailureExt, RequestOptions, ResponseType, Transport};

use super::timer::InactivityTimer;

const LOGIN_PATH: &str = "/auth/login";
const GOOGLE_LOGIN_PATH: &str = "/auth/login/google";
const REGISTER_PATH: &str = "/auth/register";
const USERS_PATH: &str = "/users";

/// Owns the session token lifecycle.
///
/// The token lives in the shared [`KeyValueStore`] under [`keys::TOKEN`];
/// the transport's bearer hook reads it from there on every request.
///
/// Activity is stamped under [`keys::LAST_ACTIVITY`] so a session left idle
/// past the window is also ended by the next process that opens the store
/// (see [`SessionManager::expire_if_idle`]).
pub struct SessionManager {
    /// Shared transport.
    transport: Arc<Transport>,
    /// Client storage holding the token.
    store: Arc<dyn KeyValueStore>,
    /// Auto-logout countdown.
    timer: InactivityTimer,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("timer", &self.timer)
            .finish()
    }
}

impl SessionManager {
    /// Create a session manager whose inactivity window comes from `config`.
    pub fn new(
        transport: Arc<Transport>,
        store: Arc<dyn KeyValueStore>,
        config: &SessionConfig,
    ) -> Self {
        let expiry_store = Arc::clone(&store);
        let timer = InactivityTimer::new(
            config.idle_timeout(),
            Arc::new(move || {
                info!("Session expired after inactivity");
                for key in [keys::TOKEN, keys::LAST_ACTIVITY] {
                    if let Err(e) = expiry_store.remove(key) {
                        error!(error = %e, key, "Failed to clear expired session state");
                    }
                }
            }),
        );

        Self {
            transport,
            store,
            timer,
        }
    }

    /// Log in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        let response = self
            .transport
            .post(
                &ApiPath::new(LOGIN_PATH),
                Some(json!({ "email": email, "password": password })),
                RequestOptions::new().response_type(ResponseType::Text),
            )
            .await
            .or_fallback("Login failed")?;

        self.establish(&response)
    }

    /// Log in with a token issued by the external identity provider.
    pub async fn login_with_external_provider(
        &self,
        provider_token: &str,
    ) -> AppResult<SessionToken> {
        let response = self
            .transport
            .post(
                &ApiPath::new(GOOGLE_LOGIN_PATH),
                Some(json!({ "token": provider_token })),
                RequestOptions::new().response_type(ResponseType::Text),
            )
            .await
            .or_fallback("Google login failed")?;

        self.establish(&response)
    }

    /// Clear the session. Safe to call when already logged out.
    pub fn logout(&self) -> AppResult<()> {
        self.timer.cancel();
        self.store.remove(keys::TOKEN)?;
        self.store.remove(keys::LAST_ACTIVITY)?;
        info!("Logged out");
        Ok(())
    }

    /// The stored token, if any.
    pub fn get_token(&self) -> AppResult<Option<SessionToken>> {
        Ok(self.store.get(keys::TOKEN)?.and_then(SessionToken::parse))
    }

    /// Record user activity: restarts the inactivity window while a session
    /// is active. A session already idle past the window is ended instead.
    pub fn report_activity(&self) {
        match self.expire_if_idle() {
            Ok(true) => return,
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Failed to check session inactivity"),
        }
        if self.is_authenticated() {
            if let Err(e) = self.touch() {
                warn!(error = %e, "Failed to record session activity");
            }
            self.timer.start();
        }
    }

    /// Log out when the stored session saw no activity for a full window.
    ///
    /// Returns whether the session was ended. A session without an activity
    /// stamp is left alone; its window starts at the next activity.
    pub fn expire_if_idle(&self) -> AppResult<bool> {
        if self.get_token()?.is_none() {
            return Ok(false);
        }
        let Some(stamp) = self.store.get(keys::LAST_ACTIVITY)? else {
            return Ok(false);
        };

        let idle = match DateTime::parse_from_rfc3339(&stamp) {
            Ok(last) => (Utc::now() - last.with_timezone(&Utc))
                .to_std()
                .is_ok_and(|elapsed| elapsed >= self.timer.window()),
            Err(e) => {
                warn!(error = %e, "Unreadable activity stamp; ending session");
                true
            }
        };
        if !idle {
            return Ok(false);
        }

        info!(
            window_secs = self.timer.window().as_secs(),
            "Stored session idle past the inactivity window"
        );
        self.logout()?;
        Ok(true)
    }

    /// The inactivity timer.
    pub fn timer(&self) -> &InactivityTimer {
        &self.timer
    }

    /// All users.
    pub async fn list_users(&self) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(USERS_PATH), RequestOptions::new())
            .await
            .or_fallback("Failed to fetch users")?
            .json()
    }

    /// Delete a user.
    pub async fn delete_user(&self, id: &UserId) -> AppResult<Value> {
        self.transport
            .delete(&ApiPath::new(USERS_PATH).join(id), RequestOptions::new())
            .await
            .or_fallback("Delete failed")?
            .json_or_null()
    }

    /// Replace a user's attributes.
    pub async fn update_user(&self, id: &UserId, payload: Record) -> AppResult<Value> {
        self.transport
            .put(
                &ApiPath::new(USERS_PATH).join(id),
                Some(payload),
                RequestOptions::new(),
            )
            .await
            .or_fallback("Update failed")?
            .json_or_null()
    }

    /// Register a new user account.
    pub async fn register_user(&self, payload: Record) -> AppResult<Value> {
        self.transport
            .post(&ApiPath::new(REGISTER_PATH), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Registration failed")?
            .json_or_null()
    }

    fn establish(&self, response: &ApiResponse) -> AppResult<SessionToken> {
        let Some(token) = token_from_body(&response.text()) else {
            warn!("Login response carried no token");
            return Err(AppError::auth(None, "Token not found in response"));
        };

        self.store.set(keys::TOKEN, token.expose())?;
        self.touch()?;
        self.timer.start();
        info!("Session established");
        Ok(token)
    }
}

impl SessionManager {
    fn touch(&self) -> AppResult<()> {
        self.store.set(keys::LAST_ACTIVITY, &Utc::now().to_rfc3339())
    }
}

impl AuthenticationState for SessionManager {
    fn is_authenticated(&self) -> bool {
        match self.get_token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                false
            }
        }
    }
}

/// The login endpoints answer with the bare token, a JSON string, or an
/// object carrying a `token` field.
fn token_from_body(body: &str) -> Option<SessionToken> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(token)) => SessionToken::parse(token),
        Ok(Value::Object(map)) => map
            .get("token")
            .and_then(Value::as_str)
            .and_then(SessionToken::parse),
        Ok(_) => None,
        Err(_) => SessionToken::parse(body),
    }
}
