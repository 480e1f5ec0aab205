//! View routing guarded by authentication state.
//!
//! [`Router`] owns the current location. Every navigation, including the
//! redirect issued by the transport after a rejected session, goes through
//! [`RouteGuard::evaluate`].

pub mod guard;
pub mod routes;
pub mod session;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::{debug, info, warn};

use opsconsole_core::config::SessionConfig;
use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::navigator::Navigator;
use opsconsole_core::traits::session::AuthenticationState;

pub use self::guard::{GuardDecision, RouteGuard};
pub use self::routes::{ROUTES, Route, find_route, normalize_path};
pub use self::session::StoredSession;

/// Where a navigation ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// The requested view was entered.
    Arrived { location: String },
    /// The guard sent the user elsewhere.
    Redirected { requested: String, location: String },
}

impl Navigation {
    /// Final location.
    pub fn location(&self) -> &str {
        match self {
            Self::Arrived { location } | Self::Redirected { location, .. } => location,
        }
    }

    /// Whether the requested view was entered.
    pub fn arrived(&self) -> bool {
        matches!(self, Self::Arrived { .. })
    }
}

/// Console router.
pub struct Router {
    auth: Arc<dyn AuthenticationState>,
    guard: RouteGuard,
    location: Mutex<String>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("guard", &self.guard)
            .field("location", &self.location())
            .finish()
    }
}

impl Router {
    /// Create a router positioned at the login view.
    pub fn new(auth: Arc<dyn AuthenticationState>, config: &SessionConfig) -> Self {
        let guard = RouteGuard::from_config(config);
        let location = Mutex::new(guard.entry_point().to_string());
        Self {
            auth,
            guard,
            location,
        }
    }

    /// Current location.
    pub fn location(&self) -> String {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The guard this router applies.
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    /// Guard outcome for `target` without moving.
    pub fn check(&self, target: &str) -> AppResult<GuardDecision> {
        let route = find_route(target)
            .ok_or_else(|| AppError::validation(format!("No view matches '{target}'")))?;
        Ok(self.guard.evaluate(route, self.auth.is_authenticated()))
    }

    /// Navigate to `target`, following at most one guard redirect.
    pub fn navigate(&self, target: &str) -> AppResult<Navigation> {
        let requested = find_route(target)
            .ok_or_else(|| AppError::validation(format!("No view matches '{target}'")))?;

        let navigation = match self.check(requested.path)? {
            GuardDecision::Proceed => Navigation::Arrived {
                location: requested.path.to_string(),
            },
            GuardDecision::Redirect(location) => {
                // Guard redirect targets never redirect again.
                info!(requested = requested.path, redirect = %location, "Navigation redirected");
                Navigation::Redirected {
                    requested: requested.path.to_string(),
                    location,
                }
            }
        };

        debug!(location = navigation.location(), "Location changed");
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) =
            navigation.location().to_string();
        Ok(navigation)
    }

    /// Navigate to `target` and fail unless the view was entered.
    pub fn enter(&self, target: &str) -> AppResult<()> {
        match self.navigate(target)? {
            Navigation::Arrived { .. } => Ok(()),
            Navigation::Redirected { requested, location } => Err(AppError::auth(
                None,
                format!("Sign in to open {requested} (redirected to {location})"),
            )),
        }
    }
}

impl Navigator for Router {
    fn redirect(&self, path: &str) {
        if let Err(e) = self.navigate(path) {
            warn!(path, error = %e, "Redirect target is not a known view");
        }
    }
}
