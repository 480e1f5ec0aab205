//! Authentication guard evaluated on every navigation.

use opsconsole_core::config::SessionConfig;

use super::routes::Route;

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may continue to the requested view.
    Proceed,
    /// Navigation must go to this path instead.
    Redirect(String),
}

/// Stateless guard: protected views need a session, and a signed-in user
/// never sees a guest view.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    entry_point: String,
    landing_path: String,
}

impl RouteGuard {
    /// Guard redirecting to `entry_point` (login) and `landing_path` (home).
    pub fn new(entry_point: impl Into<String>, landing_path: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
            landing_path: landing_path.into(),
        }
    }

    /// Guard using the configured paths.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.entry_point, &config.landing_path)
    }

    /// Login view path.
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Default view for signed-in users.
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Decide whether navigation to `route` may proceed.
    pub fn evaluate(&self, route: &Route, authenticated: bool) -> GuardDecision {
        if route.requires_auth && !authenticated {
            return GuardDecision::Redirect(self.entry_point.clone());
        }
        if route.guest && authenticated {
            return GuardDecision::Redirect(self.landing_path.clone());
        }
        GuardDecision::Proceed
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
