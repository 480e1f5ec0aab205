//! Session lifecycle configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session and navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Inactivity window in minutes before the session is logged out.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Unauthenticated entry point (the login view).
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    /// Default view for authenticated users.
    #[serde(default = "default_landing_path")]
    pub landing_path: String,
}

impl SessionConfig {
    /// Inactivity window as a [`Duration`].
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_minutes * 60)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: default_idle_timeout(),
            entry_point: default_entry_point(),
            landing_path: default_landing_path(),
        }
    }
}

fn default_idle_timeout() -> u64 {
    30
}

fn default_entry_point() -> String {
    "/".to_string()
}

fn default_landing_path() -> String {
    "/home".to_string()
}
