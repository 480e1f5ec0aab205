//! Console configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `OPSCONSOLE__*` environment
//! variables. Each sub-module represents one configuration section and
//! every field has a default, so an empty source yields a usable config.

pub mod api;
pub mod layout;
pub mod logging;
pub mod session;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::layout::LayoutConfig;
pub use self::logging::LoggingConfig;
pub use self::session::SessionConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root console configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Session lifecycle settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Client storage and download settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Default layout preferences.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Load configuration from a TOML file (optional) and the environment.
    ///
    /// Environment variables use the `OPSCONSOLE` prefix and `__` as the
    /// section separator, e.g. `OPSCONSOLE__API__BASE_URL`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("OPSCONSOLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::configuration("api.base_url must not be empty"));
        }
        if self.session.idle_timeout_minutes == 0 {
            return Err(AppError::configuration(
                "session.idle_timeout_minutes must be greater than zero",
            ));
        }
        if self.storage.archive_name.trim().is_empty() {
            return Err(AppError::configuration(
                "storage.archive_name must not be empty",
            ));
        }
        Ok(())
    }
}
