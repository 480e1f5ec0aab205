//! Default layout preferences.

use serde::{Deserialize, Serialize};

/// Layout defaults applied before stored preferences are hydrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Theme preset name.
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Primary colour name.
    #[serde(default = "default_primary")]
    pub primary: String,
    /// Surface palette name.
    #[serde(default = "default_surface")]
    pub surface: String,
    /// Menu mode: `"static"` or `"overlay"`.
    #[serde(default = "default_menu_mode")]
    pub menu_mode: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            primary: default_primary(),
            surface: default_surface(),
            menu_mode: default_menu_mode(),
        }
    }
}

fn default_preset() -> String {
    "Aura".to_string()
}

fn default_primary() -> String {
    "teal".to_string()
}

fn default_surface() -> String {
    "soho".to_string()
}

fn default_menu_mode() -> String {
    "static".to_string()
}
