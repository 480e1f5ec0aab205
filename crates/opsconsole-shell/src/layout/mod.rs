//! Layout preferences and menu state.
//!
//! Preferences (`primary`, `surface`, `darkTheme`) are written through to
//! client storage on every change and hydrated once when the store opens.
//! Menu and sidebar flags live only for the session.

pub mod state;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use opsconsole_core::config::LayoutConfig;
use opsconsole_core::error::AppError;
use opsconsole_core::keys;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::storage::KeyValueStore;

pub use self::state::LayoutState;

/// Primary colour restored by `set_primary(None)`.
pub const DEFAULT_PRIMARY: &str = "teal";
/// Surface palette restored by `set_surface(None)`.
pub const DEFAULT_SURFACE: &str = "soho";
/// Class applied to the document root in dark mode.
pub const DARK_CLASS: &str = "app-dark";
/// Viewports wider than this toggle the desktop sidebar.
pub const DESKTOP_BREAKPOINT: u32 = 991;

/// How the main menu is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    /// Always visible on desktop.
    #[default]
    Static,
    /// Slides over the content.
    Overlay,
}

impl fmt::Display for MenuMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Overlay => write!(f, "overlay"),
        }
    }
}

impl FromStr for MenuMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "overlay" => Ok(Self::Overlay),
            other => Err(AppError::validation(format!(
                "Unknown menu mode '{other}' (expected static or overlay)"
            ))),
        }
    }
}

/// Durable theme preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreferences {
    pub preset: String,
    pub primary: String,
    pub surface: String,
    pub dark_theme: bool,
    pub menu_mode: MenuMode,
}

impl LayoutPreferences {
    /// Defaults before anything is hydrated from storage.
    pub fn from_config(config: &LayoutConfig) -> AppResult<Self> {
        Ok(Self {
            preset: config.preset.clone(),
            primary: config.primary.clone(),
            surface: config.surface.clone(),
            dark_theme: false,
            menu_mode: config.menu_mode.parse().map_err(|e: AppError| {
                AppError::configuration(format!("layout.menu_mode: {e}"))
            })?,
        })
    }
}

/// Layout state backed by client storage.
#[derive(Debug)]
pub struct LayoutStore {
    store: Arc<dyn KeyValueStore>,
    config: LayoutPreferences,
    state: LayoutState,
}

impl LayoutStore {
    /// Open the store, hydrating persisted preferences over `defaults`.
    pub fn open(store: Arc<dyn KeyValueStore>, defaults: &LayoutConfig) -> AppResult<Self> {
        let mut config = LayoutPreferences::from_config(defaults)?;

        if store.get(keys::DARK_THEME)?.as_deref() == Some("true") {
            config.dark_theme = true;
        }
        if let Some(primary) = store.get(keys::PRIMARY)?.filter(|v| !v.is_empty()) {
            config.primary = primary;
        }
        if let Some(surface) = store.get(keys::SURFACE)?.filter(|v| !v.is_empty()) {
            config.surface = surface;
        }
        debug!(
            primary = %config.primary,
            surface = %config.surface,
            dark = config.dark_theme,
            "Layout hydrated"
        );

        Ok(Self {
            store,
            config,
            state: LayoutState::default(),
        })
    }

    /// Durable preferences.
    pub fn config(&self) -> &LayoutPreferences {
        &self.config
    }

    /// Ephemeral menu state.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn primary(&self) -> &str {
        &self.config.primary
    }

    pub fn surface(&self) -> &str {
        &self.config.surface
    }

    pub fn is_dark_theme(&self) -> bool {
        self.config.dark_theme
    }

    /// Set the primary colour; `None` or blank restores the default.
    pub fn set_primary(&mut self, value: Option<&str>) -> AppResult<()> {
        self.config.primary = non_blank(value).unwrap_or(DEFAULT_PRIMARY).to_string();
        self.store.set(keys::PRIMARY, &self.config.primary)
    }

    /// Set the surface palette; `None` or blank restores the default.
    pub fn set_surface(&mut self, value: Option<&str>) -> AppResult<()> {
        self.config.surface = non_blank(value).unwrap_or(DEFAULT_SURFACE).to_string();
        self.store.set(keys::SURFACE, &self.config.surface)
    }

    /// Flip dark mode and persist the new value.
    pub fn toggle_dark_mode(&mut self) -> AppResult<bool> {
        self.config.dark_theme = !self.config.dark_theme;
        self.store.set(
            keys::DARK_THEME,
            if self.config.dark_theme { "true" } else { "false" },
        )?;
        Ok(self.config.dark_theme)
    }

    /// Not persisted.
    pub fn set_preset(&mut self, preset: impl Into<String>) {
        self.config.preset = preset.into();
    }

    /// Not persisted.
    pub fn set_menu_mode(&mut self, mode: MenuMode) {
        self.config.menu_mode = mode;
    }

    pub fn set_sidebar_state(&mut self, collapsed: bool) {
        self.state.sidebar_collapsed = collapsed;
    }

    pub fn set_active_menu_item(&mut self, item: impl Into<String>) {
        self.state.active_menu_item = Some(item.into());
    }

    /// Flip one sub-menu open or closed. Returns the new state.
    pub fn toggle_sub_menu(&mut self, key: &str) -> bool {
        let open = self.state.active_sub_menu_items.entry(key.to_string()).or_default();
        *open = !*open;
        *open
    }

    /// Menu button pressed on a viewport `viewport_width` pixels wide.
    pub fn on_menu_toggle(&mut self, viewport_width: u32) {
        if self.config.menu_mode == MenuMode::Overlay {
            self.state.overlay_menu_active = !self.state.overlay_menu_active;
        }

        if viewport_width > DESKTOP_BREAKPOINT {
            self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
        } else {
            self.state.static_menu_mobile_active = !self.state.static_menu_mobile_active;
        }
    }

    /// Close every transient menu.
    pub fn reset_menu(&mut self) {
        self.state.reset_menu();
    }

    /// Whether an overlay or mobile menu is showing.
    pub fn is_sidebar_active(&self) -> bool {
        self.state.overlay_menu_active || self.state.static_menu_mobile_active
    }

    /// CSS custom properties applied to the document root.
    pub fn css_variables(&self) -> [(&'static str, &str); 2] {
        [
            ("--primary-color", self.config.primary.as_str()),
            ("--surface-color", self.config.surface.as_str()),
        ]
    }

    /// Root class for the current theme.
    pub fn theme_class(&self) -> Option<&'static str> {
        self.config.dark_theme.then_some(DARK_CLASS)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsconsole_storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn open(store: Arc<MemoryStore>) -> LayoutStore {
        LayoutStore::open(store, &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_defaults_without_stored_preferences() {
        let layout = open(Arc::new(MemoryStore::new()));
        assert_eq!(layout.primary(), "teal");
        assert_eq!(layout.surface(), "soho");
        assert_eq!(layout.config().preset, "Aura");
        assert!(!layout.is_dark_theme());
        assert_eq!(layout.theme_class(), None);
    }

    #[test]
    fn test_hydrates_stored_preferences() {
        let store = Arc::new(MemoryStore::with_entries([
            (keys::DARK_THEME, "true"),
            (keys::PRIMARY, "indigo"),
            (keys::SURFACE, "zinc"),
        ]));
        let layout = open(store);
        assert!(layout.is_dark_theme());
        assert_eq!(layout.primary(), "indigo");
        assert_eq!(layout.surface(), "zinc");
        assert_eq!(layout.theme_class(), Some("app-dark"));
    }

    #[test]
    fn test_dark_flag_must_be_exactly_true() {
        let store = Arc::new(MemoryStore::with_entries([(keys::DARK_THEME, "TRUE")]));
        assert!(!open(store).is_dark_theme());
    }

    #[test]
    fn test_set_primary_persists_and_none_restores_default() {
        let store = Arc::new(MemoryStore::new());
        let mut layout = open(store.clone());

        layout.set_primary(Some("blue")).unwrap();
        assert_eq!(store.get(keys::PRIMARY).unwrap().as_deref(), Some("blue"));
        assert_eq!(layout.css_variables()[0], ("--primary-color", "blue"));

        layout.set_primary(None).unwrap();
        assert_eq!(store.get(keys::PRIMARY).unwrap().as_deref(), Some("teal"));
    }

    #[test]
    fn test_toggle_dark_mode_persists_string() {
        let store = Arc::new(MemoryStore::new());
        let mut layout = open(store.clone());

        assert!(layout.toggle_dark_mode().unwrap());
        assert_eq!(store.get(keys::DARK_THEME).unwrap().as_deref(), Some("true"));
        assert!(!layout.toggle_dark_mode().unwrap());
        assert_eq!(store.get(keys::DARK_THEME).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_menu_toggle_by_viewport() {
        let mut layout = open(Arc::new(MemoryStore::new()));

        layout.on_menu_toggle(1280);
        assert!(layout.state().sidebar_collapsed);
        assert!(!layout.is_sidebar_active());

        layout.on_menu_toggle(768);
        assert!(layout.state().static_menu_mobile_active);
        assert!(layout.is_sidebar_active());

        layout.reset_menu();
        assert!(!layout.is_sidebar_active());
        assert!(layout.state().sidebar_collapsed);
    }

    #[test]
    fn test_overlay_mode_toggles_overlay() {
        let mut layout = open(Arc::new(MemoryStore::new()));
        layout.set_menu_mode(MenuMode::Overlay);

        layout.on_menu_toggle(1280);
        assert!(layout.state().overlay_menu_active);
        assert!(layout.is_sidebar_active());
    }

    #[test]
    fn test_preferences_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut layout = LayoutStore::open(
            Arc::new(FileStore::open(&path).unwrap()),
            &LayoutConfig::default(),
        )
        .unwrap();
        layout.set_surface(Some("slate")).unwrap();
        drop(layout);

        let reopened = LayoutStore::open(
            Arc::new(FileStore::open(&path).unwrap()),
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(reopened.surface(), "slate");
    }

    #[test]
    fn test_bad_menu_mode_in_config() {
        let config = LayoutConfig {
            menu_mode: "floating".into(),
            ..LayoutConfig::default()
        };
        let err = LayoutStore::open(Arc::new(MemoryStore::new()), &config).unwrap_err();
        assert_eq!(err.kind(), opsconsole_core::ErrorKind::Configuration);
    }
}
