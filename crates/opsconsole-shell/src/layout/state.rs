//! Ephemeral menu and sidebar flags.

use std::collections::BTreeMap;

use serde::Serialize;

/// Session-only UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub static_menu_desktop_inactive: bool,
    pub overlay_menu_active: bool,
    pub profile_sidebar_visible: bool,
    pub config_sidebar_visible: bool,
    pub static_menu_mobile_active: bool,
    pub menu_hover_active: bool,
    pub active_menu_item: Option<String>,
    pub sidebar_collapsed: bool,
    /// Open state per sub-menu key.
    pub active_sub_menu_items: BTreeMap<String, bool>,
}

impl LayoutState {
    /// Close overlay, mobile and hover menus and collapse all sub-menus.
    /// The desktop sidebar and active item are kept.
    pub fn reset_menu(&mut self) {
        self.overlay_menu_active = false;
        self.static_menu_mobile_active = false;
        self.menu_hover_active = false;
        self.active_sub_menu_items.clear();
    }
}
