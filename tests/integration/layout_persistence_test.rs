//! Integration tests for layout preferences persisted in client storage.

mod helpers;

use std::sync::Arc;

use opsconsole_core::config::LayoutConfig;
use opsconsole_core::keys;
use opsconsole_core::traits::storage::KeyValueStore;
use opsconsole_shell::LayoutStore;
use opsconsole_storage::FileStore;

#[test]
fn test_primary_survives_restart() {
    let console = helpers::TestConsole::new();

    let mut layout = console.ctx.layout().unwrap();
    layout.set_primary(Some("blue")).unwrap();
    assert_eq!(console.store.get(keys::PRIMARY).unwrap().as_deref(), Some("blue"));

    let reopened = LayoutStore::open(
        Arc::new(FileStore::open(console.state_file()).unwrap()),
        &LayoutConfig::default(),
    )
    .unwrap();
    assert_eq!(reopened.primary(), "blue");
    assert_eq!(reopened.css_variables()[0], ("--primary-color", "blue"));
}

#[test]
fn test_dark_mode_and_token_share_one_store() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");

    let mut layout = console.ctx.layout().unwrap();
    layout.toggle_dark_mode().unwrap();

    let reopened = FileStore::open(console.state_file()).unwrap();
    assert_eq!(reopened.keys().unwrap(), vec!["darkTheme", "token"]);
    assert_eq!(reopened.get(keys::DARK_THEME).unwrap().as_deref(), Some("true"));
}

#[test]
fn test_surface_reset_restores_default() {
    let console = helpers::TestConsole::new();

    let mut layout = console.ctx.layout().unwrap();
    layout.set_surface(Some("zinc")).unwrap();
    layout.set_surface(None).unwrap();

    let reopened = console.ctx.layout().unwrap();
    assert_eq!(reopened.surface(), "soho");
}
