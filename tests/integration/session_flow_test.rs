//! Integration tests for the session lifecycle across transport, router and
//! client storage.

mod helpers;

use std::time::Duration;

use opsconsole_cli::context::views;
use opsconsole_core::ErrorKind;
use opsconsole_core::config::ConsoleConfig;
use opsconsole_core::keys;
use opsconsole_core::traits::session::AuthenticationState;
use opsconsole_core::traits::storage::KeyValueStore;
use opsconsole_storage::FileStore;
use serde_json::json;

#[tokio::test]
async fn test_login_then_authorized_calls() {
    let console = helpers::TestConsole::new();
    console.backend.push_text(200, "jwt-abc", "text/plain");
    console.backend.push_json(200, json!([{"id": 1, "name": "edge-1"}]));

    console.ctx.session.login("ops@example.com", "secret").await.unwrap();
    console.ctx.open_view(views::AGENTS).unwrap();
    let agents = console.ctx.agents.list().await.unwrap();

    assert_eq!(agents.len(), 1);
    let requests = console.backend.requests();
    assert!(requests[0].header("authorization").is_none());
    assert_eq!(requests[1].header("authorization"), Some("Bearer jwt-abc"));
    assert_eq!(console.calls(), ["POST /auth/login", "GET /api/agents"]);
}

#[tokio::test]
async fn test_token_persists_to_state_file() {
    let console = helpers::TestConsole::new();
    console.backend.push_json(200, json!({"token": "jwt-file"}));

    console.ctx.session.login("ops@example.com", "secret").await.unwrap();

    let reopened = FileStore::open(console.state_file()).unwrap();
    assert_eq!(reopened.get(keys::TOKEN).unwrap().as_deref(), Some("jwt-file"));
}

#[tokio::test]
async fn test_login_without_token_is_auth_error() {
    let console = helpers::TestConsole::new();
    console.backend.push_json(200, json!({"user": "ops"}));

    let err = console.ctx.session.login("ops@example.com", "secret").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(console.store.keys().unwrap().is_empty());
    assert!(!console.state_file().exists());
}

#[tokio::test]
async fn test_expired_session_redirects_to_login_once() {
    let console = helpers::TestConsole::new();
    console.sign_in("expired");
    console.ctx.open_view(views::REGIONS).unwrap();
    assert_eq!(console.ctx.router.location(), "/uikit/RegionList");

    console.backend.push_json(401, json!({"message": "Token expired"}));
    let err = console.ctx.regions.list().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.to_string(), "Token expired");
    assert_eq!(console.ctx.router.location(), "/");
    assert!(!console.ctx.session.is_authenticated());

    let err = console.ctx.open_view(views::REGIONS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(console.backend.request_count(), 1);
}

#[tokio::test]
async fn test_guard_sends_signed_in_user_home() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");

    let nav = console.ctx.router.navigate("/").unwrap();
    assert_eq!(nav.location(), "/home");
}

#[tokio::test(start_paused = true)]
async fn test_inactivity_clears_session() {
    let mut config = ConsoleConfig::default();
    config.session.idle_timeout_minutes = 2;
    let console = helpers::TestConsole::with_config(config);
    console.backend.push_text(200, "jwt", "text/plain");

    console.ctx.session.login("ops@example.com", "secret").await.unwrap();

    tokio::time::sleep(Duration::from_secs(90)).await;
    console.ctx.open_view(views::AGENTS).unwrap();

    tokio::time::sleep(Duration::from_secs(100)).await;
    assert!(console.ctx.session.is_authenticated());

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(!console.ctx.session.is_authenticated());
    assert!(console.ctx.open_view(views::AGENTS).is_err());
}

#[tokio::test]
async fn test_idle_session_ends_on_next_invocation() {
    let mut config = ConsoleConfig::default();
    config.session.idle_timeout_minutes = 1;
    let console = helpers::TestConsole::with_config(config);
    console.backend.push_text(200, "jwt", "text/plain");
    console.ctx.session.login("ops@example.com", "secret").await.unwrap();

    // Next invocation within the window keeps the session.
    let next = console.reopen();
    assert!(next.session.is_authenticated());
    next.open_view(views::AGENTS).unwrap();
    drop(next);

    // An hour passes before the invocation after that.
    let stale = chrono::Utc::now() - chrono::Duration::minutes(60);
    console
        .store
        .set(keys::LAST_ACTIVITY, &stale.to_rfc3339())
        .unwrap();

    let later = console.reopen();
    assert!(!later.session.is_authenticated());
    let err = later.open_view(views::AGENTS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);

    let state = FileStore::open(console.state_file()).unwrap();
    assert!(state.get(keys::TOKEN).unwrap().is_none());
    assert!(state.get(keys::LAST_ACTIVITY).unwrap().is_none());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");

    console.ctx.session.logout().unwrap();
    console.ctx.session.logout().unwrap();

    assert!(console.ctx.session.get_token().unwrap().is_none());
}
