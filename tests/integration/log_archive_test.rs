//! Integration tests for log archive download and selected-file search.

mod helpers;

use opsconsole_cli::context::views;
use opsconsole_core::ErrorKind;
use opsconsole_core::types::{AgentId, RegionId};
use serde_json::json;

#[tokio::test]
async fn test_zip_download_lands_in_download_dir() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");
    console.ctx.open_view(views::ARCHIVE_LOG).unwrap();
    console
        .backend
        .push_bytes(200, b"PK\x03\x04zip-bytes", Some("application/zip"));

    let region = RegionId::new("emea");
    let saved = console
        .ctx
        .logs
        .zip_files(
            &AgentId::new("edge-1"),
            vec!["app.log".to_string(), "gc.log".to_string()],
            Some(&region),
        )
        .await
        .unwrap();

    assert_eq!(saved.path, console.downloads().join("logs.zip"));
    assert_eq!(std::fs::read(&saved.path).unwrap(), b"PK\x03\x04zip-bytes");

    let request = console.backend.last_request().unwrap();
    assert_eq!(request.url.path(), "/logs/zip/edge-1");
    assert_eq!(request.query_param("region").as_deref(), Some("emea"));
    assert_eq!(request.body, Some(json!(["app.log", "gc.log"])));
    assert_eq!(request.header("authorization"), Some("Bearer jwt"));
}

#[tokio::test]
async fn test_html_instead_of_zip_saves_nothing() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");
    console
        .backend
        .push_bytes(200, b"<html>login</html>", Some("text/html; charset=utf-8"));

    let err = console
        .ctx
        .logs
        .zip_files(&AgentId::new("edge-1"), "app.log", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidContentType);
    assert!(!console.downloads().join("logs.zip").exists());
}

#[tokio::test]
async fn test_search_selected_validates_before_network() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");

    let err = console
        .ctx
        .logs
        .search_selected(&AgentId::new("edge-1"), "  ", &["app.log".to_string()], None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(console.backend.request_count(), 0);
}

#[tokio::test]
async fn test_archive_failure_uses_fallback_message() {
    let console = helpers::TestConsole::new();
    console.sign_in("jwt");
    console.backend.push_response(500, "", None);

    let err = console
        .ctx
        .logs
        .zip_files(&AgentId::new("edge-1"), "app.log", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.to_string(), "Error downloading log file");
}
