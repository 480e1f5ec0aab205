//! Normalized transport failures and their mapping to [`AppError`].

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;

use super::backend::BackendError;
use super::request::ApiResponse;

/// Longest plain-text error body surfaced verbatim.
const MAX_TEXT_MESSAGE: usize = 512;

/// A failed exchange, normalized so every caller sees the same shape.
#[derive(Debug, Error)]
pub struct HttpFailure {
    /// Status code, absent when no response arrived.
    pub status: Option<StatusCode>,
    /// Message extracted from the backend's error body.
    pub backend_message: Option<String>,
    /// Generic description used when the backend gave no message.
    pub detail: String,
    /// Underlying transport error.
    #[source]
    pub source: Option<BackendError>,
}

impl HttpFailure {
    /// Normalize a non-success response.
    pub fn from_response(response: &ApiResponse) -> Self {
        Self {
            status: Some(response.status),
            backend_message: extract_message(response),
            detail: format!(
                "Request failed with status code {}",
                response.status.as_u16()
            ),
            source: None,
        }
    }

    /// Normalize a request that never produced a response.
    pub fn network(err: BackendError) -> Self {
        Self {
            status: None,
            backend_message: None,
            detail: err.message.clone(),
            source: Some(err),
        }
    }

    /// Human-readable message: the backend's, else the generic one.
    pub fn message(&self) -> &str {
        self.backend_message.as_deref().unwrap_or(&self.detail)
    }

    /// Whether the backend rejected the session (401 or 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.status,
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Convert into the public error, using `fallback` when the backend
    /// supplied no message.
    pub fn into_app_error(self, fallback: &str) -> AppError {
        let status = self.status.map(|s| s.as_u16());
        if status.is_none() {
            return AppError::Transport {
                message: fallback.to_string(),
                source: Some(Box::new(self)),
            };
        }

        let auth_failure = self.is_auth_failure();
        let message = self
            .backend_message
            .unwrap_or_else(|| fallback.to_string());
        if auth_failure {
            AppError::auth(status, message)
        } else {
            AppError::service(status, message)
        }
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts a JSON object carrying `message` (or `error`), a bare JSON
/// string, or a short plain-text body. HTML error pages are ignored.
pub fn extract_message(response: &ApiResponse) -> Option<String> {
    let body = response.body.as_ref();
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        let candidate = match &value {
            Value::Object(map) => map
                .get("message")
                .and_then(Value::as_str)
                .or_else(|| map.get("error").and_then(Value::as_str)),
            Value::String(text) => Some(text.as_str()),
            _ => None,
        };
        return candidate
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
    }

    let is_html = response
        .content_type()
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("text/html"));
    if is_html {
        return None;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() || text.len() > MAX_TEXT_MESSAGE || text.starts_with('<') {
        None
    } else {
        Some(text.to_string())
    }
}

/// Rewraps transport results with a per-operation fallback message.
pub trait FailureExt<T> {
    /// Map a failure to [`AppError`], preferring the backend's message.
    fn or_fallback(self, fallback: &str) -> AppResult<T>;
}

impl<T> FailureExt<T> for Result<T, HttpFailure> {
    fn or_fallback(self, fallback: &str) -> AppResult<T> {
        self.map_err(|failure| {
            error!(
                status = ?failure.status.map(|s| s.as_u16()),
                error = %failure.message(),
                "{fallback}"
            );
            failure.into_app_error(fallback)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use opsconsole_core::ErrorKind;
    use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

    fn response(status: u16, body: &'static str, content_type: Option<&'static str>) -> ApiResponse {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        ApiResponse::new(
            StatusCode::from_u16(status).unwrap(),
            headers,
            Bytes::from_static(body.as_bytes()),
        )
    }

    #[test]
    fn test_message_field_preferred() {
        let r = response(400, r#"{"message":"Agent already exists","error":"Bad"}"#, None);
        assert_eq!(extract_message(&r).as_deref(), Some("Agent already exists"));
    }

    #[test]
    fn test_error_field_used_when_no_message() {
        let r = response(500, r#"{"error":"Internal Server Error"}"#, None);
        assert_eq!(extract_message(&r).as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn test_plain_text_body() {
        let r = response(401, "Invalid credentials", Some("text/plain"));
        assert_eq!(extract_message(&r).as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_html_body_ignored() {
        let r = response(502, "<html>Bad Gateway</html>", Some("text/html; charset=utf-8"));
        assert_eq!(extract_message(&r), None);
    }

    #[test]
    fn test_fallback_when_backend_silent() {
        let failure = HttpFailure::from_response(&response(500, "", None));
        let err = failure.into_app_error("Error fetching servers");
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.to_string(), "Error fetching servers");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_forbidden_maps_to_auth() {
        let failure = HttpFailure::from_response(&response(403, r#"{"message":"Forbidden"}"#, None));
        let err = failure.into_app_error("Error fetching regions");
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.to_string(), "Forbidden");
    }

    #[test]
    fn test_network_failure_uses_fallback() {
        let failure = HttpFailure::network(BackendError::new("Network Error: refused"));
        assert_eq!(failure.message(), "Network Error: refused");
        let err = failure.into_app_error("Error fetching logs");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "Error fetching logs");
    }
}
