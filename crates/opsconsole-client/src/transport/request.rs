//! Request and response values exchanged with the backend.

use std::fmt;

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;

/// Backend path made of raw segments.
///
/// Segments are percent-encoded when the path is resolved against the base
/// address, so ids and file names may contain any character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Parse a static route such as `"api/agents"` or `"/logs/filter"`.
    pub fn new(route: &str) -> Self {
        Self {
            segments: route
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Append one raw segment (not split on `/`).
    pub fn join(mut self, segment: impl AsRef<str>) -> Self {
        self.segments.push(segment.as_ref().to_string());
        self
    }

    /// Raw segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl From<&str> for ApiPath {
    fn from(route: &str) -> Self {
        Self::new(route)
    }
}

/// How the caller intends to consume the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// JSON document.
    #[default]
    Json,
    /// Raw bytes (archives, attachments).
    Binary,
    /// Plain text.
    Text,
}

impl ResponseType {
    /// `Accept` header sent for this response type.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Json => "application/json, text/plain, */*",
            Self::Binary => "*/*",
            Self::Text => "text/plain, */*",
        }
    }
}

/// Per-call options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// Expected response body type.
    pub response_type: ResponseType,
}

impl RequestOptions {
    /// Options with no query and a JSON response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when `value` is present.
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Set the expected response type.
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }
}

/// A fully resolved request as handed to the middleware chain and backend.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Expected response body type.
    pub response_type: ResponseType,
}

impl ApiRequest {
    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// First query parameter named `name`.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// A backend response with its body fully read.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body.
    pub body: Bytes,
}

impl ApiResponse {
    /// Build a response value.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Declared `Content-Type`, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| AppError::Serialization {
            message: format!("Unexpected response body (status {}): {e}", self.status),
            source: Some(e),
        })
    }

    /// Decode the body as JSON, treating an empty body as `null`.
    pub fn json_or_null(&self) -> AppResult<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        self.json()
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_parsing_ignores_slashes() {
        let path = ApiPath::new("/api//agents/").join("status").join("7");
        assert_eq!(path.segments(), ["api", "agents", "status", "7"]);
        assert_eq!(path.to_string(), "/api/agents/status/7");
    }

    #[test]
    fn test_join_keeps_slash_in_segment() {
        let path = ApiPath::new("logs").join("a/b.log");
        assert_eq!(path.segments().len(), 2);
    }

    #[test]
    fn test_query_opt_skips_none() {
        let options = RequestOptions::new()
            .query("date", "2024-01-31")
            .query_opt("region", None::<&str>);
        assert_eq!(options.query, vec![("date".to_string(), "2024-01-31".to_string())]);
    }

    #[test]
    fn test_empty_body_is_null() {
        let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::new());
        assert_eq!(response.json_or_null().unwrap(), Value::Null);
    }
}
