//! Test doubles for the transport seam, shared by unit tests and the
//! workspace integration tests (via the `testutil` feature).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use opsconsole_core::traits::navigator::Navigator;
use opsconsole_core::traits::storage::KeyValueStore;

use crate::transport::{ApiRequest, ApiResponse, BackendError, HttpBackend, Transport};

/// Base address used by [`session_transport`].
pub const TEST_BASE_URL: &str = "http://backend.test";

enum Reply {
    Response(ApiResponse),
    NetworkError(String),
}

/// Scripted [`HttpBackend`]: replies are consumed in order and every
/// request is recorded. An unscripted request gets a 500.
#[derive(Default)]
pub struct MockBackend {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockBackend {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn push_response(&self, status: u16, body: impl Into<Bytes>, content_type: Option<&str>) {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type.and_then(|ct| HeaderValue::from_str(ct).ok()) {
            headers.insert(CONTENT_TYPE, ct);
        }
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Reply::Response(ApiResponse::new(status, headers, body.into())));
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_response(status, body.to_string(), Some("application/json"));
    }

    /// Queue a text response.
    pub fn push_text(&self, status: u16, body: &str, content_type: &str) {
        self.push_response(status, body.to_string(), Some(content_type));
    }

    /// Queue a binary response.
    pub fn push_bytes(&self, status: u16, body: &'static [u8], content_type: Option<&str>) {
        self.push_response(status, Bytes::from_static(body), content_type);
    }

    /// Queue a request that never gets a response.
    pub fn push_network_error(&self, message: &str) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Reply::NetworkError(message.to_string()));
    }

    /// Every request seen so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl HttpBackend for MockBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BackendError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::NetworkError(message)) => Err(BackendError::new(message)),
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Ok(ApiResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    headers,
                    Bytes::from_static(br#"{"message":"No scripted reply"}"#),
                ))
            }
        }
    }
}

/// [`Navigator`] that records every redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// No redirects yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Redirect targets in order.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of redirects.
    pub fn count(&self) -> usize {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

/// Transport at [`TEST_BASE_URL`] with the session middleware installed,
/// redirecting to `/` on auth failures.
///
/// # Panics
///
/// Never in practice; the base address is a valid constant.
pub fn session_transport(
    backend: Arc<MockBackend>,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<RecordingNavigator>,
) -> Arc<Transport> {
    let transport = Transport::builder(TEST_BASE_URL, backend)
        .with_session_middleware(store, navigator, "/")
        .build()
        .expect("test base URL is valid");
    Arc::new(transport)
}
