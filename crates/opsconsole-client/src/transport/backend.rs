//! The network seam: anything that can execute an [`ApiRequest`].

use async_trait::async_trait;
use thiserror::Error;

use opsconsole_core::config::ApiConfig;
use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;

use super::request::{ApiRequest, ApiResponse};

/// The request never produced a response.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    /// Human-readable description.
    pub message: String,
    /// Whether the request hit the configured timeout.
    pub timed_out: bool,
    /// Underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BackendError {
    /// Create a backend error without an underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
            source: None,
        }
    }
}

/// Executes resolved requests. Every status code is a successful execution;
/// only a missing response is an error.
#[async_trait]
pub trait HttpBackend: Send + Sync + 'static {
    /// Send `request` and read the whole response body.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BackendError>;
}

/// [`HttpBackend`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Build a client with the configured timeout and user agent.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BackendError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(ApiResponse::new(status, headers, body))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    let timed_out = err.is_timeout();
    let message = if timed_out {
        "Request timed out".to_string()
    } else {
        format!("Network Error: {err}")
    };
    BackendError {
        message,
        timed_out,
        source: Some(Box::new(err)),
    }
}
