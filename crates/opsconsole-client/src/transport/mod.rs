//! HTTP transport with an explicit middleware chain.
//!
//! One [`Transport`] is shared by every service. It resolves paths against
//! a fixed base address, sets the JSON content type, runs the request hooks,
//! dispatches through an [`HttpBackend`], normalizes failures into
//! [`HttpFailure`], and runs the response hooks.

pub mod backend;
pub mod failure;
pub mod hooks;
pub mod request;

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::navigator::Navigator;
use opsconsole_core::traits::storage::KeyValueStore;

pub use self::backend::{BackendError, HttpBackend, ReqwestBackend};
pub use self::failure::{FailureExt, HttpFailure};
pub use self::hooks::{AuthFailureHook, BearerTokenHook, RequestHook, ResponseHook};
pub use self::request::{ApiPath, ApiRequest, ApiResponse, RequestOptions, ResponseType};

/// Shared HTTP client bound to one backend base address.
pub struct Transport {
    base_url: Url,
    backend: Arc<dyn HttpBackend>,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("request_hooks", &self.request_hooks.len())
            .field("response_hooks", &self.response_hooks.len())
            .finish()
    }
}

/// Builder for [`Transport`].
pub struct TransportBuilder {
    base_url: String,
    backend: Arc<dyn HttpBackend>,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl TransportBuilder {
    /// Append a request hook.
    pub fn request_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.request_hooks.push(hook);
        self
    }

    /// Append a response hook.
    pub fn response_hook(mut self, hook: Arc<dyn ResponseHook>) -> Self {
        self.response_hooks.push(hook);
        self
    }

    /// Install the session middleware: bearer token injection and
    /// clear-and-redirect on 401/403.
    pub fn with_session_middleware(
        self,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        entry_point: &str,
    ) -> Self {
        self.request_hook(Arc::new(BearerTokenHook::new(Arc::clone(&store))))
            .response_hook(Arc::new(AuthFailureHook::new(store, navigator, entry_point)))
    }

    /// Validate the base address and build the transport.
    pub fn build(self) -> AppResult<Transport> {
        let base_url = Url::parse(self.base_url.trim()).map_err(|e| {
            AppError::configuration(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Base URL '{}' cannot carry a path",
                self.base_url
            )));
        }

        Ok(Transport {
            base_url,
            backend: self.backend,
            request_hooks: self.request_hooks,
            response_hooks: self.response_hooks,
        })
    }
}

impl Transport {
    /// Start building a transport for `base_url`.
    pub fn builder(base_url: impl Into<String>, backend: Arc<dyn HttpBackend>) -> TransportBuilder {
        TransportBuilder {
            base_url: base_url.into(),
            backend,
            request_hooks: Vec::new(),
            response_hooks: Vec::new(),
        }
    }

    /// The configured base address.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` and `query` against the base address.
    pub fn resolve(&self, path: &ApiPath, query: &[(String, String)]) -> Result<Url, HttpFailure> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                HttpFailure::network(BackendError::new(format!(
                    "Base URL '{}' cannot carry a path",
                    self.base_url
                )))
            })?;
            segments.pop_if_empty();
            segments.extend(path.segments());
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// Run the full request pipeline.
    pub async fn send(
        &self,
        method: Method,
        path: &ApiPath,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, HttpFailure> {
        let url = self.resolve(path, &options.query)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(options.response_type.accept()),
        );

        let mut request = ApiRequest {
            method,
            url,
            headers,
            body,
            response_type: options.response_type,
        };
        for hook in &self.request_hooks {
            hook.before_send(&mut request);
        }

        debug!(method = %request.method, url = %request.url, "Dispatching request");

        let failure = match self.backend.execute(request).await {
            Ok(response) if response.status.is_success() => {
                debug!(status = response.status.as_u16(), "Request succeeded");
                for hook in &self.response_hooks {
                    hook.on_success(&response);
                }
                return Ok(response);
            }
            Ok(response) => HttpFailure::from_response(&response),
            Err(err) => HttpFailure::network(err),
        };

        debug!(
            status = ?failure.status.map(|s| s.as_u16()),
            error = %failure.message(),
            "Request failed"
        );
        for hook in &self.response_hooks {
            hook.on_failure(&failure);
        }
        Err(failure)
    }

    /// `GET path`.
    pub async fn get(
        &self,
        path: &ApiPath,
        options: RequestOptions,
    ) -> Result<ApiResponse, HttpFailure> {
        self.send(Method::GET, path, None, options).await
    }

    /// `POST path` with an optional JSON body.
    pub async fn post(
        &self,
        path: &ApiPath,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, HttpFailure> {
        self.send(Method::POST, path, body, options).await
    }

    /// `PUT path` with an optional JSON body.
    pub async fn put(
        &self,
        path: &ApiPath,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, HttpFailure> {
        self.send(Method::PUT, path, body, options).await
    }

    /// `PATCH path` with an optional JSON body.
    pub async fn patch(
        &self,
        path: &ApiPath,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, HttpFailure> {
        self.send(Method::PATCH, path, body, options).await
    }

    /// `DELETE path`.
    pub async fn delete(
        &self,
        path: &ApiPath,
        options: RequestOptions,
    ) -> Result<ApiResponse, HttpFailure> {
        self.send(Method::DELETE, path, None, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockBackend, RecordingNavigator};
    use opsconsole_core::keys;
    use opsconsole_storage::MemoryStore;
    use serde_json::json;

    struct Fixture {
        backend: Arc<MockBackend>,
        store: Arc<MemoryStore>,
        navigator: Arc<RecordingNavigator>,
        transport: Transport,
    }

    fn fixture(base: &str) -> Fixture {
        let backend = Arc::new(MockBackend::new());
        let store = Arc::new(MemoryStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let transport = Transport::builder(base, backend.clone())
            .with_session_middleware(store.clone(), navigator.clone(), "/")
            .build()
            .unwrap();
        Fixture {
            backend,
            store,
            navigator,
            transport,
        }
    }

    #[tokio::test]
    async fn test_bearer_header_when_token_stored() {
        let fx = fixture("http://backend:8080");
        fx.store.set(keys::TOKEN, "abc.def").unwrap();
        fx.backend.push_json(200, json!([]));

        fx.transport
            .get(&ApiPath::new("api/agents"), RequestOptions::new())
            .await
            .unwrap();

        let request = fx.backend.last_request().unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer abc.def"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.url.as_str(), "http://backend:8080/api/agents");
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let fx = fixture("http://backend:8080/");
        fx.backend.push_json(200, json!({}));

        fx.transport
            .get(&ApiPath::new("/actuator/health"), RequestOptions::new())
            .await
            .unwrap();

        let request = fx.backend.last_request().unwrap();
        assert!(request.header("authorization").is_none());
        assert_eq!(request.url.path(), "/actuator/health");
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token_and_redirects_once() {
        let fx = fixture("http://backend:8080");
        fx.store.set(keys::TOKEN, "expired").unwrap();
        fx.backend.push_text(401, "Unauthorized", "text/plain");

        let failure = fx
            .transport
            .get(&ApiPath::new("api/regions"), RequestOptions::new())
            .await
            .unwrap_err();

        assert!(failure.is_auth_failure());
        assert_eq!(fx.store.get(keys::TOKEN).unwrap(), None);
        assert_eq!(fx.navigator.redirects(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_server_error_keeps_token() {
        let fx = fixture("http://backend:8080");
        fx.store.set(keys::TOKEN, "valid").unwrap();
        fx.backend.push_json(500, json!({"message": "boom"}));

        let failure = fx
            .transport
            .delete(&ApiPath::new("roles").join("3"), RequestOptions::new())
            .await
            .unwrap_err();

        assert_eq!(failure.message(), "boom");
        assert_eq!(fx.store.get(keys::TOKEN).unwrap(), Some("valid".to_string()));
        assert!(fx.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_network_error_is_normalized() {
        let fx = fixture("http://backend:8080");
        fx.backend.push_network_error("connection refused");

        let failure = fx
            .transport
            .get(&ApiPath::new("users"), RequestOptions::new())
            .await
            .unwrap_err();

        assert!(failure.status.is_none());
        assert!(fx.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_segments_and_query_are_encoded() {
        let fx = fixture("http://backend:8080/console");
        fx.backend.push_json(200, json!(null));

        fx.transport
            .patch(
                &ApiPath::new("api/regions/status").join("north east"),
                None,
                RequestOptions::new().query("status", "true"),
            )
            .await
            .unwrap();

        let request = fx.backend.last_request().unwrap();
        assert_eq!(request.url.path(), "/console/api/regions/status/north%20east");
        assert_eq!(request.query_param("status").as_deref(), Some("true"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let backend = Arc::new(MockBackend::new());
        assert!(Transport::builder("not a url", backend.clone()).build().is_err());
        assert!(Transport::builder("mailto:ops@example.com", backend).build().is_err());
    }
}
