//! Database server inventory (`api/serversdb`).

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{Record, ResourceStatus, ServerId};

use crate::transport::{ApiPath, FailureExt, RequestOptions, Transport};

const BASE: &str = "api/serversdb";

/// Database server inventory operations.
#[derive(Debug, Clone)]
pub struct ServerDbService {
    transport: Arc<Transport>,
}

impl ServerDbService {
    /// Create the service over a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// All database servers.
    pub async fn list(&self) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(BASE), RequestOptions::new())
            .await
            .or_fallback("Error fetching servers")?
            .json()
    }

    /// Register a database server.
    pub async fn create(&self, payload: Record) -> AppResult<Value> {
        self.transport
            .post(&ApiPath::new(BASE).join("register"), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Registration failed")?
            .json_or_null()
    }

    /// Replace a server's attributes.
    pub async fn update(&self, id: &ServerId, payload: Record) -> AppResult<Value> {
        self.transport
            .put(&ApiPath::new(BASE).join(id), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Update failed")?
            .json_or_null()
    }

    /// Set a server's status. The caller passes the desired new status.
    pub async fn toggle_status(&self, id: &ServerId, status: ResourceStatus) -> AppResult<Value> {
        debug!(server = %id, %status, "Toggling server status");
        self.transport
            .patch(
                &ApiPath::new(BASE).join("status").join(id),
                None,
                RequestOptions::new().query("status", status.as_query_value()),
            )
            .await
            .or_fallback("Error toggling server status")?
            .json_or_null()
    }

    /// Remove a server.
    pub async fn delete(&self, id: &ServerId) -> AppResult<Value> {
        self.transport
            .delete(&ApiPath::new(BASE).join("delete").join(id), RequestOptions::new())
            .await
            .or_fallback("Error deleting server")?
            .json_or_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockBackend, RecordingNavigator, session_transport};
    use opsconsole_storage::MemoryStore;
    use serde_json::json;

    fn service() -> (ServerDbService, Arc<MockBackend>) {
        let backend = Arc::new(MockBackend::new());
        let transport = session_transport(
            backend.clone(),
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingNavigator::new()),
        );
        (ServerDbService::new(transport), backend)
    }

    #[tokio::test]
    async fn test_crud_routes() {
        let (servers, backend) = service();
        backend.push_json(200, json!([]));
        backend.push_json(201, json!({"id": "db-1"}));
        backend.push_json(200, json!({"id": "db-1"}));
        backend.push_json(200, json!({"id": "db-1", "status": true}));
        backend.push_response(204, "", None);

        let id = ServerId::new("db-1");
        servers.list().await.unwrap();
        servers.create(json!({"host": "10.0.0.5"})).await.unwrap();
        servers.update(&id, json!({"host": "10.0.0.6"})).await.unwrap();
        servers.toggle_status(&id, ResourceStatus::Active).await.unwrap();
        assert_eq!(servers.delete(&id).await.unwrap(), Value::Null);

        let calls: Vec<_> = backend
            .requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect();
        assert_eq!(
            calls,
            [
                "GET /api/serversdb",
                "POST /api/serversdb/register",
                "PUT /api/serversdb/db-1",
                "PATCH /api/serversdb/status/db-1",
                "DELETE /api/serversdb/delete/db-1",
            ]
        );
    }

    #[tokio::test]
    async fn test_toggle_fallback() {
        let (servers, backend) = service();
        backend.push_response(500, "<html>oops</html>", Some("text/html"));

        let err = servers
            .toggle_status(&ServerId::new("db-1"), ResourceStatus::Inactive)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error toggling server status");
    }
}
