//! Log-collection agents (`api/agents`).

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{AgentId, Record, RegionId, ResourceStatus};

use crate::transport::{ApiPath, FailureExt, RequestOptions, Transport};

const BASE: &str = "api/agents";

/// Agent registry operations.
#[derive(Debug, Clone)]
pub struct AgentService {
    transport: Arc<Transport>,
}

impl AgentService {
    /// Create the service over a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Register a new agent.
    pub async fn create(&self, payload: Record) -> AppResult<Value> {
        self.transport
            .post(&ApiPath::new(BASE).join("register"), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Registration failed")?
            .json_or_null()
    }

    /// All agents.
    pub async fn list(&self) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(BASE), RequestOptions::new())
            .await
            .or_fallback("Error fetching servers")?
            .json()
    }

    /// One agent.
    pub async fn get(&self, id: &AgentId) -> AppResult<Record> {
        self.transport
            .get(&ApiPath::new(BASE).join(id), RequestOptions::new())
            .await
            .or_fallback("Error fetching server")?
            .json()
    }

    /// Replace an agent's attributes.
    pub async fn update(&self, id: &AgentId, payload: Record) -> AppResult<Value> {
        self.transport
            .put(&ApiPath::new(BASE).join(id), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Update failed")?
            .json_or_null()
    }

    /// Enable or disable an agent.
    pub async fn update_status(&self, id: &AgentId, status: ResourceStatus) -> AppResult<Value> {
        debug!(agent = %id, %status, "Updating agent status");
        self.transport
            .patch(
                &ApiPath::new(BASE).join("status").join(id),
                None,
                RequestOptions::new().query("status", status.as_query_value()),
            )
            .await
            .or_fallback("Error updating server status")?
            .json_or_null()
    }

    /// Agents deployed in a region.
    pub async fn list_by_region(&self, region: &RegionId) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(BASE).join("region").join(region), RequestOptions::new())
            .await
            .or_fallback("Error fetching servers by region")?
            .json()
    }

    /// Remove an agent.
    pub async fn delete(&self, id: &AgentId) -> AppResult<Value> {
        self.transport
            .delete(&ApiPath::new(BASE).join("delete").join(id), RequestOptions::new())
            .await
            .or_fallback("Error deleting agent")?
            .json_or_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockBackend, RecordingNavigator, session_transport};
    use opsconsole_core::ErrorKind;
    use opsconsole_storage::MemoryStore;
    use serde_json::json;

    fn service() -> (AgentService, Arc<MockBackend>) {
        let backend = Arc::new(MockBackend::new());
        let transport = session_transport(
            backend.clone(),
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingNavigator::new()),
        );
        (AgentService::new(transport), backend)
    }

    #[tokio::test]
    async fn test_list_returns_records() {
        let (agents, backend) = service();
        backend.push_json(200, json!([{"id": 1, "name": "edge-1"}, {"id": 2}]));

        let list = agents.list().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["name"], "edge-1");
        assert_eq!(backend.last_request().unwrap().url.path(), "/api/agents");
    }

    #[tokio::test]
    async fn test_create_posts_to_register() {
        let (agents, backend) = service();
        backend.push_json(201, json!({"id": 3}));

        let created = agents.create(json!({"name": "edge-3"})).await.unwrap();
        assert_eq!(created["id"], 3);

        let request = backend.last_request().unwrap();
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.url.path(), "/api/agents/register");
        assert_eq!(request.body, Some(json!({"name": "edge-3"})));
    }

    #[tokio::test]
    async fn test_update_status_sends_query() {
        let (agents, backend) = service();
        backend.push_json(200, json!({"id": 7, "status": false}));

        agents
            .update_status(&AgentId::from(7_i64), ResourceStatus::Inactive)
            .await
            .unwrap();

        let request = backend.last_request().unwrap();
        assert_eq!(request.method, reqwest::Method::PATCH);
        assert_eq!(request.url.path(), "/api/agents/status/7");
        assert_eq!(request.query_param("status").as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_list_by_region_and_delete_routes() {
        let (agents, backend) = service();
        backend.push_json(200, json!([]));
        backend.push_response(200, "", None);

        agents.list_by_region(&RegionId::new("north")).await.unwrap();
        agents.delete(&AgentId::new("5")).await.unwrap();

        let paths: Vec<_> = backend
            .requests()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect();
        assert_eq!(paths, ["/api/agents/region/north", "/api/agents/delete/5"]);
    }

    #[tokio::test]
    async fn test_get_failure_fallback() {
        let (agents, backend) = service();
        backend.push_response(404, "", None);

        let err = agents.get(&AgentId::new("404")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.to_string(), "Error fetching server");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_backend_message_wins_over_fallback() {
        let (agents, backend) = service();
        backend.push_json(409, json!({"message": "Agent name already in use"}));

        let err = agents.create(json!({"name": "dup"})).await.unwrap_err();
        assert_eq!(err.to_string(), "Agent name already in use");
    }
}
