//! Monitored services (`api/services`).

use std::sync::Arc;

use serde_json::Value;

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{Record, ServiceId};

use crate::transport::{ApiPath, FailureExt, RequestOptions, Transport};

const BASE: &str = "api/services";

/// Monitored service catalogue.
#[derive(Debug, Clone)]
pub struct ServiceService {
    transport: Arc<Transport>,
}

impl ServiceService {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, payload: Record) -> AppResult<Value> {
        self.transport
            .post(&ApiPath::new(BASE).join("register"), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Error creating service")?
            .json_or_null()
    }

    pub async fn list(&self) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(BASE), RequestOptions::new())
            .await
            .or_fallback("Error fetching services")?
            .json()
    }

    pub async fn get(&self, id: &ServiceId) -> AppResult<Record> {
        self.transport
            .get(&ApiPath::new(BASE).join(id), RequestOptions::new())
            .await
            .or_fallback("Error fetching service")?
            .json()
    }

    pub async fn update(&self, id: &ServiceId, payload: Record) -> AppResult<Value> {
        self.transport
            .put(&ApiPath::new(BASE).join(id), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Error updating service")?
            .json_or_null()
    }

    /// Unlike the other inventories, services are deleted at `{id}` directly.
    pub async fn delete(&self, id: &ServiceId) -> AppResult<Value> {
        self.transport
            .delete(&ApiPath::new(BASE).join(id), RequestOptions::new())
            .await
            .or_fallback("Error deleting service")?
            .json_or_null()
    }
}
