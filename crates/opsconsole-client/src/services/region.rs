//! Regions (`api/regions`).

use std::sync::Arc;

use serde_json::Value;

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{Record, RegionId, ResourceStatus};

use crate::transport::{ApiPath, FailureExt, RequestOptions, Transport};

const BASE: &str = "api/regions";

/// Region administration.
#[derive(Debug, Clone)]
pub struct RegionService {
    transport: Arc<Transport>,
}

impl RegionService {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(BASE), RequestOptions::new())
            .await
            .or_fallback("Error fetching regions")?
            .json()
    }

    pub async fn create(&self, payload: Record) -> AppResult<Value> {
        self.transport
            .post(&ApiPath::new(BASE).join("register"), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Error creating region")?
            .json_or_null()
    }

    pub async fn update(&self, id: &RegionId, payload: Record) -> AppResult<Value> {
        self.transport
            .put(&ApiPath::new(BASE).join(id), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Error updating region")?
            .json_or_null()
    }

    /// Enable or disable a region.
    pub async fn update_status(&self, id: &RegionId, status: ResourceStatus) -> AppResult<Value> {
        self.transport
            .patch(
                &ApiPath::new(BASE).join("status").join(id),
                None,
                RequestOptions::new().query("status", status.as_query_value()),
            )
            .await
            .or_fallback("Error updating region status")?
            .json_or_null()
    }

    pub async fn delete(&self, id: &RegionId) -> AppResult<Value> {
        self.transport
            .delete(&ApiPath::new(BASE).join("delete").join(id), RequestOptions::new())
            .await
            .or_fallback("Delete failed")?
            .json_or_null()
    }
}
