//! Roles (`/roles`).

use std::sync::Arc;

use serde_json::Value;

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{Record, RoleId};

use crate::transport::{ApiPath, FailureExt, RequestOptions, Transport};

const BASE: &str = "/roles";

/// Role administration.
#[derive(Debug, Clone)]
pub struct RoleService {
    transport: Arc<Transport>,
}

impl RoleService {
    /// Create the service over a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// All roles.
    pub async fn list(&self) -> AppResult<Vec<Record>> {
        self.transport
            .get(&ApiPath::new(BASE), RequestOptions::new())
            .await
            .or_fallback("Failed to fetch roles")?
            .json()
    }

    /// Create a role.
    pub async fn create(&self, payload: Record) -> AppResult<Value> {
        self.transport
            .post(&ApiPath::new(BASE), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Registration failed")?
            .json_or_null()
    }

    /// Replace a role.
    pub async fn update(&self, id: &RoleId, payload: Record) -> AppResult<Value> {
        self.transport
            .put(&ApiPath::new(BASE).join(id), Some(payload), RequestOptions::new())
            .await
            .or_fallback("Update failed")?
            .json_or_null()
    }

    /// Delete a role.
    pub async fn delete(&self, id: &RoleId) -> AppResult<Value> {
        self.transport
            .delete(&ApiPath::new(BASE).join(id), RequestOptions::new())
            .await
            .or_fallback("Delete failed")?
            .json_or_null()
    }
}
