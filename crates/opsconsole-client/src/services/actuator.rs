//! Backend health and telemetry (`/actuator`, `/request`, `/audits`).

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;

use crate::transport::{ApiPath, FailureExt, RequestOptions, Transport};

#[derive(Debug, Deserialize)]
struct MetricResponse {
    #[serde(default)]
    measurements: Vec<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    value: f64,
}

/// Read-only backend monitoring.
#[derive(Debug, Clone)]
pub struct ActuatorService {
    transport: Arc<Transport>,
}

impl ActuatorService {
    /// Create the service over a shared transport.
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Health document as reported by the backend.
    pub async fn health(&self) -> AppResult<Value> {
        self.transport
            .get(&ApiPath::new("/actuator/health"), RequestOptions::new())
            .await
            .or_fallback("Error fetching health status")?
            .json_or_null()
    }

    /// Process uptime in seconds.
    pub async fn uptime(&self) -> AppResult<f64> {
        let metric: MetricResponse = self
            .transport
            .get(
                &ApiPath::new("/actuator/metrics/process.uptime"),
                RequestOptions::new(),
            )
            .await
            .or_fallback("Error fetching uptime")?
            .json()?;

        metric
            .measurements
            .first()
            .map(|m| m.value)
            .ok_or_else(|| AppError::serialization("Uptime measurement missing from response"))
    }

    /// Recent HTTP request statistics.
    pub async fn requests(&self) -> AppResult<Value> {
        self.transport
            .get(&ApiPath::new("/request"), RequestOptions::new())
            .await
            .or_fallback("Error fetching request data")?
            .json_or_null()
    }

    /// Audit events.
    pub async fn audits(&self) -> AppResult<Value> {
        self.transport
            .get(&ApiPath::new("/audits"), RequestOptions::new())
            .await
            .or_fallback("Error fetching audit data")?
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

    fn service() -> (ActuatorService, Arc<MockBackend>) {
        let backend = Arc::new(MockBackend::new());
        let transport = session_transport(
            backend.clone(),
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingNavigator::new()),
        );
        (ActuatorService::new(transport), backend)
    }

    #[tokio::test]
    async fn test_uptime_reads_first_measurement() {
        let (actuator, backend) = service();
        backend.push_json(
            200,
            json!({
                "name": "process.uptime",
                "measurements": [{"statistic": "VALUE", "value": 3600.5}]
            }),
        );

        assert_eq!(actuator.uptime().await.unwrap(), 3600.5);
        assert_eq!(
            backend.last_request().unwrap().url.path(),
            "/actuator/metrics/process.uptime"
        );
    }

    #[tokio::test]
    async fn test_uptime_without_measurements() {
        let (actuator, backend) = service();
        backend.push_json(200, json!({"name": "process.uptime", "measurements": []}));

        let err = actuator.uptime().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn test_health_and_audit_fallbacks() {
        let (actuator, backend) = service();
        backend.push_json(200, json!({"status": "UP"}));
        backend.push_network_error("timeout");

        assert_eq!(actuator.health().await.unwrap()["status"], "UP");
        let err = actuator.audits().await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching audit data");
    }
}
