//! Health check handlers.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for container liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of sightings in the document (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sightings_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            sightings_loaded: None,
        }
    }

    /// Create a ready status with the current record count.
    pub fn ready(service: &str, version: &str, sightings: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            sightings_loaded: Some(sightings),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            sightings_loaded: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"wildlife-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Ready means the sightings document can be loaded right now. An empty
/// document is still ready. Probe loads are not counted in the sightings
/// business metrics.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"wildlife-service-shared","version":"0.1.0","sightings_loaded":6}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match state.read_sightings().await {
        Ok(sightings) => {
            let status = HealthStatus::ready(service, version, sightings.len());
            (StatusCode::OK, Json(status)).into_response()
        }
        Err(err) => {
            let status = HealthStatus::not_ready(service, version, err.reason());
            (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response()
        }
    }
}
