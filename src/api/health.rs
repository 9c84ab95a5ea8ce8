use crate::api::MgmtState;
use crate::api::schemas::health::{HealthStatus, ReadinessResponse, ServiceStatus};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus { message: "Contact Form API is running".to_string() })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy".to_string() })
}

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe: checks that the contact store can be read.
pub async fn readyz(State(state): State<MgmtState>) -> impl IntoResponse {
    let (status_code, storage_status) = match state.health_service.check_storage().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, component = "storage", "Readiness probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
    };

    let response = ReadinessResponse {
        status: if status_code == StatusCode::OK { "ok" } else { "error" }.to_string(),
        storage: storage_status.to_string(),
    };

    (status_code, Json(response))
}
