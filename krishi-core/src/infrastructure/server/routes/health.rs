use super::super::dto::HealthResponse;
use super::super::state::ServerState;
use crate::application::CredentialReport;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::{debug, info};

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Serving / request");
    Json(HealthResponse {
        message: "Crop Disease Detection API is running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/test-api-keys",
    tag = "health",
    responses(
        (status = 200, description = "Key presence and live probe results", body = CredentialReport)
    )
)]
pub async fn credentials_handler(State(state): State<Arc<ServerState>>) -> Json<CredentialReport> {
    info!("Received /test-api-keys request");
    Json(state.gateway().probe_credentials().await)
}
