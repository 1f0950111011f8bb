use super::super::dto::{AdvisoryRequest, ApiError, ErrorResponse, lenient_body, reject};
use super::super::state::ServerState;
use crate::application::{AdvisoryQuery, AdvisoryReport};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;
use tracing::info;

const ENDPOINT: &str = "/weather-crop-advisory";

#[utoipa::path(
    post,
    path = "/weather-crop-advisory",
    tag = "advisory",
    request_body = AdvisoryRequest,
    responses(
        (status = 200, description = "Resolved location, daily forecast and crop advisory", body = AdvisoryReport),
        (status = 400, description = "Missing city", body = ErrorResponse),
        (status = 500, description = "Key not configured or request failed", body = ErrorResponse),
        (status = 502, description = "No forecast days for the location", body = ErrorResponse)
    )
)]
pub async fn advisory_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<AdvisoryReport>, ApiError> {
    let gateway = state.gateway();
    gateway
        .require_weather_key()
        .and_then(|()| gateway.require_gemini_key())
        .map_err(|error| reject(ENDPOINT, error))?;

    let query = AdvisoryQuery::from_body(&lenient_body(&body)).map_err(|error| reject(ENDPOINT, error))?;
    info!(location = query.location_query().as_str(), "Received {ENDPOINT} request");

    let report = gateway
        .weather_advisory(query)
        .await
        .map_err(|error| reject(ENDPOINT, error))?;
    Ok(Json(report))
}
