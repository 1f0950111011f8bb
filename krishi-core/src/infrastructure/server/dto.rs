//! Request and response bodies of the REST surface.
//!
//! Request structs describe the accepted fields for the OpenAPI document and
//! for Rust clients building requests. Handlers read the raw body and extract
//! fields leniently, so clients sending numbers or `null` still get the
//! defaults described here.

use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;
use utoipa::ToSchema;

use crate::application::GatewayError;

/// Error body shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a task error to its status and `{detail}` body
pub(crate) fn reject(endpoint: &'static str, error: GatewayError) -> ApiError {
    let status = error.status();
    error!(endpoint, status = status.as_u16(), %error, "Request failed");
    (
        status,
        Json(ErrorResponse {
            detail: error.to_string(),
        }),
    )
}

/// Parse a JSON object body, treating anything else as `{}`
pub(crate) fn lenient_body(bytes: &Bytes) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(body @ Value::Object(_)) => body,
        _ => Value::Object(Map::new()),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

/// Validated model output, or a degraded payload with `raw_response` and `detail`
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct StructuredResponse(pub Value);

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, ToSchema)]
pub struct DiagnosisUpload {
    /// Crop photo with an `image/*` content type
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    /// `user` for the farmer, anything else for the assistant
    pub role: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchemesRequest {
    /// Defaults to "All States"
    pub state: Option<String>,
    /// Defaults to "All Types"
    #[serde(rename = "type")]
    pub scheme_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarketRequest {
    /// Defaults to "India"
    pub location: Option<String>,
    pub commodity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoresRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvisoryRequest {
    pub city: String,
    pub state: Option<String>,
    /// Defaults to "IN"
    pub country: Option<String>,
}
