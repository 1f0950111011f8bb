use super::super::dto::{ApiError, DiagnosisUpload, ErrorResponse, StructuredResponse, reject};
use super::super::state::ServerState;
use crate::domain::Attachment;
use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, info};

const ENDPOINT: &str = "/detect-disease";
const UPLOAD_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/detect-disease",
    tag = "diagnosis",
    request_body(content = DiagnosisUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Diagnosis, or a degraded payload with raw_response", body = StructuredResponse),
        (status = 400, description = "Missing, empty or non-image upload", body = ErrorResponse),
        (status = 500, description = "Key not configured or model request failed", body = ErrorResponse)
    )
)]
pub async fn detect_disease_handler(
    State(state): State<Arc<ServerState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StructuredResponse>, ApiError> {
    info!("Received {ENDPOINT} request");
    let gateway = state.gateway();
    gateway
        .require_gemini_key()
        .map_err(|error| reject(ENDPOINT, error))?;

    let upload = match multipart {
        Ok(mut multipart) => read_upload(&mut multipart).await?,
        Err(rejection) => {
            debug!(%rejection, "Request is not a readable multipart form");
            None
        }
    };

    let result = gateway
        .detect_disease(upload)
        .await
        .map_err(|error| reject(ENDPOINT, error))?;
    Ok(Json(StructuredResponse(result.into_value())))
}

/// First part named `file`, with its declared content type
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Attachment>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(malformed)?;
        debug!(mime_type = mime_type.as_str(), size = bytes.len(), "Read uploaded image");
        return Ok(Some(Attachment::new(mime_type, bytes.to_vec())));
    }
    Ok(None)
}

fn malformed(error: axum::extract::multipart::MultipartError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            detail: error.body_text(),
        }),
    )
}
