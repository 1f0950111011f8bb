use super::super::dto::{ApiError, ChatReply, ChatRequest, ErrorResponse, lenient_body, reject};
use super::super::state::ServerState;
use crate::application::ChatQuery;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;
use tracing::info;

const ENDPOINT: &str = "/chatbot";

#[utoipa::path(
    post,
    path = "/chatbot",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatReply),
        (status = 400, description = "Missing message or malformed history", body = ErrorResponse),
        (status = 500, description = "Key not configured or model request failed", body = ErrorResponse),
        (status = 502, description = "Model returned no text", body = ErrorResponse)
    )
)]
pub async fn chat_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let gateway = state.gateway();
    gateway
        .require_gemini_key()
        .map_err(|error| reject(ENDPOINT, error))?;

    let query = ChatQuery::from_body(&lenient_body(&body)).map_err(|error| reject(ENDPOINT, error))?;
    info!(history = query.history.len(), "Received {ENDPOINT} request");

    let reply = gateway
        .chat(query)
        .await
        .map_err(|error| reject(ENDPOINT, error))?;
    Ok(Json(ChatReply { reply }))
}
