//! Search-grounded listings: schemes, market prices and nearby stores

use super::super::dto::{
    ApiError, ErrorResponse, MarketRequest, SchemesRequest, StoresRequest, StructuredResponse,
    lenient_body, reject,
};
use super::super::state::ServerState;
use crate::application::{MarketQuery, SchemeQuery, StoreQuery};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    post,
    path = "/gov-schemes",
    tag = "listings",
    request_body = SchemesRequest,
    responses(
        (status = 200, description = "Schemes, or a degraded payload echoing the filters", body = StructuredResponse),
        (status = 500, description = "Key not configured or model request failed", body = ErrorResponse)
    )
)]
pub async fn schemes_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<StructuredResponse>, ApiError> {
    const ENDPOINT: &str = "/gov-schemes";
    let gateway = state.gateway();
    gateway
        .require_gemini_key()
        .map_err(|error| reject(ENDPOINT, error))?;

    let query = SchemeQuery::from_body(&lenient_body(&body));
    info!(state = query.state.as_str(), scheme_type = query.scheme_type.as_str(), "Received {ENDPOINT} request");

    let result = gateway
        .gov_schemes(query)
        .await
        .map_err(|error| reject(ENDPOINT, error))?;
    Ok(Json(StructuredResponse(result.into_value())))
}

#[utoipa::path(
    post,
    path = "/market-prices",
    tag = "listings",
    request_body = MarketRequest,
    responses(
        (status = 200, description = "Prices, or a degraded payload echoing the query", body = StructuredResponse),
        (status = 400, description = "Blank location", body = ErrorResponse),
        (status = 500, description = "Key not configured or model request failed", body = ErrorResponse)
    )
)]
pub async fn market_prices_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<StructuredResponse>, ApiError> {
    const ENDPOINT: &str = "/market-prices";
    let gateway = state.gateway();
    gateway
        .require_gemini_key()
        .map_err(|error| reject(ENDPOINT, error))?;

    let query = MarketQuery::from_body(&lenient_body(&body)).map_err(|error| reject(ENDPOINT, error))?;
    info!(
        location = query.location.as_str(),
        commodity = query.commodity.as_str(),
        "Received {ENDPOINT} request"
    );

    let result = gateway
        .market_prices(query)
        .await
        .map_err(|error| reject(ENDPOINT, error))?;
    Ok(Json(StructuredResponse(result.into_value())))
}

#[utoipa::path(
    post,
    path = "/nearby-stores",
    tag = "listings",
    request_body = StoresRequest,
    responses(
        (status = 200, description = "Stores, or a degraded payload with total_stores = 0", body = StructuredResponse),
        (status = 400, description = "Missing coordinates", body = ErrorResponse),
        (status = 500, description = "Key not configured or model request failed", body = ErrorResponse)
    )
)]
pub async fn nearby_stores_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<StructuredResponse>, ApiError> {
    const ENDPOINT: &str = "/nearby-stores";
    let gateway = state.gateway();
    gateway
        .require_gemini_key()
        .map_err(|error| reject(ENDPOINT, error))?;

    let query = StoreQuery::from_body(&lenient_body(&body)).map_err(|error| reject(ENDPOINT, error))?;
    info!(location = query.location_label().as_str(), "Received {ENDPOINT} request");

    let result = gateway
        .nearby_stores(query)
        .await
        .map_err(|error| reject(ENDPOINT, error))?;
    Ok(Json(StructuredResponse(result.into_value())))
}
