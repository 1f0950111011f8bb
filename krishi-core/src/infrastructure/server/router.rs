use super::docs::ApiDoc;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::application::AgriGateway;
use crate::constants::MAX_UPLOAD_BYTES;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full REST application with CORS, docs and shared state
pub fn router(gateway: Arc<AgriGateway>) -> Result<Router, ServerError> {
    let cors = cors_layer(&gateway.config().server.cors_origins)?;
    let state = Arc::new(ServerState::new(gateway));

    Ok(Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/", get(routes::health::health_handler))
        .route("/test-api-keys", get(routes::health::credentials_handler))
        .route("/detect-disease", post(routes::diagnosis::detect_disease_handler))
        .route("/chatbot", post(routes::chat::chat_handler))
        .route("/gov-schemes", post(routes::listings::schemes_handler))
        .route("/market-prices", post(routes::listings::market_prices_handler))
        .route("/nearby-stores", post(routes::listings::nearby_stores_handler))
        .route("/weather-crop-advisory", post(routes::advisory::advisory_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state))
}

/// Any origin when none are configured, otherwise exactly the listed ones
fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| ServerError::InvalidOrigin {
                origin: origin.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(allowed)))
}

pub(super) async fn serve(gateway: Arc<AgriGateway>, addr: SocketAddr) -> Result<(), ServerError> {
    let app = router(gateway)?;
    info!(%addr, "Binding REST server");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(error) => warn!(%error, "Failed to listen for shutdown signal"),
    }
}
