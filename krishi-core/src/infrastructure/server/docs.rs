use super::dto::{
    AdvisoryRequest, ChatReply, ChatRequest, DiagnosisUpload, ErrorResponse, HealthResponse,
    HistoryEntry, MarketRequest, SchemesRequest, StoresRequest, StructuredResponse,
};
use super::routes;
use crate::application::{AdvisoryReport, CredentialReport};
use crate::domain::{DailyForecast, ResolvedLocation};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Krishi Gateway", description = "Agricultural assistant backed by Gemini and weatherapi.com"),
    paths(
        routes::health::health_handler,
        routes::health::credentials_handler,
        routes::diagnosis::detect_disease_handler,
        routes::chat::chat_handler,
        routes::listings::schemes_handler,
        routes::listings::market_prices_handler,
        routes::listings::nearby_stores_handler,
        routes::advisory::advisory_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            CredentialReport,
            DiagnosisUpload,
            StructuredResponse,
            ChatRequest,
            HistoryEntry,
            ChatReply,
            SchemesRequest,
            MarketRequest,
            StoresRequest,
            AdvisoryRequest,
            AdvisoryReport,
            ResolvedLocation,
            DailyForecast
        )
    ),
    tags(
        (name = "health", description = "Liveness and credential checks"),
        (name = "diagnosis", description = "Crop disease detection from a photo"),
        (name = "chat", description = "Farming assistant conversation"),
        (name = "listings", description = "Search-grounded schemes, prices and stores"),
        (name = "advisory", description = "Weather forecast with crop advisory")
    )
)]
pub(super) struct ApiDoc;
