mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{
    AdvisoryRequest, ChatReply, ChatRequest, DiagnosisUpload, ErrorResponse, HistoryEntry,
    HealthResponse, MarketRequest, SchemesRequest, StoresRequest, StructuredResponse,
};
pub use error::ServerError;
pub use router::router;
pub(crate) use state::ServerState;

use crate::application::AgriGateway;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve the REST API until the process receives Ctrl-C
pub async fn serve(gateway: Arc<AgriGateway>, addr: SocketAddr) -> Result<(), ServerError> {
    router::serve(gateway, addr).await
}
