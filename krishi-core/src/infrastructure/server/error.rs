use axum::http::header::InvalidHeaderValue;
use std::net::SocketAddr;
use thiserror::Error;

/// Failures while starting or running the REST listener
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS origin '{origin}': {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: InvalidHeaderValue,
    },
    #[error("failed to bind REST listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("REST server stopped: {0}")]
    Serve(#[from] std::io::Error),
}
