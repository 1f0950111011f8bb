use crate::infrastructure::model::ProviderError;
use reqwest::StatusCode;
use thiserror::Error;

/// Task-level failures surfaced to the caller.
///
/// Capability rejections never reach this type (the dispatcher consumes them)
/// and neither do output-format problems (those degrade into a 200 payload).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{variable} is not set on the server.")]
    MissingCredential { variable: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{context} failed: {source}")]
    Provider {
        context: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("Weather/Gemini request failed: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Weather forecast data not available for this location.")]
    ForecastUnavailable,

    #[error("Empty response from model.")]
    EmptyReply,

    #[error("Weather advisory failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl GatewayError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn provider(context: &'static str, source: ProviderError) -> Self {
        Self::Provider { context, source }
    }

    /// Keep the upstream status when the provider answered, otherwise wrap
    pub fn passthrough(context: &'static str, source: ProviderError) -> Self {
        match source {
            ProviderError::Status { status, body, .. } => Self::UpstreamStatus { status, body },
            other => Self::provider(context, other),
        }
    }

    /// HTTP status the REST layer should answer with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Provider { .. } | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamStatus { status, .. } => *status,
            Self::ForecastUnavailable | Self::EmptyReply => StatusCode::BAD_GATEWAY,
        }
    }
}
