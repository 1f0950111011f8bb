//! Provider outcome and error types

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// HTTP status the provider uses to reject an unsupported request shape
pub const CAPABILITY_REJECTION_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Classified result of exactly one outbound provider call
#[derive(Debug)]
pub enum ProviderOutcome {
    /// 2xx with a decodable JSON body
    Success(Value),
    /// The provider rejected this request shape; another variant may work
    Recoverable { status: StatusCode, body: String },
    /// Anything that must not trigger another attempt
    Fatal(ProviderError),
}

impl ProviderOutcome {
    /// Classify a non-success HTTP status
    pub fn from_status(provider: &str, status: StatusCode, body: String) -> Self {
        if status == CAPABILITY_REJECTION_STATUS {
            Self::Recoverable { status, body }
        } else {
            Self::Fatal(ProviderError::status(provider, status, body))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collapse into a `Result`, surfacing a recoverable rejection as a status error
    pub fn into_result(self, provider: &str) -> Result<Value, ProviderError> {
        match self {
            Self::Success(envelope) => Ok(envelope),
            Self::Recoverable { status, body } => {
                Err(ProviderError::status(provider, status, body))
            }
            Self::Fatal(error) => Err(error),
        }
    }
}

/// Errors from outbound provider calls
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider '{provider}' requires an API key")]
    MissingApiKey { provider: String },
    #[error("network error calling provider '{provider}': {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to provider '{provider}' timed out after {}s", .timeout.as_secs())]
    Timeout {
        provider: String,
        timeout: Duration,
    },
    #[error("provider '{provider}' returned {status}: {body}")]
    Status {
        provider: String,
        status: StatusCode,
        body: String,
    },
    #[error("provider '{provider}' returned invalid response: {reason}")]
    InvalidResponse { provider: String, reason: String },
    #[error("no successful response from provider '{provider}'")]
    Exhausted { provider: String },
}

impl ProviderError {
    pub fn missing_api_key(provider: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
        }
    }

    /// Classify a transport error, separating timeouts from other failures
    pub fn transport(provider: impl Into<String>, source: reqwest::Error, timeout: Duration) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                provider: provider.into(),
                timeout,
            }
        } else {
            Self::Network {
                provider: provider.into(),
                source,
            }
        }
    }

    pub fn status(provider: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        Self::Status {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    pub fn exhausted(provider: impl Into<String>) -> Self {
        Self::Exhausted {
            provider: provider.into(),
        }
    }

    /// Upstream HTTP status, when the provider answered at all
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream response body, when the provider answered with an error status
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}
