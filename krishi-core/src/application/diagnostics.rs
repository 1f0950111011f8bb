//! Credential presence and liveness report

use std::time::Duration;

use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use super::prompts::PROBE_PROMPT;
use crate::domain::RequestSpec;
use crate::infrastructure::model::{PayloadBuilder, ProviderClient, ProviderError};
use crate::infrastructure::weather::{ForecastQuery, WeatherProvider};

const ERROR_BODY_LIMIT: usize = 200;
const ERROR_MESSAGE_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CredentialReport {
    pub gemini_api_key_loaded: bool,
    pub gemini_api_key_preview: String,
    pub weather_api_key_loaded: bool,
    pub weather_api_key_preview: String,
    pub gemini_api_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_error: Option<String>,
    pub weather_api_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_error: Option<String>,
}

/// Outcome of one probe call, rendered for humans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status: String,
    pub error: Option<String>,
}

impl Default for ProbeResult {
    /// No key configured, nothing was called
    fn default() -> Self {
        Self {
            status: "❌ API key not set".to_string(),
            error: None,
        }
    }
}

impl ProbeResult {
    fn from_result(result: Result<(), ProviderError>) -> Self {
        match result {
            Ok(()) => Self {
                status: "✅ Working".to_string(),
                error: None,
            },
            Err(ProviderError::Status { status, body, .. }) => Self {
                status: format!("❌ Failed: {}", status.as_u16()),
                error: Some(truncate(&body, ERROR_BODY_LIMIT)),
            },
            Err(other) => Self {
                status: format!("❌ Error: {}", truncate(&other.to_string(), ERROR_MESSAGE_LIMIT)),
                error: None,
            },
        }
    }
}

/// First `visible` characters followed by an ellipsis, or "Not set"
pub fn key_preview(key: Option<&str>, visible: usize) -> String {
    match key {
        Some(key) => format!("{}...", truncate(key, visible)),
        None => "Not set".to_string(),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Minimal plain completion against the configured model
pub async fn probe_model(client: &dyn ProviderClient, timeout: Duration) -> ProbeResult {
    let spec = RequestSpec::new(PROBE_PROMPT).with_temperature(0.1);
    let result = match PayloadBuilder::build(&spec).first() {
        Some(variant) => client.call(variant, timeout).await.into_result(client.id()).map(drop),
        None => Err(ProviderError::exhausted(client.id())),
    };
    let probe = ProbeResult::from_result(result);
    info!(provider = client.id(), status = probe.status.as_str(), "Credential probe finished");
    probe
}

/// One-day forecast lookup
pub async fn probe_weather(provider: &dyn WeatherProvider, timeout: Duration) -> ProbeResult {
    let result = provider
        .forecast(&ForecastQuery::probe("London"), timeout)
        .await
        .map(drop);
    let probe = ProbeResult::from_result(result);
    info!(provider = provider.id(), status = probe.status.as_str(), "Credential probe finished");
    probe
}
