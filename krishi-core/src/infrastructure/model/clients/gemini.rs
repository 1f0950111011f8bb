//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::GeminiSettings;
use crate::infrastructure::model::payload::PayloadVariant;
use crate::infrastructure::model::traits::ProviderClient;
use crate::infrastructure::model::types::ProviderOutcome;

/// Gemini `generateContent` client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    base: HttpClientBase,
    api_path: String,
    model: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &GeminiSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    /// Share an existing connection pool
    pub fn with_client(settings: &GeminiSettings, http: Client) -> Self {
        Self {
            base: HttpClientBase::with_client(
                "gemini",
                settings.endpoint.clone(),
                settings.api_key.clone(),
                http,
            ),
            api_path: settings.api_path.clone(),
            model: settings.model.clone(),
        }
    }

    fn build_model_url(&self) -> String {
        let path = self.api_path.trim_matches('/');
        self.base
            .build_url(&format!("{path}/{}:generateContent", self.model))
    }
}

#[async_trait]
impl ProviderClient for GeminiClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn call(&self, variant: &PayloadVariant, timeout: Duration) -> ProviderOutcome {
        let url = self.build_model_url();

        info!(
            provider = self.base.id.as_str(),
            model = self.model.as_str(),
            capability = %variant.capability(),
            url = %url,
            timeout_secs = timeout.as_secs(),
            "Sending request to Gemini"
        );

        let outcome = self
            .base
            .post_with_query_key(&url, variant.body(), timeout)
            .await;
        debug!(success = outcome.is_success(), "Received response from Gemini");
        outcome
    }
}
