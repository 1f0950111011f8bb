//! weatherapi.com forecast client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::types::{ForecastEnvelope, ForecastQuery};
use crate::config::WeatherSettings;
use crate::infrastructure::model::clients::HttpClientBase;
use crate::infrastructure::model::types::ProviderError;

/// Source of daily forecasts
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Get the client ID used in logs and errors
    fn id(&self) -> &str;

    /// Fetch a forecast; one network request, no retries
    async fn forecast(
        &self,
        query: &ForecastQuery,
        timeout: Duration,
    ) -> Result<ForecastEnvelope, ProviderError>;
}

/// Client for the weatherapi.com `forecast.json` endpoint
#[derive(Clone)]
pub struct WeatherApiClient {
    base: HttpClientBase,
}

impl WeatherApiClient {
    pub fn from_settings(settings: &WeatherSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    /// Share an existing connection pool
    pub fn with_client(settings: &WeatherSettings, http: Client) -> Self {
        Self {
            base: HttpClientBase::with_client(
                "weather",
                settings.forecast_url.clone(),
                settings.api_key.clone(),
                http,
            ),
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn forecast(
        &self,
        query: &ForecastQuery,
        timeout: Duration,
    ) -> Result<ForecastEnvelope, ProviderError> {
        info!(
            provider = self.base.id.as_str(),
            location = query.q.as_str(),
            days = query.days,
            "Requesting weather forecast"
        );

        let envelope = self
            .base
            .get_with_query_key(&self.base.endpoint, query, timeout)
            .await
            .into_result(&self.base.id)?;

        let forecast: ForecastEnvelope = serde_json::from_value(envelope).map_err(|err| {
            ProviderError::invalid_response(&self.base.id, format!("unexpected forecast shape: {err}"))
        })?;
        debug!(days = forecast.days().len(), "Received weather forecast");
        Ok(forecast)
    }
}
