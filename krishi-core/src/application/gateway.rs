//! Task orchestration.
//!
//! Every task checks its credentials before touching the network, builds a
//! [`RequestSpec`], dispatches the variants and turns the reply into either a
//! validated object or a degraded placeholder.

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use super::advisory::{AdvisoryReport, normalize_forecast, resolve_location};
use super::degraded::DegradedResponseBuilder;
use super::diagnostics::{CredentialReport, key_preview, probe_model, probe_weather};
use super::dispatcher::VariantFallbackDispatcher;
use super::error::GatewayError;
use super::extract::TextExtractor;
use super::parser::{ParsedResult, StructuredOutputParser};
use super::prompts;
use super::query::{AdvisoryQuery, ChatQuery, MarketQuery, SchemeQuery, StoreQuery};
use crate::config::GatewayConfig;
use crate::constants::MAX_FORECAST_ROWS;
use crate::domain::{Attachment, RequestSpec, ResponseFormat, TaskKind};
use crate::infrastructure::model::{GeminiClient, PayloadBuilder, ProviderClient, ProviderError};
use crate::infrastructure::weather::{ForecastQuery, WeatherApiClient, WeatherProvider};

const GEMINI_CONTEXT: &str = "Gemini request";
const MARKET_CONTEXT: &str = "Market price request";
const STORES_CONTEXT: &str = "Nearby stores request";
const ADVISORY_CONTEXT: &str = "Weather advisory";

/// Agricultural assistant tasks on top of the model and weather providers
pub struct AgriGateway {
    config: GatewayConfig,
    model: Arc<dyn ProviderClient>,
    weather: Arc<dyn WeatherProvider>,
}

impl AgriGateway {
    /// Build the HTTP clients from configuration, sharing one connection pool
    pub fn from_config(config: GatewayConfig) -> Self {
        let http = Client::new();
        let model = Arc::new(GeminiClient::with_client(&config.gemini, http.clone()));
        let weather = Arc::new(WeatherApiClient::with_client(&config.weather, http));
        Self::with_clients(config, model, weather)
    }

    pub fn with_clients(
        config: GatewayConfig,
        model: Arc<dyn ProviderClient>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            config,
            model,
            weather,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn require_gemini_key(&self) -> Result<(), GatewayError> {
        if self.config.has_gemini_key() {
            Ok(())
        } else {
            Err(GatewayError::MissingCredential {
                variable: self.config.gemini.api_key_env.clone(),
            })
        }
    }

    pub fn require_weather_key(&self) -> Result<(), GatewayError> {
        if self.config.has_weather_key() {
            Ok(())
        } else {
            Err(GatewayError::MissingCredential {
                variable: self.config.weather.api_key_env.clone(),
            })
        }
    }

    /// Dispatch all variants of `spec` and extract the reply text
    async fn complete(&self, spec: &RequestSpec) -> Result<String, ProviderError> {
        let variants = PayloadBuilder::build(spec);
        let timeout = self.config.timeouts.for_completion(spec.wants_grounding());
        let envelope = VariantFallbackDispatcher::new(self.model.as_ref())
            .dispatch(&variants, timeout)
            .await
            .into_result(self.model.id())?;
        Ok(TextExtractor::extract(&envelope))
    }

    async fn complete_structured(
        &self,
        spec: RequestSpec,
        fallback: DegradedResponseBuilder,
        context: &'static str,
    ) -> Result<ParsedResult, GatewayError> {
        let raw = self
            .complete(&spec)
            .await
            .map_err(|source| GatewayError::provider(context, source))?;
        let task = fallback.task();
        let result = StructuredOutputParser::parse(&raw, &task.schema(), &fallback);
        info!(task = %task, degraded = result.is_degraded(), "Task completed");
        Ok(result)
    }

    /// Diagnose a crop photo
    pub async fn detect_disease(&self, upload: Option<Attachment>) -> Result<ParsedResult, GatewayError> {
        self.require_gemini_key()?;
        let image = upload
            .ok_or_else(|| GatewayError::invalid_input("Image file field 'file' is required."))?;
        if !image.is_image() {
            return Err(GatewayError::invalid_input("Please upload a valid image file."));
        }
        if image.is_empty() {
            return Err(GatewayError::invalid_input("Uploaded image is empty."));
        }

        let spec = RequestSpec::new(prompts::DIAGNOSIS_PROMPT)
            .with_attachment(image)
            .with_temperature(0.2)
            .with_response_format(ResponseFormat::Json);
        self.complete_structured(spec, DegradedResponseBuilder::new(TaskKind::Diagnosis), GEMINI_CONTEXT)
            .await
    }

    /// Free-text farming assistant reply
    pub async fn chat(&self, query: ChatQuery) -> Result<String, GatewayError> {
        self.require_gemini_key()?;
        let spec = RequestSpec::new(prompts::CHAT_SYSTEM_PROMPT)
            .with_context(query.transcript())
            .with_temperature(0.4);

        let reply = self
            .complete(&spec)
            .await
            .map_err(|source| GatewayError::provider(GEMINI_CONTEXT, source))?;
        if reply.is_empty() {
            return Err(GatewayError::EmptyReply);
        }
        info!(task = %TaskKind::Chat, turns = query.history.len() + 1, "Task completed");
        Ok(reply)
    }

    pub async fn gov_schemes(&self, query: SchemeQuery) -> Result<ParsedResult, GatewayError> {
        self.require_gemini_key()?;
        let spec = grounded_json(prompts::schemes_prompt(&query));
        let fallback = DegradedResponseBuilder::new(TaskKind::Schemes)
            .echo("state", query.state)
            .echo("type", query.scheme_type);
        self.complete_structured(spec, fallback, GEMINI_CONTEXT).await
    }

    pub async fn market_prices(&self, query: MarketQuery) -> Result<ParsedResult, GatewayError> {
        self.require_gemini_key()?;
        let spec = grounded_json(prompts::market_prompt(&query));
        let fallback = DegradedResponseBuilder::new(TaskKind::MarketPrices)
            .echo("location", query.location)
            .echo("commodity", query.commodity);
        self.complete_structured(spec, fallback, MARKET_CONTEXT).await
    }

    pub async fn nearby_stores(&self, query: StoreQuery) -> Result<ParsedResult, GatewayError> {
        self.require_gemini_key()?;
        let spec = grounded_json(prompts::stores_prompt(&query));
        let fallback =
            DegradedResponseBuilder::new(TaskKind::NearbyStores).echo("location", query.location_label());
        self.complete_structured(spec, fallback, STORES_CONTEXT).await
    }

    /// Forecast for the location plus a model-written crop advisory.
    ///
    /// Upstream HTTP failures from either provider keep their status code.
    pub async fn weather_advisory(&self, query: AdvisoryQuery) -> Result<AdvisoryReport, GatewayError> {
        self.require_weather_key()?;
        self.require_gemini_key()?;

        let days = self.config.weather.forecast_days;
        let lookup = ForecastQuery::advisory(query.location_query(), days);
        let envelope = self
            .weather
            .forecast(&lookup, self.config.timeouts.weather)
            .await
            .map_err(|source| GatewayError::passthrough(ADVISORY_CONTEXT, source))?;
        if envelope.days().is_empty() {
            return Err(GatewayError::ForecastUnavailable);
        }

        let location = resolve_location(&envelope, &query);
        let rows = usize::from(days).min(MAX_FORECAST_ROWS);
        let forecast = normalize_forecast(envelope.days(), rows);

        let spec = RequestSpec::new(prompts::advisory_prompt(&location, &forecast)?)
            .with_temperature(0.3)
            .with_response_format(ResponseFormat::Json);
        let raw = self
            .complete(&spec)
            .await
            .map_err(|source| GatewayError::passthrough(ADVISORY_CONTEXT, source))?;

        let fallback = DegradedResponseBuilder::new(TaskKind::Advisory);
        let advisory = StructuredOutputParser::parse(&raw, &TaskKind::Advisory.schema(), &fallback);
        info!(
            task = %TaskKind::Advisory,
            location = location.city.as_str(),
            days = forecast.len(),
            degraded = advisory.is_degraded(),
            "Task completed"
        );

        Ok(AdvisoryReport {
            location,
            forecast,
            advisory: advisory.into_value(),
        })
    }

    /// Report key presence and probe both providers
    pub async fn probe_credentials(&self) -> CredentialReport {
        let gemini_key = self.config.gemini.api_key.as_deref();
        let weather_key = self.config.weather.api_key.as_deref();
        let timeout = self.config.timeouts.probe;

        let gemini = match gemini_key {
            Some(_) => probe_model(self.model.as_ref(), timeout).await,
            None => Default::default(),
        };
        let weather = match weather_key {
            Some(_) => probe_weather(self.weather.as_ref(), timeout).await,
            None => Default::default(),
        };

        CredentialReport {
            gemini_api_key_loaded: gemini_key.is_some(),
            gemini_api_key_preview: key_preview(gemini_key, 20),
            weather_api_key_loaded: weather_key.is_some(),
            weather_api_key_preview: key_preview(weather_key, 10),
            gemini_api_status: gemini.status,
            gemini_error: gemini.error,
            weather_api_status: weather.status,
            weather_error: weather.error,
        }
    }
}

/// Search-grounded JSON request at the listing temperature
fn grounded_json(prompt: String) -> RequestSpec {
    RequestSpec::new(prompt)
        .with_grounding(true)
        .with_temperature(0.2)
        .with_response_format(ResponseFormat::Json)
}
