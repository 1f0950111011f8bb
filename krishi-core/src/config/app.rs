use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BIND, DEFAULT_COMPLETION_TIMEOUT_SECS, DEFAULT_FORECAST_DAYS,
    DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL,
    DEFAULT_GROUNDED_TIMEOUT_SECS, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_WEATHER_FORECAST_URL,
    DEFAULT_WEATHER_TIMEOUT_SECS, GEMINI_API_KEY_ENV, WEATHER_API_KEY_ENV,
};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Gateway configuration loaded from gateway.toml and the environment
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub gemini: GeminiSettings,
    pub weather: WeatherSettings,
    pub timeouts: TimeoutSettings,
    pub server: ServerSettings,
}

/// Generative model endpoint and credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub api_path: String,
    pub model: String,
    /// Environment variable the key is read from
    pub api_key_env: String,
    /// Resolved from the environment; `None` when unset or blank
    pub api_key: Option<String>,
}

/// Forecast provider endpoint and credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSettings {
    pub forecast_url: String,
    pub forecast_days: u8,
    /// Environment variable the key is read from
    pub api_key_env: String,
    /// Resolved from the environment; `None` when unset or blank
    pub api_key: Option<String>,
}

/// Per-call timeouts for outbound requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutSettings {
    pub completion: Duration,
    pub grounded: Duration,
    pub weather: Duration,
    pub probe: Duration,
}

/// REST listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl GatewayConfig {
    /// Load configuration from a file path (or default path if None).
    ///
    /// A missing file is not an error: defaults are used and credentials are
    /// still resolved from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Whether the Gemini API key is present
    pub fn has_gemini_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }

    /// Whether the weather API key is present
    pub fn has_weather_key(&self) -> bool {
        self.weather.api_key.is_some()
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_path: DEFAULT_GEMINI_API_PATH.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key_env: GEMINI_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            forecast_url: DEFAULT_WEATHER_FORECAST_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            api_key_env: WEATHER_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            completion: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
            grounded: Duration::from_secs(DEFAULT_GROUNDED_TIMEOUT_SECS),
            weather: Duration::from_secs(DEFAULT_WEATHER_TIMEOUT_SECS),
            probe: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiSettings::default(),
            weather: WeatherSettings::default(),
            timeouts: TimeoutSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl TimeoutSettings {
    /// Timeout for a completion, longer when search grounding is requested
    pub fn for_completion(&self, grounded: bool) -> Duration {
        if grounded {
            self.grounded
        } else {
            self.completion
        }
    }
}
