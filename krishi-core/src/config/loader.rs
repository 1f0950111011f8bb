use super::app::{GatewayConfig, GeminiSettings, ServerSettings, TimeoutSettings, WeatherSettings};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH, PORT_ENV};
use dotenvy::{dotenv, from_filename};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, info, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub gemini: RawGemini,
    #[serde(default)]
    pub weather: RawWeather,
    #[serde(default)]
    pub timeouts: RawTimeouts,
    #[serde(default)]
    pub server: RawServer,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawGemini {
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawWeather {
    pub forecast_url: Option<String>,
    pub forecast_days: Option<u8>,
    pub api_key_env: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawTimeouts {
    pub completion_secs: Option<u64>,
    pub grounded_secs: Option<u64>,
    pub weather_secs: Option<u64>,
    pub probe_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawServer {
    pub bind: Option<String>,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Ensures environment variables are loaded from config/.env and .env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
        let _ = dotenv();
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    let raw = read_raw(config_path)?;
    validate_and_build(raw)
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading gateway configuration file");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(RawConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn validate_and_build(raw: RawConfig) -> Result<GatewayConfig, ConfigError> {
    let gemini = build_gemini(raw.gemini)?;
    let weather = build_weather(raw.weather)?;
    let timeouts = build_timeouts(raw.timeouts)?;
    let server = build_server(raw.server)?;

    Ok(GatewayConfig {
        gemini,
        weather,
        timeouts,
        server,
    })
}

fn build_gemini(raw: RawGemini) -> Result<GeminiSettings, ConfigError> {
    let defaults = GeminiSettings::default();
    let endpoint = raw.endpoint.unwrap_or(defaults.endpoint);
    if endpoint.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint { section: "gemini" });
    }
    let api_key_env = raw.api_key_env.unwrap_or(defaults.api_key_env);

    Ok(GeminiSettings {
        endpoint,
        api_path: raw.api_path.unwrap_or(defaults.api_path),
        model: raw.model.unwrap_or(defaults.model),
        api_key: resolve_api_key("gemini", &api_key_env),
        api_key_env,
    })
}

fn build_weather(raw: RawWeather) -> Result<WeatherSettings, ConfigError> {
    let defaults = WeatherSettings::default();
    let forecast_url = raw.forecast_url.unwrap_or(defaults.forecast_url);
    if forecast_url.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint { section: "weather" });
    }
    let forecast_days = raw.forecast_days.unwrap_or(defaults.forecast_days);
    if !(1..=14).contains(&forecast_days) {
        return Err(ConfigError::ForecastDaysOutOfRange {
            days: forecast_days,
        });
    }
    let api_key_env = raw.api_key_env.unwrap_or(defaults.api_key_env);

    Ok(WeatherSettings {
        forecast_url,
        forecast_days,
        api_key: resolve_api_key("weather", &api_key_env),
        api_key_env,
    })
}

fn build_timeouts(raw: RawTimeouts) -> Result<TimeoutSettings, ConfigError> {
    let defaults = TimeoutSettings::default();
    let pick = |value: Option<u64>, fallback: Duration, field: &'static str| match value {
        Some(0) => Err(ConfigError::ZeroTimeout { field }),
        Some(secs) => Ok(Duration::from_secs(secs)),
        None => Ok(fallback),
    };

    Ok(TimeoutSettings {
        completion: pick(raw.completion_secs, defaults.completion, "completion_secs")?,
        grounded: pick(raw.grounded_secs, defaults.grounded, "grounded_secs")?,
        weather: pick(raw.weather_secs, defaults.weather, "weather_secs")?,
        probe: pick(raw.probe_secs, defaults.probe, "probe_secs")?,
    })
}

fn build_server(raw: RawServer) -> Result<ServerSettings, ConfigError> {
    let mut bind = match raw.bind {
        Some(value) => value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBind { value, source })?,
        None => ServerSettings::default().bind,
    };

    if let Ok(port) = env::var(PORT_ENV) {
        let parsed = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
            variable: PORT_ENV,
            value: port.clone(),
        })?;
        debug!(port = parsed, "Overriding bind port from environment");
        bind.set_port(parsed);
    }

    Ok(ServerSettings {
        bind,
        cors_origins: raw.cors_origins,
    })
}

/// Resolve an API key from the named environment variable.
///
/// Blank values are treated as unset.
pub fn resolve_api_key(provider: &str, env_var: &str) -> Option<String> {
    let name = env_var.trim();
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => {
            warn!(provider, env_var = name, "API key environment variable is empty");
            None
        }
        Err(err) => {
            warn!(
                provider,
                env_var = name,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}
