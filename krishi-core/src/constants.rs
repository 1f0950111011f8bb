//! Application constants
//!
//! Single source of truth for paths, provider defaults and timeouts.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/gateway.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Default Gemini endpoint (scheme + host)
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default weatherapi.com forecast URL
pub const DEFAULT_WEATHER_FORECAST_URL: &str = "http://api.weatherapi.com/v1/forecast.json";

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable holding the weather API key
pub const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";

/// Default bind address for the REST server
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Days of forecast requested for the crop advisory
pub const DEFAULT_FORECAST_DAYS: u8 = 5;

/// Daily rows kept in the advisory, whatever `forecast_days` requests
pub const MAX_FORECAST_ROWS: usize = 5;

/// Timeout for plain completions, in seconds
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 90;

/// Timeout for search-grounded completions, in seconds
pub const DEFAULT_GROUNDED_TIMEOUT_SECS: u64 = 120;

/// Timeout for weather forecast lookups, in seconds
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 30;

/// Timeout for credential probes, in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Field name under which degraded payloads keep the model text
pub const RAW_RESPONSE_FIELD: &str = "raw_response";

/// Field name for human-readable notes in degraded and error payloads
pub const DETAIL_FIELD: &str = "detail";

/// Request body limit, sized for phone camera photos
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
