use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("section [{section}] is missing required field 'endpoint'")]
    MissingEndpoint { section: &'static str },

    #[error("timeout '{field}' must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("forecast_days must be between 1 and 14, got {days}")]
    ForecastDaysOutOfRange { days: u8 },

    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid {variable} value '{value}'")]
    InvalidPort {
        variable: &'static str,
        value: String,
    },
}
