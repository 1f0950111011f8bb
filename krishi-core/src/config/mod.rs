pub mod app;
pub mod error;
pub mod loader;

pub use crate::constants::CONFIG_PATH;
pub use app::{GatewayConfig, GeminiSettings, ServerSettings, TimeoutSettings, WeatherSettings};
pub use error::ConfigError;
