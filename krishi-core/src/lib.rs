pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{AgriGateway, GatewayError, ParsedResult};
pub use config::{ConfigError, GatewayConfig};
pub use infrastructure::{model, weather};

#[cfg(feature = "server")]
pub use infrastructure::server;
