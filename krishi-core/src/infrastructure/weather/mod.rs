//! Weather infrastructure module

pub mod client;
pub mod types;

pub use client::{WeatherApiClient, WeatherProvider};
pub use types::{ForecastDay, ForecastEnvelope, ForecastQuery};
