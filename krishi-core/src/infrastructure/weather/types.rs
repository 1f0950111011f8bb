//! weatherapi.com forecast wire types
//!
//! Every field is optional on the wire; missing values are filled in by the
//! advisory normalizer.

use serde::{Deserialize, Serialize};

/// Query parameters (besides the key) for `forecast.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastQuery {
    pub q: String,
    pub days: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<&'static str>,
}

impl ForecastQuery {
    /// Forecast with alerts and without air quality, as used by the advisory
    pub fn advisory(location: impl Into<String>, days: u8) -> Self {
        Self {
            q: location.into(),
            days,
            aqi: Some("no"),
            alerts: Some("yes"),
        }
    }

    /// Bare one-day lookup used to check the credential
    pub fn probe(location: impl Into<String>) -> Self {
        Self {
            q: location.into(),
            days: 1,
            aqi: None,
            alerts: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastEnvelope {
    #[serde(default)]
    pub location: Option<LocationInfo>,
    #[serde(default)]
    pub forecast: Option<ForecastBlock>,
}

impl ForecastEnvelope {
    pub fn days(&self) -> &[ForecastDay] {
        self.forecast
            .as_ref()
            .map(|block| block.forecastday.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationInfo {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastBlock {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub day: DaySummary,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DaySummary {
    pub mintemp_c: Option<f64>,
    pub maxtemp_c: Option<f64>,
    pub avghumidity: Option<f64>,
    pub totalprecip_mm: Option<f64>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    pub text: Option<String>,
}
