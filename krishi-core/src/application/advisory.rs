//! Forecast normalisation for the weather crop advisory

use super::query::AdvisoryQuery;
use crate::domain::{DailyForecast, ResolvedLocation, round_one_decimal};
use crate::infrastructure::weather::{ForecastDay, ForecastEnvelope};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Response of the advisory task
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdvisoryReport {
    pub location: ResolvedLocation,
    pub forecast: Vec<DailyForecast>,
    /// Validated model object, or the degraded placeholder
    #[schema(value_type = Object)]
    pub advisory: Value,
}

/// Fixed-shape daily rows, at most `limit`, in provider order
pub fn normalize_forecast(days: &[ForecastDay], limit: usize) -> Vec<DailyForecast> {
    days.iter()
        .take(limit)
        .map(|entry| {
            let day = &entry.day;
            DailyForecast {
                date: entry.date.clone(),
                temp_min_c: round_one_decimal(day.mintemp_c.unwrap_or_default()),
                temp_max_c: round_one_decimal(day.maxtemp_c.unwrap_or_default()),
                humidity_avg: round_one_decimal(day.avghumidity.unwrap_or_default()),
                rain_mm_total: round_one_decimal(day.totalprecip_mm.unwrap_or_default()),
                condition: day
                    .condition
                    .as_ref()
                    .and_then(|condition| condition.text.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
            }
        })
        .collect()
}

/// Provider-resolved names, falling back to what the caller asked for
pub fn resolve_location(envelope: &ForecastEnvelope, query: &AdvisoryQuery) -> ResolvedLocation {
    let info = envelope.location.clone().unwrap_or_default();
    ResolvedLocation {
        city: info.name.unwrap_or_else(|| query.city.clone()),
        state: info.region.unwrap_or_else(|| query.state.clone()),
        country: info.country.unwrap_or_else(|| query.country.clone()),
        lat: info.lat,
        lon: info.lon,
    }
}
