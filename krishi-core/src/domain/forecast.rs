use serde::Serialize;
use utoipa::ToSchema;

/// One day of forecast in the fixed shape sent to the model and the caller
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyForecast {
    pub date: String,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_avg: f64,
    pub rain_mm_total: f64,
    pub condition: String,
}

/// Location as resolved by the forecast provider, falling back to the query
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResolvedLocation {
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Round to one decimal place the way Python's `round(x, 1)` does.
///
/// The exact binary value is rounded, so `0.35` (stored just below) gives
/// `0.3`. Exact ties such as `1.25` go to the even digit.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Only odd multiples of 0.25 sit exactly halfway between two tenths.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round_ties_even() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
