//! Prompt texts for each task

use super::query::{MarketQuery, SchemeQuery, StoreQuery};
use crate::domain::{DailyForecast, ResolvedLocation};

pub const DIAGNOSIS_PROMPT: &str = "You are an agriculture expert. Analyze this crop image and detect disease if present. \
Return strictly valid JSON with this schema: \
{\"disease\":\"...\",\"cure\":\"...\",\"confidence\":\"low|medium|high\"}. \
If healthy, set disease to 'No disease detected' and give preventive care in cure.";

pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful agriculture assistant for farmers using our app. \
Our app supports crop disease detection, land measurement, and other farm utilities. \
Give practical, safe, low-cost, step-by-step advice in simple language. \
If location-specific or uncertain, ask a short follow-up question before assuming. \
Keep replies concise and action-oriented.";

pub const PROBE_PROMPT: &str = "Say hello";

pub fn schemes_prompt(query: &SchemeQuery) -> String {
    format!(
        "Find Indian government schemes only for farmers from official or reliable public sources. \
         Use internet search results to provide up-to-date information. \
         Filter preference: state='{state}', type='{scheme_type}'. \
         Return STRICTLY valid JSON with this schema: \
         {{\"state\":\"...\",\"type\":\"...\",\"schemes\":[{{\"name\":\"...\",\"state\":\"...\",\
         \"type\":\"...\",\"summary\":\"...\",\"eligibility\":\"...\",\"benefits\":[\"...\"],\
         \"how_to_apply\":\"...\",\"official_links\":[\"https://...\"]}}]}}. \
         Rules: include only schemes for farmers, exclude non-farmer schemes, and include official links whenever possible.",
        state = query.state,
        scheme_type = query.scheme_type,
    )
}

pub fn market_prompt(query: &MarketQuery) -> String {
    let location = &query.location;
    let (search_query, focus) = if query.commodity.is_empty() {
        (
            format!("Current market prices of vegetables and agricultural commodities in {location} today"),
            "common vegetables and crops like tomato, onion, potato, rice, wheat".to_string(),
        )
    } else {
        (
            format!("Current market price of {} in {location} today", query.commodity),
            query.commodity.clone(),
        )
    };

    format!(
        "Find current market prices for agricultural commodities in {location}. \
         Search query: {search_query}. \
         Use internet search to get the most recent and accurate pricing information from reliable sources \
         like government mandi boards, agricultural market websites, or official price reporting systems. \
         Return STRICTLY valid JSON with this schema: \
         {{\"location\":\"...\",\"date\":\"...\",\"prices\":[{{\"commodity\":\"...\",\"variety\":\"...\",\
         \"unit\":\"...\",\"min_price\":number,\"max_price\":number,\"modal_price\":number,\
         \"market\":\"...\",\"trend\":\"rising|falling|stable\"}}],\"source\":\"...\",\"last_updated\":\"...\"}}. \
         Focus on: {focus}. \
         Include prices in Indian Rupees (₹) per quintal or per kg as appropriate. \
         If specific commodity is requested, prioritize that commodity but include related varieties."
    )
}

pub fn stores_prompt(query: &StoreQuery) -> String {
    format!(
        "Find nearby agricultural stores, pesticide shops, and farming supply stores. \
         Location: {label} (Latitude: {lat}, Longitude: {lon}). \
         Use internet search to find real agricultural stores, pesticide dealers, and farming supply shops in this area. \
         Return STRICTLY valid JSON with this schema: \
         {{\"stores\":[{{\"name\":\"...\",\"distance\":\"X.X km\",\"address\":\"...\",\"rating\":number,\
         \"is_open\":boolean,\"phone\":\"+91 XXXXXXXXXX\",\"latitude\":number,\"longitude\":number}}],\
         \"location\":\"...\",\"total_stores\":number}}. \
         Include real store names, accurate addresses, phone numbers, and coordinates. \
         Calculate approximate distance from the given coordinates. \
         Prioritize stores that sell pesticides, fertilizers, and agricultural supplies.",
        label = query.location_label(),
        lat = query.latitude,
        lon = query.longitude,
    )
}

pub fn advisory_prompt(location: &ResolvedLocation, forecast: &[DailyForecast]) -> Result<String, serde_json::Error> {
    let forecast_json = serde_json::to_string(forecast)?;
    Ok(format!(
        "You are an agriculture advisory expert. Based on the weather forecast, suggest crops to cultivate \
         and practical farm actions for farmers. Keep language simple and actionable. \
         Return STRICTLY valid JSON with this schema: \
         {{\"weather_summary\":\"...\",\
         \"recommended_crops\":[{{\"crop\":\"...\",\"reason\":\"...\",\"suitability\":\"high|medium|low\"}}],\
         \"farm_actions\":[\"...\"],\"risk_alerts\":[\"...\"],\"other_suggestions\":[\"...\"]}}. \
         Location: {}, {}, {}. \
         Forecast data: {forecast_json}",
        location.city, location.state, location.country,
    ))
}
