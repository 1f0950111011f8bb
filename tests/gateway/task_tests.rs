// End-to-end task tests through the real HTTP clients
//
// AgriGateway is built from configuration whose endpoints point at local fakes.

#[path = "../common/mod.rs"]
mod common;

use common::{FakeUpstream, candidate, config_for, forecast};
use krishi_core::application::{AdvisoryQuery, GatewayError, MarketQuery, StoreQuery};
use krishi_core::domain::Attachment;
use krishi_core::AgriGateway;
use reqwest::StatusCode;
use serde_json::json;

async fn fakes() -> (FakeUpstream, FakeUpstream, AgriGateway) {
    let gemini = FakeUpstream::new();
    let weather = FakeUpstream::new();
    let gemini_base = gemini.spawn().await;
    let weather_base = weather.spawn().await;
    let gateway = AgriGateway::from_config(config_for(&gemini_base, &weather_base));
    (gemini, weather, gateway)
}

fn advisory_query() -> AdvisoryQuery {
    AdvisoryQuery::from_body(&json!({"city": "Nashik", "state": "Maharashtra"})).expect("query")
}

#[tokio::test]
async fn advisory_normalises_five_days_in_order() {
    let (gemini, weather, gateway) = fakes().await;
    weather.reply_json(200, forecast(7));
    gemini.reply_json(
        200,
        candidate(r#"```json
{"weather_summary":"Heavy monsoon week","recommended_crops":[{"crop":"Rice","reason":"Standing water","suitability":"high"}],"farm_actions":["Clear drains"],"risk_alerts":["Waterlogging"],"other_suggestions":[]}
```"#),
    );

    let report = gateway.weather_advisory(advisory_query()).await.expect("advisory");

    let dates: Vec<_> = report.forecast.iter().map(|day| day.date.as_str()).collect();
    assert_eq!(dates, ["2026-07-10", "2026-07-11", "2026-07-12", "2026-07-13", "2026-07-14"]);
    assert_eq!(report.forecast[0].temp_min_c, 24.4);
    assert_eq!(report.forecast[1].temp_min_c, 25.4);
    assert_eq!(report.forecast[0].temp_max_c, 31.0);
    assert_eq!(report.forecast[0].rain_mm_total, 12.6);
    assert_eq!(report.forecast[0].condition, "Moderate rain");
    assert_eq!(report.location.city, "Nashik");
    assert_eq!(report.location.lon, Some(73.78));
    assert_eq!(report.advisory["recommended_crops"][0]["crop"], "Rice");

    let lookup = &weather.requests()[0];
    assert_eq!(lookup.path, "/v1/forecast.json");
    assert_eq!(lookup.query.get("key").map(String::as_str), Some("weather-secret"));
    assert_eq!(lookup.query.get("q").map(String::as_str), Some("Nashik,Maharashtra,IN"));
    assert_eq!(lookup.query.get("days").map(String::as_str), Some("5"));
    assert_eq!(lookup.query.get("aqi").map(String::as_str), Some("no"));
    assert_eq!(lookup.query.get("alerts").map(String::as_str), Some("yes"));

    let prompt = gemini.requests()[0].body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(prompt.contains("Location: Nashik, Maharashtra, India."));
    assert!(prompt.contains("\"date\":\"2026-07-14\""));
    assert!(!prompt.contains("2026-07-15"));
}

#[tokio::test]
async fn advisory_forwards_weather_status() {
    let (gemini, weather, gateway) = fakes().await;
    weather.reply_json(400, json!({"error": {"code": 1006, "message": "No matching location found."}}));

    let error = gateway.weather_advisory(advisory_query()).await.expect_err("upstream 400");

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(error.to_string().starts_with("Weather/Gemini request failed: "));
    assert!(error.to_string().contains("No matching location found."));
    assert!(gemini.requests().is_empty());
}

#[tokio::test]
async fn advisory_forwards_gemini_status() {
    let (gemini, weather, gateway) = fakes().await;
    weather.reply_json(200, forecast(5));
    gemini.reply_text(503, "overloaded");

    let error = gateway.weather_advisory(advisory_query()).await.expect_err("upstream 503");
    assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.to_string(), "Weather/Gemini request failed: overloaded");
}

#[tokio::test]
async fn advisory_without_forecast_days_is_bad_gateway() {
    let (gemini, weather, gateway) = fakes().await;
    weather.reply_json(200, json!({"location": {"name": "Nashik"}, "forecast": {"forecastday": []}}));

    let error = gateway.weather_advisory(advisory_query()).await.expect_err("empty");
    assert!(matches!(error, GatewayError::ForecastUnavailable));
    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    assert!(gemini.requests().is_empty());
}

#[tokio::test]
async fn market_prices_degrade_with_echoed_query() {
    let (gemini, _weather, gateway) = fakes().await;
    gemini
        .reply_text(400, "search tool unsupported")
        .reply_json(200, candidate("Onion is around ₹1800 per quintal in Lasalgaon today."));

    let payload = gateway
        .market_prices(MarketQuery::from_body(&json!({"location": "Lasalgaon", "commodity": "Onion"})).expect("query"))
        .await
        .expect("degraded is success")
        .into_value();

    assert_eq!(payload["location"], "Lasalgaon");
    assert_eq!(payload["commodity"], "Onion");
    assert_eq!(payload["prices"], json!([]));
    assert_eq!(payload["raw_response"], "Onion is around ₹1800 per quintal in Lasalgaon today.");
    assert!(payload["detail"].as_str().unwrap_or_default().contains("raw_response"));
    assert_eq!(gemini.requests().len(), 2);
}

#[tokio::test]
async fn nearby_stores_accept_listing() {
    let (gemini, _weather, gateway) = fakes().await;
    let listing = json!({
        "stores": [{"name": "Kisan Agro Centre", "distance": "1.2 km", "rating": 4.3, "is_open": true}],
        "location": "Nashik, Maharashtra",
        "total_stores": 1
    });
    gemini.reply_json(200, candidate(&listing.to_string()));

    let query = StoreQuery::from_body(&json!({
        "latitude": 19.9975, "longitude": 73.7898, "city": "Nashik", "state": "Maharashtra"
    }))
    .expect("query");
    let payload = gateway.nearby_stores(query).await.expect("stores").into_value();

    assert_eq!(payload, listing);
    let body = &gemini.requests()[0].body;
    assert_eq!(body["tools"], json!([{"google_search": {}}]));
    assert!(
        body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .contains("Location: Nashik, Maharashtra (Latitude: 19.9975, Longitude: 73.7898)")
    );
}

#[tokio::test]
async fn diagnosis_inlines_image_as_base64() {
    let (gemini, _weather, gateway) = fakes().await;
    gemini.reply_json(
        200,
        candidate(r#"{"disease":"No disease detected","cure":"Keep spacing for airflow","confidence":"medium"}"#),
    );

    let payload = gateway
        .detect_disease(Some(Attachment::new("image/jpeg", b"leaf".to_vec())))
        .await
        .expect("diagnosis")
        .into_value();

    assert_eq!(payload["disease"], "No disease detected");
    let part = &gemini.requests()[0].body["contents"][0]["parts"][1];
    assert_eq!(part, &json!({"inline_data": {"mime_type": "image/jpeg", "data": "bGVhZg=="}}));
}
