// REST surface tests
//
// Serves the full router on a loopback port and talks to it with reqwest.

#[path = "../common/mod.rs"]
mod common;

use common::{FakeUpstream, candidate, config_for, forecast, serve_router};
use krishi_core::config::GatewayConfig;
use krishi_core::server::{self, ErrorResponse, SchemesRequest};
use krishi_core::AgriGateway;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;

async fn serve(config: GatewayConfig) -> String {
    let gateway = Arc::new(AgriGateway::from_config(config));
    serve_router(server::router(gateway).expect("router")).await
}

async fn serve_with_fakes() -> (FakeUpstream, FakeUpstream, String) {
    let gemini = FakeUpstream::new();
    let weather = FakeUpstream::new();
    let config = config_for(&gemini.spawn().await, &weather.spawn().await);
    (gemini, weather, serve(config).await)
}

async fn detail(response: reqwest::Response) -> String {
    response.json::<ErrorResponse>().await.expect("error body").detail
}

#[tokio::test]
async fn health_reports_running() {
    let (_gemini, _weather, base) = serve_with_fakes().await;
    let body: Value = Client::new()
        .get(format!("{base}/"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    assert_eq!(body, json!({"message": "Crop Disease Detection API is running"}));
}

#[tokio::test]
async fn missing_gemini_key_wins_over_bad_input() {
    let gemini = FakeUpstream::new();
    let mut config = config_for(&gemini.spawn().await, "http://127.0.0.1:9");
    config.gemini.api_key = None;
    let base = serve(config).await;
    let client = Client::new();

    for path in ["/chatbot", "/gov-schemes", "/market-prices", "/nearby-stores", "/weather-crop-advisory"] {
        let response = client
            .post(format!("{base}{path}"))
            .body("definitely not json")
            .send()
            .await
            .expect("send");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        assert_eq!(detail(response).await, "GEMINI_API_KEY is not set on the server.", "{path}");
    }

    let response = client
        .post(format!("{base}/detect-disease"))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(gemini.requests().is_empty());
}

#[tokio::test]
async fn invalid_inputs_answer_bad_request() {
    let (gemini, weather, base) = serve_with_fakes().await;
    let client = Client::new();

    let cases = [
        ("/chatbot", json!({"message": "  "}), "Field 'message' is required."),
        ("/chatbot", json!({"message": "hi", "history": "yesterday"}), "Field 'history' must be a list if provided."),
        ("/market-prices", json!({"location": "   "}), "Field 'location' is required."),
        ("/nearby-stores", json!({"latitude": 19.99}), "Fields 'latitude' and 'longitude' are required."),
        ("/weather-crop-advisory", json!({"state": "Maharashtra"}), "Field 'city' is required."),
    ];
    for (path, body, message) in cases {
        let response = client
            .post(format!("{base}{path}"))
            .json(&body)
            .send()
            .await
            .expect("send");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(detail(response).await, message);
    }
    assert!(gemini.requests().is_empty());
    assert!(weather.requests().is_empty());
}

#[tokio::test]
async fn chat_returns_reply() {
    let (gemini, _weather, base) = serve_with_fakes().await;
    gemini.reply_json(200, candidate("Irrigate early in the morning."));

    let response = Client::new()
        .post(format!("{base}/chatbot"))
        .json(&json!({"message": "How to save water?", "history": []}))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body, json!({"reply": "Irrigate early in the morning."}));
    assert_eq!(gemini.requests()[0].body["generationConfig"]["temperature"], 0.4);
}

#[tokio::test]
async fn empty_chat_reply_is_bad_gateway() {
    let (gemini, _weather, base) = serve_with_fakes().await;
    gemini.reply_json(200, json!({"candidates": []}));

    let response = Client::new()
        .post(format!("{base}/chatbot"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(detail(response).await, "Empty response from model.");
}

#[tokio::test]
async fn schemes_fall_back_and_validate() {
    let (gemini, _weather, base) = serve_with_fakes().await;
    let listing = json!({"state": "Punjab", "type": "All Types", "schemes": [{"name": "PM-KISAN"}]});
    gemini
        .reply_text(400, "unsupported tool")
        .reply_text(400, "unsupported tool")
        .reply_json(200, candidate(&format!("```json\n{listing}\n```")));

    let response = Client::new()
        .post(format!("{base}/gov-schemes"))
        .json(&SchemesRequest {
            state: Some("Punjab".into()),
            scheme_type: None,
        })
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.expect("json"), listing);
    assert_eq!(gemini.requests().len(), 3);
}

#[tokio::test]
async fn provider_outage_is_internal_error() {
    let (gemini, _weather, base) = serve_with_fakes().await;
    gemini.reply_text(500, "backend error");

    let response = Client::new()
        .post(format!("{base}/market-prices"))
        .json(&json!({}))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(detail(response).await.starts_with("Market price request failed: "));
}

#[tokio::test]
async fn diagnosis_accepts_multipart_upload() {
    let (gemini, _weather, base) = serve_with_fakes().await;
    gemini.reply_json(200, candidate("Looks like early blight, maybe."));

    let part = Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name("leaf.png")
        .mime_str("image/png")
        .expect("mime");
    let response = Client::new()
        .post(format!("{base}/detect-disease"))
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["disease"], "Unknown");
    assert_eq!(body["raw_response"], "Looks like early blight, maybe.");
    assert_eq!(
        gemini.requests()[0].body["contents"][0]["parts"][1]["inline_data"]["mime_type"],
        "image/png"
    );
}

#[tokio::test]
async fn diagnosis_rejects_bad_uploads() {
    let (gemini, _weather, base) = serve_with_fakes().await;
    let client = Client::new();

    let text = Part::text("hello").file_name("notes.txt").mime_str("text/plain").expect("mime");
    let response = client
        .post(format!("{base}/detect-disease"))
        .multipart(Form::new().part("file", text))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(response).await, "Please upload a valid image file.");

    let response = client
        .post(format!("{base}/detect-disease"))
        .multipart(Form::new().text("other", "value"))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(response).await, "Image file field 'file' is required.");

    let empty = Part::bytes(Vec::new()).file_name("leaf.jpg").mime_str("image/jpeg").expect("mime");
    let response = client
        .post(format!("{base}/detect-disease"))
        .multipart(Form::new().part("file", empty))
        .send()
        .await
        .expect("send");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(response).await, "Uploaded image is empty.");

    assert!(gemini.requests().is_empty());
}

#[tokio::test]
async fn advisory_endpoint_returns_report() {
    let (gemini, weather, base) = serve_with_fakes().await;
    weather.reply_json(200, forecast(5));
    gemini.reply_json(200, candidate("not json at all"));

    let response = Client::new()
        .post(format!("{base}/weather-crop-advisory"))
        .json(&json!({"city": "Nashik"}))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["location"]["state"], "Maharashtra");
    assert_eq!(body["forecast"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["advisory"]["weather_summary"], "Could not parse structured advisory.");
    assert_eq!(body["advisory"]["raw_response"], "not json at all");
}

#[tokio::test]
async fn credential_probe_reports_both_providers() {
    let (gemini, weather, base) = serve_with_fakes().await;
    gemini.reply_json(200, candidate("Hello!"));
    weather.reply_text(401, r#"{"error":{"code":2006,"message":"API key is invalid."}}"#);

    let body: Value = Client::new()
        .get(format!("{base}/test-api-keys"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");

    assert_eq!(body["gemini_api_key_loaded"], true);
    assert_eq!(body["gemini_api_key_preview"], "gemini-secret...");
    assert_eq!(body["gemini_api_status"], "✅ Working");
    assert!(body.get("gemini_error").is_none());
    assert_eq!(body["weather_api_status"], "❌ Failed: 401");
    assert!(body["weather_error"].as_str().unwrap_or_default().contains("API key is invalid."));
    assert_eq!(weather.requests()[0].query.get("q").map(String::as_str), Some("London"));
    assert!(!weather.requests()[0].query.contains_key("aqi"));
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (_gemini, _weather, base) = serve_with_fakes().await;
    let doc: Value = Client::new()
        .get(format!("{base}/api-doc/openapi.json"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");

    for path in ["/detect-disease", "/chatbot", "/gov-schemes", "/market-prices", "/nearby-stores", "/weather-crop-advisory"] {
        assert!(doc["paths"].get(path).is_some(), "{path}");
    }
}
