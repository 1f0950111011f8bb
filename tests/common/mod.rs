// Shared fixtures: scripted stand-ins for Gemini and weatherapi.com
//
// Each fake answers every path with the next scripted reply and records what
// it received, so tests can assert on variant order, query keys and bodies.

#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use krishi_core::config::GatewayConfig;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

// ============================================================================
// Fake upstream
// ============================================================================

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Default)]
struct UpstreamState {
    replies: VecDeque<Reply>,
    requests: Vec<Recorded>,
}

#[derive(Clone, Default)]
pub struct FakeUpstream {
    state: Arc<Mutex<UpstreamState>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, status: u16, body: Value) -> &Self {
        self.push(status, body.to_string(), None)
    }

    pub fn reply_text(&self, status: u16, body: &str) -> &Self {
        self.push(status, body.to_string(), None)
    }

    /// Reply only after `delay`, to exercise client timeouts
    pub fn reply_slowly(&self, delay: Duration, body: Value) -> &Self {
        self.push(200, body.to_string(), Some(delay))
    }

    fn push(&self, status: u16, body: String, delay: Option<Duration>) -> &Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.state
            .lock()
            .expect("lock")
            .replies
            .push_back(Reply { status, body, delay });
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().expect("lock").requests.clone()
    }

    /// Serve on an ephemeral loopback port and return the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new().fallback(answer).with_state(self.clone());
        serve_router(app).await
    }
}

async fn answer(
    State(upstream): State<FakeUpstream>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let reply = {
        let mut state = upstream.state.lock().expect("lock");
        state.requests.push(Recorded {
            method,
            path: uri.path().to_string(),
            query,
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });
        state.replies.pop_front()
    };

    let Some(reply) = reply else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "unscripted request").into_response();
    };
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

pub async fn serve_router(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

// ============================================================================
// Payload helpers
// ============================================================================

pub fn candidate(text: &str) -> Value {
    json!({"candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]})
}

pub fn forecast(days: usize) -> Value {
    let forecastday: Vec<Value> = (0..days)
        .map(|n| {
            json!({
                "date": format!("2026-07-{:02}", n + 10),
                "day": {
                    "mintemp_c": 24.36 + n as f64,
                    "maxtemp_c": 31.04,
                    "avghumidity": 81,
                    "totalprecip_mm": 12.56,
                    "condition": {"text": "Moderate rain"}
                }
            })
        })
        .collect();
    json!({
        "location": {"name": "Nashik", "region": "Maharashtra", "country": "India", "lat": 20.0, "lon": 73.78},
        "forecast": {"forecastday": forecastday}
    })
}

/// Configuration pointing both providers at the fakes, with keys set
pub fn config_for(gemini_base: &str, weather_base: &str) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.gemini.endpoint = gemini_base.to_string();
    config.gemini.model = "gemini-test".to_string();
    config.gemini.api_key = Some("gemini-secret".to_string());
    config.weather.forecast_url = format!("{weather_base}/v1/forecast.json");
    config.weather.api_key = Some("weather-secret".to_string());
    config
}

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-test:generateContent";
