//! Typed task inputs built from loosely shaped JSON request bodies.
//!
//! Clients send whatever their forms produce: numbers where text is expected,
//! `null` for untouched fields, empty strings. Every text field therefore goes
//! through the same lenient extraction. Absent or "falsy" values (null, false,
//! zero, empty string, empty list or object) fall back to the field default and
//! any other scalar is rendered as text.

use super::error::GatewayError;
use serde_json::Value;

/// Whether a JSON value counts as provided
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Render a JSON value the way it should appear inside a prompt
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Trimmed text of `key`, or `default` when the field is absent or falsy
fn text_field(body: &Value, key: &str, default: &str) -> String {
    body.get(key)
        .filter(|value| is_truthy(value))
        .map(render_text)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .to_string()
}

/// One earlier turn of a chat conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub from_farmer: bool,
    pub content: String,
}

impl ChatTurn {
    fn speaker(&self) -> &'static str {
        if self.from_farmer { "Farmer" } else { "Assistant" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatQuery {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

impl ChatQuery {
    pub fn from_body(body: &Value) -> Result<Self, GatewayError> {
        let message = text_field(body, "message", "");
        if message.is_empty() {
            return Err(GatewayError::invalid_input("Field 'message' is required."));
        }

        let history = match body.get("history").filter(|value| is_truthy(value)) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| {
                    let content = text_field(item, "content", "");
                    if content.is_empty() {
                        return None;
                    }
                    let role = text_field(item, "role", "user").to_lowercase();
                    Some(ChatTurn {
                        from_farmer: role == "user",
                        content,
                    })
                })
                .collect(),
            Some(_) => {
                return Err(GatewayError::invalid_input(
                    "Field 'history' must be a list if provided.",
                ));
            }
        };

        Ok(Self { message, history })
    }

    /// Transcript sent to the model, ending with the new farmer message
    pub fn transcript(&self) -> String {
        self.history
            .iter()
            .map(|turn| format!("{}: {}", turn.speaker(), turn.content))
            .chain(std::iter::once(format!("Farmer: {}", self.message)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeQuery {
    pub state: String,
    pub scheme_type: String,
}

impl SchemeQuery {
    pub fn from_body(body: &Value) -> Self {
        Self {
            state: text_field(body, "state", "All States"),
            scheme_type: text_field(body, "type", "All Types"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuery {
    pub location: String,
    /// Empty when the caller asked for general prices
    pub commodity: String,
}

impl MarketQuery {
    pub fn from_body(body: &Value) -> Result<Self, GatewayError> {
        let location = text_field(body, "location", "India");
        if location.is_empty() {
            return Err(GatewayError::invalid_input("Field 'location' is required."));
        }
        Ok(Self {
            location,
            commodity: text_field(body, "commodity", ""),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreQuery {
    pub latitude: String,
    pub longitude: String,
    pub city: String,
    pub state: String,
}

impl StoreQuery {
    pub fn from_body(body: &Value) -> Result<Self, GatewayError> {
        let coordinate = |key: &str| {
            body.get(key)
                .filter(|value| is_truthy(value))
                .map(render_text)
        };
        let (Some(latitude), Some(longitude)) = (coordinate("latitude"), coordinate("longitude"))
        else {
            return Err(GatewayError::invalid_input(
                "Fields 'latitude' and 'longitude' are required.",
            ));
        };

        Ok(Self {
            latitude,
            longitude,
            city: text_field(body, "city", ""),
            state: text_field(body, "state", ""),
        })
    }

    /// "city, state" when both are known, otherwise the raw coordinates
    pub fn location_label(&self) -> String {
        if !self.city.is_empty() && !self.state.is_empty() {
            format!("{}, {}", self.city, self.state)
        } else {
            format!("coordinates {}, {}", self.latitude, self.longitude)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryQuery {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl AdvisoryQuery {
    pub fn from_body(body: &Value) -> Result<Self, GatewayError> {
        let city = text_field(body, "city", "");
        if city.is_empty() {
            return Err(GatewayError::invalid_input("Field 'city' is required."));
        }
        Ok(Self {
            city,
            state: text_field(body, "state", ""),
            country: text_field(body, "country", "IN"),
        })
    }

    /// Forecast lookup string: non-empty parts joined by commas
    pub fn location_query(&self) -> String {
        [&self.city, &self.state, &self.country]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
