//! Task identities and the structured-output contract each task expects

use serde_json::{Map, Value, json};
use std::fmt;

/// The generation tasks served by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Diagnosis,
    Chat,
    Schemes,
    MarketPrices,
    NearbyStores,
    Advisory,
}

/// Keys a parsed model reply must carry for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSchema {
    /// Keys that must be present in the reply object
    pub required_keys: &'static [&'static str],
    /// Subset of keys (required or not) whose value must be a JSON array.
    /// In degraded payloads these become empty arrays.
    pub list_keys: &'static [&'static str],
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Diagnosis => "diagnosis",
            TaskKind::Chat => "chat",
            TaskKind::Schemes => "schemes",
            TaskKind::MarketPrices => "market_prices",
            TaskKind::NearbyStores => "nearby_stores",
            TaskKind::Advisory => "advisory",
        }
    }

    pub fn schema(&self) -> TaskSchema {
        match self {
            TaskKind::Diagnosis => TaskSchema {
                required_keys: &["disease", "cure"],
                list_keys: &[],
            },
            TaskKind::Chat => TaskSchema {
                required_keys: &[],
                list_keys: &[],
            },
            TaskKind::Schemes => TaskSchema {
                required_keys: &["schemes"],
                list_keys: &["schemes"],
            },
            TaskKind::MarketPrices => TaskSchema {
                required_keys: &["prices"],
                list_keys: &["prices"],
            },
            TaskKind::NearbyStores => TaskSchema {
                required_keys: &["stores"],
                list_keys: &["stores"],
            },
            TaskKind::Advisory => TaskSchema {
                required_keys: &[],
                list_keys: &[
                    "recommended_crops",
                    "farm_actions",
                    "risk_alerts",
                    "other_suggestions",
                ],
            },
        }
    }

    /// Placeholder fields used when the model reply cannot be validated
    pub fn placeholders(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        match self {
            TaskKind::Diagnosis => {
                fields.insert("disease".into(), json!("Unknown"));
                fields.insert(
                    "cure".into(),
                    json!(
                        "Could not parse structured output. Please retry with a clearer crop image."
                    ),
                );
            }
            TaskKind::NearbyStores => {
                fields.insert("total_stores".into(), json!(0));
            }
            TaskKind::Advisory => {
                fields.insert(
                    "weather_summary".into(),
                    json!("Could not parse structured advisory."),
                );
            }
            TaskKind::Chat | TaskKind::Schemes | TaskKind::MarketPrices => {}
        }
        for key in self.schema().list_keys {
            fields.insert((*key).to_string(), Value::Array(Vec::new()));
        }
        fields
    }

    /// Short note attached to degraded payloads
    pub fn degraded_detail(&self) -> &'static str {
        match self {
            TaskKind::MarketPrices | TaskKind::NearbyStores => {
                "Could not parse structured JSON. The response may contain useful information in raw_response field."
            }
            TaskKind::Advisory => "Could not parse structured advisory.",
            TaskKind::Diagnosis => "Could not parse structured output.",
            TaskKind::Chat | TaskKind::Schemes => "Could not parse structured JSON.",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
