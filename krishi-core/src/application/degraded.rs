//! Fallback payloads for replies that failed structured validation

use crate::constants::{DETAIL_FIELD, RAW_RESPONSE_FIELD};
use crate::domain::TaskKind;
use serde_json::{Map, Value};

/// A well-formed placeholder result that still carries the model text
#[derive(Debug, Clone, PartialEq)]
pub struct DegradedResult {
    pub task: TaskKind,
    pub raw_text: String,
    /// Placeholders plus echoed request parameters
    pub fields: Map<String, Value>,
    pub detail: String,
}

impl DegradedResult {
    /// Flatten into the payload returned to the caller
    pub fn into_value(self) -> Value {
        let mut payload = self.fields;
        payload.insert(RAW_RESPONSE_FIELD.to_string(), Value::String(self.raw_text));
        payload.insert(DETAIL_FIELD.to_string(), Value::String(self.detail));
        Value::Object(payload)
    }
}

/// Builds the degraded payload for one task
#[derive(Debug, Clone)]
pub struct DegradedResponseBuilder {
    task: TaskKind,
    echoed: Map<String, Value>,
}

impl DegradedResponseBuilder {
    pub fn new(task: TaskKind) -> Self {
        Self {
            task,
            echoed: Map::new(),
        }
    }

    /// Echo a request parameter that is already known (location, commodity, ...)
    pub fn echo(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.echoed.insert(key.into(), value.into());
        self
    }

    pub fn task(&self) -> TaskKind {
        self.task
    }

    pub fn build(&self, raw_text: impl Into<String>) -> DegradedResult {
        let mut fields = self.task.placeholders();
        for (key, value) in &self.echoed {
            fields.insert(key.clone(), value.clone());
        }

        DegradedResult {
            task: self.task,
            raw_text: raw_text.into(),
            fields,
            detail: self.task.degraded_detail().to_string(),
        }
    }
}
