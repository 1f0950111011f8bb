//! Fence stripping, strict JSON parsing and per-task key validation

use super::degraded::{DegradedResponseBuilder, DegradedResult};
use crate::domain::TaskSchema;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Why a model reply was not accepted as structured output
#[derive(Debug, Error)]
pub enum OutputFormatError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("reply is not a JSON object")]
    NotAnObject,
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("key '{0}' must be a list")]
    NotAList(&'static str),
}

/// Either the validated reply or a placeholder carrying the raw text
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResult {
    Validated(Map<String, Value>),
    Degraded(DegradedResult),
}

impl ParsedResult {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ParsedResult::Degraded(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            ParsedResult::Validated(map) => Value::Object(map),
            ParsedResult::Degraded(degraded) => degraded.into_value(),
        }
    }
}

pub struct StructuredOutputParser;

impl StructuredOutputParser {
    /// Trim and drop every markdown fence marker, tagged or bare
    pub fn strip_fences(raw: &str) -> String {
        raw.trim()
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    }

    /// Strict parse and schema check, no repair of malformed JSON
    pub fn validate(raw: &str, schema: &TaskSchema) -> Result<Map<String, Value>, OutputFormatError> {
        let cleaned = Self::strip_fences(raw);
        let map = match serde_json::from_str::<Value>(&cleaned)? {
            Value::Object(map) => map,
            _ => return Err(OutputFormatError::NotAnObject),
        };

        for key in schema.required_keys {
            let value = map.get(*key).ok_or(OutputFormatError::MissingKey(*key))?;
            if schema.list_keys.contains(key) && !value.is_array() {
                return Err(OutputFormatError::NotAList(*key));
            }
        }

        Ok(map)
    }

    /// Validate, or fall back to the degraded payload without raising
    pub fn parse(raw: &str, schema: &TaskSchema, fallback: &DegradedResponseBuilder) -> ParsedResult {
        match Self::validate(raw, schema) {
            Ok(map) => ParsedResult::Validated(map),
            Err(error) => {
                warn!(
                    task = %fallback.task(),
                    %error,
                    raw_len = raw.len(),
                    "Model reply failed structured validation, degrading"
                );
                ParsedResult::Degraded(fallback.build(raw))
            }
        }
    }
}
