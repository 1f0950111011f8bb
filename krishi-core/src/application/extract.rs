//! Never-failing accessors over provider envelopes

use serde_json::Value;

/// JSON pointer to the first text part of the first candidate
pub const CANDIDATE_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// String at `pointer`, or `None` when any level is missing or mistyped
pub fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Pulls the generated text out of a `generateContent` envelope
pub struct TextExtractor;

impl TextExtractor {
    /// First text of the first candidate, trimmed; empty when absent
    pub fn extract(envelope: &Value) -> String {
        str_at(envelope, CANDIDATE_TEXT_POINTER)
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}
