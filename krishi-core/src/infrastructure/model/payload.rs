//! `generateContent` request bodies and the variant builder
//!
//! A grounded request is expanded into three variants that differ only in the
//! declared search tool: `google_search`, then `google_search_retrieval`, then
//! no tool at all. Providers accept one of the two declaration syntaxes, and the
//! final tool-less variant is always accepted.

use crate::domain::RequestSpec;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::fmt;

/// Search capability declared on a request variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    GoogleSearch,
    GoogleSearchRetrieval,
    None,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::GoogleSearch => "google_search",
            Capability::GoogleSearchRetrieval => "google_search_retrieval",
            Capability::None => "none",
        }
    }

    fn tools(&self) -> Option<Vec<ToolDeclaration>> {
        match self {
            Capability::GoogleSearch => Some(vec![ToolDeclaration {
                google_search: Some(EmptyConfig {}),
                google_search_retrieval: None,
            }]),
            Capability::GoogleSearchRetrieval => Some(vec![ToolDeclaration {
                google_search: None,
                google_search_retrieval: Some(EmptyConfig {}),
            }]),
            Capability::None => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate request body, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadVariant {
    capability: Capability,
    body: GenerateContentRequest,
}

impl PayloadVariant {
    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn body(&self) -> &GenerateContentRequest {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDeclaration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 (standard alphabet, padded)
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDeclaration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<EmptyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search_retrieval: Option<EmptyConfig>,
}

/// Serializes as `{}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyConfig {}

/// Builds the ordered request variants for a [`RequestSpec`]
pub struct PayloadBuilder;

impl PayloadBuilder {
    /// Capabilities tried for a grounded request, in priority order
    pub const GROUNDED_ORDER: [Capability; 3] = [
        Capability::GoogleSearch,
        Capability::GoogleSearchRetrieval,
        Capability::None,
    ];

    /// One variant without tools, or three when grounding is wanted
    pub fn build(spec: &RequestSpec) -> Vec<PayloadVariant> {
        let base = Self::base_request(spec);
        let capabilities: &[Capability] = if spec.wants_grounding() {
            &Self::GROUNDED_ORDER
        } else {
            &[Capability::None]
        };

        capabilities
            .iter()
            .map(|capability| PayloadVariant {
                capability: *capability,
                body: GenerateContentRequest {
                    tools: capability.tools(),
                    ..base.clone()
                },
            })
            .collect()
    }

    fn base_request(spec: &RequestSpec) -> GenerateContentRequest {
        let mut parts = vec![Part::Text {
            text: spec.prompt().to_string(),
        }];
        if let Some(context) = spec.context() {
            parts.push(Part::Text {
                text: context.to_string(),
            });
        }
        if let Some(attachment) = spec.attachment() {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: attachment.mime_type.clone(),
                    data: STANDARD.encode(&attachment.bytes),
                },
            });
        }

        GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                temperature: spec.temperature(),
                response_mime_type: spec.response_format().mime_type().map(str::to_string),
            },
            tools: None,
        }
    }
}
