//! Request-scoped value types shared by the task layer and the provider clients

use serde::Serialize;

/// Output format requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    FreeText,
    Json,
}

impl ResponseFormat {
    /// MIME type declared in `generationConfig.responseMimeType`
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            ResponseFormat::FreeText => None,
            ResponseFormat::Json => Some("application/json"),
        }
    }
}

/// Binary content sent inline with the prompt (e.g. a crop photo)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Everything needed to build the outbound generation request for one task
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    prompt: String,
    context: Option<String>,
    attachment: Option<Attachment>,
    wants_grounding: bool,
    temperature: f64,
    response_format: ResponseFormat,
}

impl RequestSpec {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            context: None,
            attachment: None,
            wants_grounding: false,
            temperature: 0.2,
            response_format: ResponseFormat::FreeText,
        }
    }

    /// Second text part sent after the prompt
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_grounding(mut self, wants_grounding: bool) -> Self {
        self.wants_grounding = wants_grounding;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn wants_grounding(&self) -> bool {
        self.wants_grounding
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn response_format(&self) -> ResponseFormat {
        self.response_format
    }
}
