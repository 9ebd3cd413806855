//! HTTP DTOs (Data Transfer Objects) for the generation endpoint.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::generation::{GenerationResult, TrackVersion};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/suno/generate`.
///
/// Fields are kept as raw JSON so that presence is decided before type: a
/// body without an order id is rejected as unpaid whatever the prompt holds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub order_id: Option<Value>,

    #[serde(default)]
    pub prompt: Option<Value>,
}

impl GenerateRequest {
    /// Parse a raw body. An empty body is treated as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    /// The order id, unless absent, `null` or an empty string.
    pub fn order_id(&self) -> Option<&Value> {
        provided(self.order_id.as_ref())
    }

    /// The prompt, unless absent, `null` or an empty string.
    pub fn prompt(&self) -> Option<&Value> {
        provided(self.prompt.as_ref())
    }
}

fn provided(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Reads a provided field as text; any other JSON type is an error.
pub fn text_field(value: &Value) -> Result<String, serde_json::Error> {
    String::deserialize(value)
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub task_id: String,
    pub status: String,
    pub versions_included: usize,
    pub versions: Vec<TrackVersionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackVersionResponse {
    pub version: u32,
    pub audio_url: String,
}

impl From<TrackVersion> for TrackVersionResponse {
    fn from(version: TrackVersion) -> Self {
        Self {
            version: version.version,
            audio_url: version.audio_url,
        }
    }
}

impl From<GenerationResult> for GenerateResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            versions_included: result.versions_included(),
            task_id: result.task_id,
            status: result.status.as_str().to_string(),
            versions: result.versions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Error body: `error` is the stable category, `message` the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Error without a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Error with a human-readable reason.
    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}
