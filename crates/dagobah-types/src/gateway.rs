//! Request/response types for the model backend.
//!
//! These types model the data shapes the chat session exchanges with a
//! model-serving backend: installed-model descriptors, generation requests
//! with their sampling options, and error handling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One installed model as reported by the backend's model listing.
///
/// Backends disagree on the shape of this record: most return a mapping
/// with a `name` field, some spell it `model` or `id`, and a few return a
/// bare string. The untagged enum accepts all of them; comparison always
/// goes through [`ModelDescriptor::display_name`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelDescriptor {
    Record(ModelRecord),
    Bare(String),
}

/// The mapping form of a model descriptor.
///
/// Unknown keys are retained in `extra` so a record carrying none of the
/// known identifier fields can still be rendered for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ModelDescriptor {
    /// Normalize this descriptor to a display string.
    ///
    /// Tries `name`, then `model`, then `id`; a record with none of those
    /// falls back to its JSON serialization.
    pub fn display_name(&self) -> String {
        match self {
            ModelDescriptor::Bare(s) => s.clone(),
            ModelDescriptor::Record(record) => record
                .name
                .clone()
                .or_else(|| record.model.clone())
                .or_else(|| record.id.clone())
                .unwrap_or_else(|| {
                    serde_json::Value::Object(record.extra.clone()).to_string()
                }),
        }
    }
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sampling configuration sent with every generation request.
///
/// `max_tokens` is serialized as `num_predict`, the field name the Ollama
/// generate endpoint honors for the output cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub top_p: f64,
    #[serde(rename = "num_predict")]
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.9,
            max_tokens: 200,
        }
    }
}

/// Request to the backend for one streamed completion.
///
/// Built fresh per turn from the chat configuration and the latest user
/// utterance; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

/// Errors from backend gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("cannot reach backend: {0}")]
    Connect(String),

    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("stream error: {0}")]
    Stream(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_name_field() {
        let descriptor: ModelDescriptor =
            serde_json::from_str(r#"{"name":"llama3:latest","size":42}"#).unwrap();
        assert_eq!(descriptor.display_name(), "llama3:latest");
    }

    #[test]
    fn test_descriptor_model_field() {
        let descriptor: ModelDescriptor =
            serde_json::from_str(r#"{"model":"mistral:7b"}"#).unwrap();
        assert_eq!(descriptor.display_name(), "mistral:7b");
    }

    #[test]
    fn test_descriptor_id_field() {
        let descriptor: ModelDescriptor = serde_json::from_str(r#"{"id":"phi3"}"#).unwrap();
        assert_eq!(descriptor.display_name(), "phi3");
    }

    #[test]
    fn test_descriptor_bare_string() {
        let descriptor: ModelDescriptor = serde_json::from_str(r#""gemma:2b""#).unwrap();
        assert_eq!(descriptor.display_name(), "gemma:2b");
    }

    #[test]
    fn test_descriptor_unknown_shape_falls_back_to_json() {
        let descriptor: ModelDescriptor =
            serde_json::from_str(r#"{"digest":"abc123"}"#).unwrap();
        assert!(descriptor.display_name().contains("abc123"));
    }

    #[test]
    fn test_descriptor_name_wins_over_model() {
        let descriptor: ModelDescriptor =
            serde_json::from_str(r#"{"name":"llama3","model":"other"}"#).unwrap();
        assert_eq!(descriptor.display_name(), "llama3");
    }

    #[test]
    fn test_options_defaults() {
        let options = GenerationOptions::default();
        assert!((options.temperature - 0.8).abs() < f64::EPSILON);
        assert!((options.top_p - 0.9).abs() < f64::EPSILON);
        assert_eq!(options.max_tokens, 200);
    }

    #[test]
    fn test_options_serialize_num_predict() {
        let json = serde_json::to_value(GenerationOptions::default()).unwrap();
        assert_eq!(json["num_predict"], 200);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Http {
            status: 404,
            body: "model not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("model not found"));
    }
}
