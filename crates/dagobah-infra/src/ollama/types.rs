//! Wire types for the Ollama HTTP API.

use serde::{Deserialize, Serialize};

use dagobah_types::gateway::{GenerationOptions, ModelDescriptor};

/// Body of a `POST /api/generate` request.
#[derive(Debug, Serialize)]
pub(super) struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerationOptions,
}

/// One NDJSON line of a streaming generate response.
///
/// The final line carries `done: true` (plus timing stats we ignore); a
/// failure mid-generation arrives as a line with only an `error` field.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateChunk {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a `GET /api/tags` response.
///
/// Ollama wraps the list in `{"models": [...]}`; other compatible servers
/// return the bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum TagsResponse {
    Wrapped { models: Vec<ModelDescriptor> },
    Bare(Vec<ModelDescriptor>),
}

impl TagsResponse {
    pub fn into_models(self) -> Vec<ModelDescriptor> {
        match self {
            TagsResponse::Wrapped { models } => models,
            TagsResponse::Bare(models) => models,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_wire_shape() {
        let request = GenerateRequest {
            model: "llama3:latest".to_string(),
            prompt: "Yoda:".to_string(),
            stream: true,
            options: GenerationOptions::default(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3:latest");
        assert_eq!(json["stream"], true);
        assert_eq!(json["options"]["num_predict"], 200);
        assert!((json["options"]["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-9);
        assert!((json["options"]["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_chunk_with_fragment() {
        let chunk: GenerateChunk =
            serde_json::from_str(r#"{"response":"Hmm, ","done":false}"#).unwrap();
        assert_eq!(chunk.response.as_deref(), Some("Hmm, "));
        assert!(!chunk.done);
        assert!(chunk.error.is_none());
    }

    #[test]
    fn test_chunk_final_line_with_stats() {
        let chunk: GenerateChunk = serde_json::from_str(
            r#"{"response":"","done":true,"total_duration":123456,"eval_count":42}"#,
        )
        .unwrap();
        assert!(chunk.done);
        assert_eq!(chunk.response.as_deref(), Some(""));
    }

    #[test]
    fn test_chunk_error_line() {
        let chunk: GenerateChunk =
            serde_json::from_str(r#"{"error":"model runner has stopped"}"#).unwrap();
        assert_eq!(chunk.error.as_deref(), Some("model runner has stopped"));
        assert!(chunk.response.is_none());
    }

    #[test]
    fn test_tags_wrapped() {
        let tags: TagsResponse =
            serde_json::from_str(r#"{"models":[{"name":"llama3:latest"}]}"#).unwrap();
        let models = tags.into_models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].display_name(), "llama3:latest");
    }

    #[test]
    fn test_tags_bare_array() {
        let tags: TagsResponse = serde_json::from_str(r#"["llama3","mistral:7b"]"#).unwrap();
        let models = tags.into_models();
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].display_name(), "mistral:7b");
    }
}
