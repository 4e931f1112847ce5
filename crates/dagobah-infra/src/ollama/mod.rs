//! OllamaGateway -- concrete [`ModelGateway`] implementation for a local
//! Ollama server.
//!
//! Two endpoints are used: `GET /api/tags` for the installed-model listing
//! and `POST /api/generate` for streamed completions (see [`streaming`]).

mod streaming;
mod types;

use dagobah_core::gateway::{FragmentStream, ModelGateway};
use dagobah_types::gateway::{GatewayError, GenerationRequest, ModelDescriptor};

use self::types::{GenerateRequest, TagsResponse};

/// Where a default Ollama install listens.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// HTTP gateway to an Ollama server.
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaGateway {
    /// Create a gateway pointed at the default local server.
    ///
    /// The client carries no request timeout: generations legitimately run
    /// for minutes, and a stalled backend stalls the session instead of
    /// aborting an in-flight reply.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for OllamaGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelGateway for OllamaGateway {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, GatewayError> {
        let url = self.url("/api/tags");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Deserialization(format!("tags response: {e}")))?;

        Ok(tags.into_models())
    }

    fn generate(&self, request: GenerationRequest) -> FragmentStream {
        let body = GenerateRequest {
            model: request.model,
            prompt: request.prompt,
            stream: true,
            options: request.options,
        };
        streaming::create_generate_stream(self.client.clone(), self.url("/api/generate"), body)
    }
}
