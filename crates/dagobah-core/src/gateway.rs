//! ModelGateway trait definition.
//!
//! This is the abstraction the session loop talks to. Uses a native async
//! fn for `list_models`, and `Pin<Box<dyn Stream>>` for `generate` (the
//! fragment stream must be `'static` so a turn can consume it without
//! borrowing the gateway).

use std::pin::Pin;

use futures_util::Stream;

use dagobah_types::gateway::{GatewayError, GenerationRequest, ModelDescriptor};

/// A finite stream of reply text fragments, consumed forward-only.
pub type FragmentStream =
    Pin<Box<dyn Stream<Item = Result<String, GatewayError>> + Send + 'static>>;

/// Trait for model-serving backends.
///
/// Two operations, matching what the session actually uses: enumerate the
/// installed models (preflight) and stream one completion (per turn).
///
/// Implementations live in `dagobah-infra` (e.g., `OllamaGateway`).
pub trait ModelGateway: Send + Sync {
    /// Human-readable backend name (e.g., "ollama").
    fn name(&self) -> &str;

    /// List the models installed on the backend.
    fn list_models(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ModelDescriptor>, GatewayError>> + Send;

    /// Start a streaming completion. The stream is finite and ends when the
    /// backend signals completion.
    fn generate(&self, request: GenerationRequest) -> FragmentStream;
}
