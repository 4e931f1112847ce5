//! Reply adapter: one generation call, errors kept in-band.
//!
//! The session loop renders whatever this stream yields. A gateway failure
//! -- whether the request itself or a mid-stream read -- becomes a single
//! stylized error fragment and the stream ends, so the loop always receives
//! at least one fragment and a turn can never crash the session.

use async_stream::stream;
use futures_util::{Stream, StreamExt};

use dagobah_types::chat::ChatConfig;
use dagobah_types::gateway::GenerationRequest;

use crate::gateway::ModelGateway;
use crate::prompt;

/// Compose the prompt for `utterance` and issue exactly one generation
/// request, yielding reply fragments in arrival order.
pub fn reply_stream<G: ModelGateway>(
    gateway: &G,
    config: &ChatConfig,
    model: &str,
    utterance: &str,
) -> impl Stream<Item = String> + Send + 'static {
    let request = GenerationRequest {
        model: model.to_string(),
        prompt: prompt::compose(&config.persona, utterance),
        options: config.options.clone(),
    };
    let mut fragments = gateway.generate(request);

    stream! {
        while let Some(item) = fragments.next().await {
            match item {
                Ok(fragment) => yield fragment,
                Err(e) => {
                    tracing::warn!(error = %e, "generation failed mid-turn");
                    yield format!("Error in the Force, there is: {e}");
                    break;
                }
            }
        }
    }
}
