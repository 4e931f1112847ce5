//! Startup preflight gates.
//!
//! Before the interactive loop starts, two checks must pass: the backend is
//! reachable, and the requested model is installed. Each failure is a hard
//! gate -- the caller reports it and never enters the loop. No retries.

use crate::gateway::ModelGateway;
use crate::matching;

/// Why startup was aborted.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("cannot connect to backend: {source}")]
    Unreachable {
        #[source]
        source: dagobah_types::gateway::GatewayError,
    },

    #[error("model '{requested}' not found")]
    ModelMissing {
        requested: String,
        /// Every installed model, normalized for display.
        available: Vec<String>,
    },
}

/// Run both gates in order: connectivity first, then model availability.
pub async fn run<G: ModelGateway>(gateway: &G, model: &str) -> Result<(), PreflightError> {
    check_connection(gateway).await?;
    check_model(gateway, model).await
}

/// Connectivity gate: one `list_models` round-trip, result discarded.
pub async fn check_connection<G: ModelGateway>(gateway: &G) -> Result<(), PreflightError> {
    gateway
        .list_models()
        .await
        .map(|_| ())
        .map_err(|source| PreflightError::Unreachable { source })
}

/// Availability gate: list the models again and test the requested name
/// with the loose three-way match.
pub async fn check_model<G: ModelGateway>(
    gateway: &G,
    model: &str,
) -> Result<(), PreflightError> {
    let models = gateway
        .list_models()
        .await
        .map_err(|source| PreflightError::Unreachable { source })?;

    let available = matching::display_names(&models);
    tracing::debug!(?available, "installed models");

    if matching::is_available(model, &available) {
        Ok(())
    } else {
        Err(PreflightError::ModelMissing {
            requested: model.to_string(),
            available,
        })
    }
}
