//! Infrastructure layer for dagobah.
//!
//! Contains the concrete implementation of the `ModelGateway` trait defined
//! in `dagobah-core`: an HTTP client for a local Ollama server with NDJSON
//! response streaming.

pub mod ollama;
