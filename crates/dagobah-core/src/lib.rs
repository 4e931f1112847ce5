//! Session logic for dagobah.
//!
//! This crate defines the backend gateway "port" ([`gateway::ModelGateway`])
//! that the infrastructure layer implements, plus the pure pieces of a chat
//! turn: prompt composition, model-name matching, startup preflight gates,
//! and the reply adapter that keeps generation failures in-band. Depends
//! only on `dagobah-types` -- never on an HTTP or IO crate.

pub mod gateway;
pub mod matching;
pub mod preflight;
pub mod prompt;
pub mod reply;
