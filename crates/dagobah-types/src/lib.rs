//! Shared domain types for dagobah.
//!
//! This crate contains the types exchanged between the chat session and the
//! model backend: conversation turns, generation requests, model
//! descriptors, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod gateway;
