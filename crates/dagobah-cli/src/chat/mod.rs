//! Interactive CLI chat experience.
//!
//! This module implements the full session loop: preflight gates, welcome
//! banner, line classification, streaming replies with a typewriter
//! farewell, and per-turn error recovery. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod typing;

pub use loop_runner::run_chat_loop;
