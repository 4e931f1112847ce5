//! Conversation types for the chat session.
//!
//! A session records the user's utterances in a fixed-size sliding window.
//! The window is bookkeeping only: each generation request carries just the
//! latest utterance, so truncation never changes what the backend sees.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gateway::GenerationOptions;

/// Number of turns retained in the conversation window.
pub const HISTORY_WINDOW: usize = 10;

/// Who produced an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Human,
    Yoda,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Human => write!(f, "Human"),
            Speaker::Yoda => write!(f, "Yoda"),
        }
    }
}

/// One utterance within the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered sliding window over the most recent conversation turns.
///
/// Holds at most [`HISTORY_WINDOW`] turns; recording beyond that discards
/// the oldest first.
#[derive(Debug, Default)]
pub struct History {
    turns: Vec<ConversationTurn>,
}

impl History {
    /// Record a turn, evicting the oldest if the window is full.
    pub fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(ConversationTurn {
            speaker,
            text: text.into(),
        });
        if self.turns.len() > HISTORY_WINDOW {
            let overflow = self.turns.len() - HISTORY_WINDOW;
            self.turns.drain(..overflow);
        }
    }

    /// The retained turns, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Explicit configuration for a chat session: the persona instruction that
/// primes every prompt plus the fixed sampling options.
///
/// Passed into the prompt composer and the gateway adapter rather than read
/// from module globals, so both stay pure and testable.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub persona: String,
    pub options: GenerationOptions,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            persona: PERSONA_INSTRUCTION.to_string(),
            options: GenerationOptions::default(),
        }
    }
}

/// The fixed persona instruction prepended to every prompt.
const PERSONA_INSTRUCTION: &str = "You are Yoda from Star Wars. You must always respond like Yoda, using his distinctive \
speech patterns: unusual word order, wisdom-filled responses, and philosophical insights. \
Use phrases like 'Hmm', 'Yes', and speak in his characteristic inverted syntax. \
Keep responses concise but meaningful, as Yoda would. Strong with wisdom, you are.";
