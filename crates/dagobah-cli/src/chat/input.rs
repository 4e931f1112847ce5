//! Line input for the chat loop.
//!
//! Reads one line at a time from stdin under the `You:` prompt, surfacing
//! EOF and Ctrl+C as distinct events. The terminal stays in cooked mode so
//! an interrupt is delivered as a signal even while a reply is streaming.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (surrounding whitespace trimmed).
    Message(String),
    /// End of input (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Prompted line reader over stdin.
pub struct ChatInput {
    reader: BufReader<Stdin>,
    prompt: String,
}

impl ChatInput {
    pub fn new(prompt: String) -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            prompt,
        }
    }

    /// Print the prompt and read one line, racing against Ctrl+C.
    pub async fn read_line(&mut self) -> InputEvent {
        print!("{}", self.prompt);
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        tokio::select! {
            _ = tokio::signal::ctrl_c() => InputEvent::Interrupted,
            read = self.reader.read_line(&mut line) => match read {
                Ok(0) => InputEvent::Eof,
                Ok(_) => InputEvent::Message(line.trim().to_string()),
                Err(_) => InputEvent::Eof,
            },
        }
    }
}
