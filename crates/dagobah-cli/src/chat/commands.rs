//! Input line classification for the chat loop.
//!
//! Control words are bare (no slash prefix), case-insensitive, and matched
//! after trimming surrounding whitespace.

use console::style;

/// What the session loop does with a submitted line.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Blank line: re-prompt without doing anything.
    Noop,
    /// End the session with the farewell.
    Quit,
    /// Show the static guidance text.
    Help,
    /// Send the line to the backend as a chat message.
    Chat(String),
}

/// Classify a raw input line.
pub fn classify(input: &str) -> Action {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Action::Noop;
    }

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "bye" => Action::Quit,
        "help" => Action::Help,
        _ => Action::Chat(trimmed.to_string()),
    }
}

/// Print the static help text.
pub fn print_help() {
    println!();
    println!("  {}", style("Help, you seek? Guide you, I will:").bold());
    println!();
    println!("  - Ask questions, you can - wisdom share, I will");
    println!("  - Philosophy discuss, we may");
    println!("  - About the Force, learn you can");
    println!("  - Stories from long ago, tell I might");
    println!("  - Simply chat, enjoy we will");
    println!();
    println!(
        "  {}",
        style("Remember: Patience you must have, young one.").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quit_words() {
        assert_eq!(classify("quit"), Action::Quit);
        assert_eq!(classify("exit"), Action::Quit);
        assert_eq!(classify("bye"), Action::Quit);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("QUIT"), Action::Quit);
        assert_eq!(classify("Bye"), Action::Quit);
        assert_eq!(classify("HeLp"), Action::Help);
    }

    #[test]
    fn test_classify_trims_whitespace() {
        assert_eq!(classify("  exit  "), Action::Quit);
        assert_eq!(classify("\thelp\n"), Action::Help);
    }

    #[test]
    fn test_classify_blank_is_noop() {
        assert_eq!(classify(""), Action::Noop);
        assert_eq!(classify("   "), Action::Noop);
    }

    #[test]
    fn test_classify_chat_passes_trimmed_text() {
        assert_eq!(
            classify("  what is wisdom?  "),
            Action::Chat("what is wisdom?".to_string())
        );
    }

    #[test]
    fn test_classify_control_word_inside_sentence_is_chat() {
        assert_eq!(
            classify("should I quit my job?"),
            Action::Chat("should I quit my job?".to_string())
        );
    }
}
