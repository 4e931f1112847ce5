//! Prompt composition.

/// Build the full request text for one turn: the persona instruction, the
/// user's utterance under a `Human:` tag, and a trailing `Yoda:` cue that
/// primes the backend to continue in-character.
///
/// Pure and deterministic; each turn carries only the latest utterance.
pub fn compose(persona: &str, utterance: &str) -> String {
    format!("{persona}\n\nHuman: {utterance}\n\nYoda:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_layout() {
        let prompt = compose("Speak like Yoda, you must.", "hello");
        assert_eq!(
            prompt,
            "Speak like Yoda, you must.\n\nHuman: hello\n\nYoda:"
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("persona", "question");
        let b = compose("persona", "question");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_preserves_utterance_verbatim() {
        let prompt = compose("p", "  spaced  input ");
        assert!(prompt.contains("Human:   spaced  input "));
    }
}
