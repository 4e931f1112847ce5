//! Model-name matching for the availability gate.
//!
//! Matching is deliberately loose: a requested name matches an available
//! one on exact equality, or when either is a substring of the other. This
//! tolerates missing or extra version tags (`llama3` vs `llama3:latest`)
//! at the cost of false positives on very short names.

use dagobah_types::gateway::ModelDescriptor;

/// Normalize a descriptor collection to display strings.
pub fn display_names(models: &[ModelDescriptor]) -> Vec<String> {
    models.iter().map(ModelDescriptor::display_name).collect()
}

/// Three-way loose match: exact, requested-in-available, or
/// available-in-requested.
pub fn model_matches(requested: &str, available: &str) -> bool {
    requested == available || available.contains(requested) || requested.contains(available)
}

/// Whether any available name matches the requested one.
pub fn is_available(requested: &str, available: &[String]) -> bool {
    available.iter().any(|name| model_matches(requested, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(model_matches("llama3:latest", "llama3:latest"));
    }

    #[test]
    fn test_requested_without_tag_matches() {
        // "llama3" is a substring of "llama3:latest".
        assert!(is_available("llama3", &["llama3:latest".to_string()]));
    }

    #[test]
    fn test_requested_with_extra_tag_matches() {
        // "llama3" (available) is a substring of "llama3:latest" (requested).
        assert!(is_available("llama3:latest", &["llama3".to_string()]));
    }

    #[test]
    fn test_unrelated_name_fails() {
        assert!(!is_available("llama3", &["mistral:7b".to_string()]));
    }

    #[test]
    fn test_empty_available_list_fails() {
        assert!(!is_available("llama3", &[]));
    }

    #[test]
    fn test_display_names_mixed_shapes() {
        let models: Vec<ModelDescriptor> = serde_json::from_str(
            r#"[{"name":"llama3:latest"},{"model":"mistral:7b"},"phi3"]"#,
        )
        .unwrap();
        assert_eq!(
            display_names(&models),
            vec!["llama3:latest", "mistral:7b", "phi3"]
        );
    }
}
