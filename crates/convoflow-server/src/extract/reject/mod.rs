//! Drop-in replacements for the axum extractors with JSON error bodies.

mod enhanced_json;
mod enhanced_path;
mod enhanced_query;
mod validated_json;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;
pub use self::validated_json::ValidateJson;

/// Keeps the first lines of a rejection message and caps its length.
fn sanitize_error_message(message: &str, max_lines: usize, max_chars: usize) -> String {
    message
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message() {
        assert_eq!(sanitize_error_message("a\nb\nc", 2, 100), "a b");
        assert_eq!(sanitize_error_message("abcdef", 3, 4), "abcd");
    }
}
