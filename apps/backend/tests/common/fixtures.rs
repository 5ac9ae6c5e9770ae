//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};

/// A short passage used as the canonical reference in tests.
pub const REFERENCE: &str = "The quick brown fox jumps over the lazy dog.";

/// Build a compare request body.
pub fn compare_request(user_text: &str, reference_text: &str) -> Value {
    json!({
        "user_text": user_text,
        "reference_text": reference_text,
    })
}

/// Build a compare request body with an explicit highlighting flag.
pub fn compare_request_with_highlighting(
    user_text: &str,
    reference_text: &str,
    highlighting: bool,
) -> Value {
    json!({
        "user_text": user_text,
        "reference_text": reference_text,
        "highlighting": highlighting,
    })
}

/// Generate text with the given number of characters.
pub fn text_of_len(len: usize) -> String {
    "a".repeat(len)
}
