//! Whitespace tokenizer.

/// Split text into whitespace-delimited tokens.
///
/// Punctuation stays attached to its word. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(tokenize("  a \t b\n\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_punctuation_attached() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello,", "world!"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }
}
