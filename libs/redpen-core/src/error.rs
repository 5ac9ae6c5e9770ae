//! Error types for redpen-core.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building an aligner configuration.
///
/// Alignment itself is total over its inputs and never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("lookahead must be at least 1, got {value}")]
    InvalidLookahead { value: usize },

    #[error("punctuation set is empty")]
    EmptyPunctuation,

    #[error("invalid punctuation character {ch:?}: whitespace and alphanumerics are not allowed")]
    InvalidPunctuation { ch: char },
}
