//! Alignment policy: lookahead window and punctuation set.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Characters stripped when checking for a punctuation-only difference.
pub const DEFAULT_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'', '-', '–', '—', '…',
];

/// Resynchronization window. From cursor `p` the scan visits `p+1..p+lookahead`.
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Tuning levers for the aligner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignerConfig {
    pub lookahead: usize,
    pub punctuation: Vec<char>,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            punctuation: DEFAULT_PUNCTUATION.to_vec(),
        }
    }
}

impl AlignerConfig {
    /// Build a validated configuration.
    pub fn new(lookahead: usize, punctuation: impl IntoIterator<Item = char>) -> Result<Self> {
        let config = Self {
            lookahead,
            punctuation: punctuation.into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants `new` enforces, for configs built by hand or deserialized.
    pub fn validate(&self) -> Result<()> {
        if self.lookahead == 0 {
            return Err(ConfigError::InvalidLookahead {
                value: self.lookahead,
            });
        }
        if self.punctuation.is_empty() {
            return Err(ConfigError::EmptyPunctuation);
        }
        if let Some(&ch) = self
            .punctuation
            .iter()
            .find(|c| c.is_whitespace() || c.is_alphanumeric())
        {
            return Err(ConfigError::InvalidPunctuation { ch });
        }
        Ok(())
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }
}
