//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from redpen-core
pub use redpen_core::{AlignerConfig, ClassifiedElement, CompareOptions, ElementClass, ElementKind};

/// Compare request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub user_text: String,
    pub reference_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighting: Option<bool>,
}

impl CompareRequest {
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            highlighting: self.highlighting.unwrap_or(true),
        }
    }
}

/// Compare response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub elements: Vec<ClassifiedElement>,
    /// Number of elements whose kind is not `correct`.
    pub issues: usize,
}

impl CompareResponse {
    pub fn new(elements: Vec<ClassifiedElement>) -> Self {
        let issues = elements.iter().filter(|e| e.needs_attention()).count();
        Self { elements, issues }
    }
}

/// Active aligner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub lookahead: usize,
    pub punctuation: String,
    pub max_text_chars: usize,
}

impl ConfigResponse {
    pub fn new(config: &AlignerConfig, max_text_chars: usize) -> Self {
        Self {
            lookahead: config.lookahead,
            punctuation: config.punctuation.iter().collect(),
            max_text_chars,
        }
    }
}
