//! Core alignment engine for proofreading exercises.
//!
//! Provides:
//! - Whitespace tokenizer for submitted and reference passages
//! - Token comparison with a punctuation-aware tier
//! - Bounded-lookahead alignment producing classified elements
//! - Caller-side formatting helpers (submission cleanup, display joining)

pub mod align;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod tokenize;
pub mod types;

pub use align::{align, Aligner};
pub use compare::{are_equal, normalize, same_word_different_punctuation, PunctuationDiff};
pub use config::{AlignerConfig, DEFAULT_LOOKAHEAD, DEFAULT_PUNCTUATION};
pub use error::{ConfigError, Result};
pub use format::{compare, format_submission, join_for_display, CompareOptions};
pub use tokenize::tokenize;
pub use types::{ClassifiedElement, ElementClass, ElementKind};
