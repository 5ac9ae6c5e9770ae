//! Element types produced by the aligner.

use serde::{Deserialize, Serialize};

/// Classification of one aligned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Present on both sides and equal.
    Correct,
    /// User text substituted for a different reference token.
    Incorrect,
    /// Present in the reference but absent from the user text.
    Missing,
    /// Present in the user text but absent from the reference.
    Extra,
}

impl ElementKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Missing => "missing",
            Self::Extra => "extra",
        }
    }
}

/// Whether an element is a word or a bare punctuation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementClass {
    Word,
    Punctuation,
}

/// One classified element of an alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedElement {
    pub text: String,
    pub kind: ElementKind,
    /// Reference-side text that would make this element correct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    pub is_word: bool,
    /// Punctuation split off the preceding word; renders without a leading space.
    #[serde(default)]
    pub attached: bool,
}

impl ClassifiedElement {
    pub fn correct(text: impl Into<String>) -> Self {
        Self::build(text.into(), ElementKind::Correct, None)
    }

    pub fn incorrect(text: impl Into<String>, correction: impl Into<String>) -> Self {
        Self::build(text.into(), ElementKind::Incorrect, Some(correction.into()))
    }

    /// Missing elements carry their own text as the correction.
    pub fn missing(text: impl Into<String>) -> Self {
        let text = text.into();
        let correction = Some(text.clone());
        Self::build(text, ElementKind::Missing, correction)
    }

    pub fn extra(text: impl Into<String>) -> Self {
        Self::build(text.into(), ElementKind::Extra, None)
    }

    fn build(text: String, kind: ElementKind, correction: Option<String>) -> Self {
        let is_word = contains_word_char(&text);
        Self {
            text,
            kind,
            correction,
            is_word,
            attached: false,
        }
    }

    /// Mark as the word half of a punctuation split.
    pub fn as_word(mut self) -> Self {
        self.is_word = true;
        self
    }

    /// Mark as the punctuation half of a split, attached to the word before it.
    pub fn as_attached_mark(mut self) -> Self {
        self.is_word = false;
        self.attached = true;
        self
    }

    pub fn class(&self) -> ElementClass {
        if self.is_word {
            ElementClass::Word
        } else {
            ElementClass::Punctuation
        }
    }

    /// True for every kind except `Correct`.
    pub fn needs_attention(&self) -> bool {
        self.kind != ElementKind::Correct
    }
}

fn contains_word_char(text: &str) -> bool {
    text.chars().any(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_carries_own_text_as_correction() {
        let el = ClassifiedElement::missing("dog");
        assert_eq!(el.kind, ElementKind::Missing);
        assert_eq!(el.correction.as_deref(), Some("dog"));
    }

    #[test]
    fn extra_has_no_correction() {
        let el = ClassifiedElement::extra(".");
        assert_eq!(el.correction, None);
        assert_eq!(el.class(), ElementClass::Punctuation);
    }

    #[test]
    fn word_detection() {
        assert!(ClassifiedElement::correct("hello,").is_word);
        assert!(ClassifiedElement::correct("მზე").is_word);
        assert!(ClassifiedElement::correct("_").is_word);
        assert!(!ClassifiedElement::missing("…").is_word);
    }

    #[test]
    fn split_halves_have_fixed_classes() {
        let word = ClassifiedElement::correct("%").as_word();
        assert!(word.is_word);
        assert!(!word.attached);

        let mark = ClassifiedElement::missing(".").as_attached_mark();
        assert_eq!(mark.class(), ElementClass::Punctuation);
        assert!(mark.attached);
        assert_eq!(mark.correction.as_deref(), Some("."));
    }

    #[test]
    fn serializes_snake_case_and_skips_empty_correction() {
        let json = serde_json::to_value(ClassifiedElement::extra("the")).unwrap();
        assert_eq!(json["kind"], "extra");
        assert!(json.get("correction").is_none());

        let json = serde_json::to_value(ClassifiedElement::incorrect("x", "y")).unwrap();
        assert_eq!(json["kind"], "incorrect");
        assert_eq!(json["correction"], "y");
    }

    #[test]
    fn kind_names() {
        assert_eq!(ElementKind::Missing.as_str(), "missing");
        assert!(!ClassifiedElement::correct("a").needs_attention());
        assert!(ClassifiedElement::missing("a").needs_attention());
    }
}
