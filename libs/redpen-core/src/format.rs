//! Caller-side helpers around the aligner: submission cleanup and display.

use serde::{Deserialize, Serialize};

use crate::align::Aligner;
use crate::types::{ClassifiedElement, ElementKind};

/// Marks that must be followed by a space in a formatted submission.
const SPACED_MARKS: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Options for [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Format the submission first and report missing elements.
    pub highlighting: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { highlighting: true }
    }
}

/// Normalize spacing in a learner's submission.
///
/// Inserts a space after `. , ! ? ; :` when a non-space character follows
/// directly (runs of marks such as `...` stay together), collapses
/// whitespace runs and trims both ends.
pub fn format_submission(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        spaced.push(ch);
        if SPACED_MARKS.contains(&ch) {
            if let Some(&next) = chars.peek() {
                if !next.is_whitespace() && !SPACED_MARKS.contains(&next) {
                    spaced.push(' ');
                }
            }
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Align a submission the way a feedback view consumes it.
///
/// With highlighting on, the submission is formatted before alignment.
/// With it off, the raw submission is aligned and `Missing` elements are
/// dropped, leaving only what the learner actually wrote.
pub fn compare(
    aligner: &Aligner,
    user_text: &str,
    reference_text: &str,
    options: CompareOptions,
) -> Vec<ClassifiedElement> {
    if options.highlighting {
        aligner.align(&format_submission(user_text), reference_text)
    } else {
        aligner
            .align(user_text, reference_text)
            .into_iter()
            .filter(|e| e.kind != ElementKind::Missing)
            .collect()
    }
}

/// Join element texts into a single display string.
///
/// Elements are separated by one space, except that punctuation split off a
/// word attaches to the element before it.
pub fn join_for_display(elements: &[ClassifiedElement]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 && !element.attached {
            out.push(' ');
        }
        out.push_str(&element.text);
    }
    out
}
