//! Token comparison: exact equality and the punctuation-only tier.

use unicode_normalization::UnicodeNormalization;

/// Outcome of comparing two tokens that are not equal outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunctuationDiff {
    /// The tokens differ in more than punctuation.
    Unrelated,
    /// Same word; the reference carries punctuation the user left out.
    Missing { word: String, punctuation: String },
    /// Same word; the user added punctuation the reference lacks.
    Extra { word: String, punctuation: String },
}

/// Lowercase, compose (NFC) and trim a token.
pub fn normalize(token: &str) -> String {
    token.to_lowercase().nfc().collect::<String>().trim().to_string()
}

/// True when both tokens normalize to the same string.
pub fn are_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Check whether `user` and `reference` are the same word apart from punctuation.
///
/// Only a clean one-sided difference counts: if both tokens keep punctuation
/// (or neither does) the result is `Unrelated`. The reported `word` is the
/// normalized user token with punctuation removed.
pub fn same_word_different_punctuation(
    user: &str,
    reference: &str,
    punctuation: &[char],
) -> PunctuationDiff {
    let user_norm = normalize(user);
    let reference_norm = normalize(reference);

    let (user_word, user_marks) = split_punctuation(&user_norm, punctuation);
    let (reference_word, reference_marks) = split_punctuation(&reference_norm, punctuation);

    if user_word.is_empty() || reference_word.is_empty() || user_word != reference_word {
        return PunctuationDiff::Unrelated;
    }

    match (user_marks.is_empty(), reference_marks.is_empty()) {
        (true, false) => PunctuationDiff::Missing {
            word: user_word,
            punctuation: reference_marks,
        },
        (false, true) => PunctuationDiff::Extra {
            word: user_word,
            punctuation: user_marks,
        },
        _ => PunctuationDiff::Unrelated,
    }
}

/// Partition a token into (word characters, punctuation characters), order kept.
fn split_punctuation(token: &str, punctuation: &[char]) -> (String, String) {
    token.chars().partition(|c| !punctuation.contains(c))
}
