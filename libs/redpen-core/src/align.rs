//! Two-pointer alignment of a user submission against a reference text.

use crate::compare::{are_equal, same_word_different_punctuation, PunctuationDiff};
use crate::config::AlignerConfig;
use crate::tokenize::tokenize;
use crate::types::ClassifiedElement;

/// Bounded-lookahead aligner.
///
/// Holds only its policy; every call to [`Aligner::align`] is independent,
/// so one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Align `user_text` against `reference_text`, token by token.
    ///
    /// Every token of both inputs appears exactly once in the output, either
    /// as an element's text or (for substitutions) as its correction. A
    /// punctuation-only difference splits the pair into a `Correct` word
    /// followed by the `Missing` or `Extra` marks.
    pub fn align(&self, user_text: &str, reference_text: &str) -> Vec<ClassifiedElement> {
        let user = tokenize(user_text);
        let reference = tokenize(reference_text);

        let mut result = Vec::with_capacity(user.len().max(reference.len()));
        let mut u = 0;
        let mut c = 0;

        while u < user.len() || c < reference.len() {
            match (user.get(u), reference.get(c)) {
                (Some(&user_token), Some(&reference_token)) => {
                    if are_equal(user_token, reference_token) {
                        tracing::trace!(u, c, token = user_token, "match");
                        result.push(ClassifiedElement::correct(user_token));
                        u += 1;
                        c += 1;
                        continue;
                    }

                    match same_word_different_punctuation(
                        user_token,
                        reference_token,
                        &self.config.punctuation,
                    ) {
                        PunctuationDiff::Missing { word, punctuation } => {
                            tracing::trace!(u, c, %punctuation, "missing punctuation");
                            result.push(ClassifiedElement::correct(word).as_word());
                            result.push(
                                ClassifiedElement::missing(punctuation).as_attached_mark(),
                            );
                            u += 1;
                            c += 1;
                        }
                        PunctuationDiff::Extra { word, punctuation } => {
                            tracing::trace!(u, c, %punctuation, "extra punctuation");
                            result.push(ClassifiedElement::correct(word).as_word());
                            result.push(
                                ClassifiedElement::extra(punctuation).as_attached_mark(),
                            );
                            u += 1;
                            c += 1;
                        }
                        PunctuationDiff::Unrelated => {
                            // Is the user token further ahead in the reference?
                            if let Some(k) = self.find_ahead(&reference, c, user_token) {
                                tracing::trace!(u, c, resync = k, "reference tokens skipped");
                                result.extend(
                                    reference[c..k]
                                        .iter()
                                        .map(|&token| ClassifiedElement::missing(token)),
                                );
                                c = k;
                            } else if let Some(k) = self.find_ahead(&user, u, reference_token) {
                                tracing::trace!(u, c, resync = k, "user tokens inserted");
                                result.extend(
                                    user[u..k]
                                        .iter()
                                        .map(|&token| ClassifiedElement::extra(token)),
                                );
                                u = k;
                            } else {
                                tracing::trace!(
                                    u,
                                    c,
                                    user = user_token,
                                    reference = reference_token,
                                    "substitution"
                                );
                                result.push(ClassifiedElement::incorrect(
                                    user_token,
                                    reference_token,
                                ));
                                u += 1;
                                c += 1;
                            }
                        }
                    }
                }
                (Some(&user_token), None) => {
                    result.push(ClassifiedElement::extra(user_token));
                    u += 1;
                }
                (None, Some(&reference_token)) => {
                    result.push(ClassifiedElement::missing(reference_token));
                    c += 1;
                }
                (None, None) => break,
            }
        }

        tracing::debug!(
            user_tokens = user.len(),
            reference_tokens = reference.len(),
            elements = result.len(),
            "alignment complete"
        );

        result
    }

    /// Scan `tokens[from+1 .. from+lookahead]` for a token equal to `needle`.
    fn find_ahead(&self, tokens: &[&str], from: usize, needle: &str) -> Option<usize> {
        let end = tokens.len().min(from.saturating_add(self.config.lookahead));
        (from + 1..end).find(|&k| are_equal(tokens[k], needle))
    }
}

/// Align with the default policy.
pub fn align(user_text: &str, reference_text: &str) -> Vec<ClassifiedElement> {
    Aligner::default().align(user_text, reference_text)
}
