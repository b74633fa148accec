//! The option bundle (§3 "Option bundle").
//!
//! `Options` is a flat, immutable record: every field is a plain
//! generalization switch or threshold, nothing more. It is constructed once
//! per synthesis run and never mutated afterwards (see the "Lifecycle"
//! note in spec.md §3) — the same shape `dandy`'s `DfaParseError`-producing
//! `TryFrom` impls use: validate eagerly, then hand back an immutable value.

use crate::error::SynthesisError;

/// The full set of generalizations and rendering switches a synthesis run
/// may be configured with. See spec.md §3 for the effect of each field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub(crate) conversion_of_digits: bool,
    pub(crate) conversion_of_non_digits: bool,
    pub(crate) conversion_of_whitespace: bool,
    pub(crate) conversion_of_non_whitespace: bool,
    pub(crate) conversion_of_words: bool,
    pub(crate) conversion_of_non_words: bool,
    pub(crate) conversion_of_repetitions: bool,
    pub(crate) minimum_repetitions: u32,
    pub(crate) minimum_substring_length: u32,
    pub(crate) capturing_groups: bool,
    pub(crate) without_anchors: bool,
    pub(crate) case_insensitive_matching: bool,
    pub(crate) verbose_mode: bool,
    pub(crate) escape_non_ascii: bool,
    pub(crate) use_surrogate_pairs: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            conversion_of_digits: false,
            conversion_of_non_digits: false,
            conversion_of_whitespace: false,
            conversion_of_non_whitespace: false,
            conversion_of_words: false,
            conversion_of_non_words: false,
            conversion_of_repetitions: false,
            minimum_repetitions: 1,
            minimum_substring_length: 1,
            capturing_groups: false,
            without_anchors: false,
            case_insensitive_matching: false,
            verbose_mode: false,
            escape_non_ascii: false,
            use_surrogate_pairs: false,
        }
    }
}

impl Options {
    pub fn conversion_of_digits(mut self, enabled: bool) -> Self {
        self.conversion_of_digits = enabled;
        self
    }

    pub fn conversion_of_non_digits(mut self, enabled: bool) -> Self {
        self.conversion_of_non_digits = enabled;
        self
    }

    pub fn conversion_of_whitespace(mut self, enabled: bool) -> Self {
        self.conversion_of_whitespace = enabled;
        self
    }

    pub fn conversion_of_non_whitespace(mut self, enabled: bool) -> Self {
        self.conversion_of_non_whitespace = enabled;
        self
    }

    pub fn conversion_of_words(mut self, enabled: bool) -> Self {
        self.conversion_of_words = enabled;
        self
    }

    pub fn conversion_of_non_words(mut self, enabled: bool) -> Self {
        self.conversion_of_non_words = enabled;
        self
    }

    pub fn conversion_of_repetitions(mut self, enabled: bool) -> Self {
        self.conversion_of_repetitions = enabled;
        self
    }

    /// Sets the minimum run count the repetition detector requires before
    /// emitting a quantifier. Must be at least 1.
    pub fn minimum_repetitions(mut self, count: i64) -> Result<Self, SynthesisError> {
        if count < 1 {
            return Err(SynthesisError::InvalidMinimumRepetitions);
        }
        self.minimum_repetitions = count as u32;
        Ok(self)
    }

    /// Sets the minimum substring length the repetition detector requires
    /// before emitting a quantifier. Must be at least 1.
    pub fn minimum_substring_length(mut self, length: i64) -> Result<Self, SynthesisError> {
        if length < 1 {
            return Err(SynthesisError::InvalidMinimumSubstringLength);
        }
        self.minimum_substring_length = length as u32;
        Ok(self)
    }

    pub fn capturing_groups(mut self, enabled: bool) -> Self {
        self.capturing_groups = enabled;
        self
    }

    pub fn without_anchors(mut self, enabled: bool) -> Self {
        self.without_anchors = enabled;
        self
    }

    pub fn case_insensitive_matching(mut self, enabled: bool) -> Self {
        self.case_insensitive_matching = enabled;
        self
    }

    pub fn verbose_mode(mut self, enabled: bool) -> Self {
        self.verbose_mode = enabled;
        self
    }

    pub fn escape_non_ascii(mut self, enabled: bool) -> Self {
        self.escape_non_ascii = enabled;
        self
    }

    pub fn use_surrogate_pairs(mut self, enabled: bool) -> Self {
        self.use_surrogate_pairs = enabled;
        self
    }
}
