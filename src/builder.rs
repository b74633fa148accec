//! A thin fluent wrapper over [`Examples`]/[`Options`]/[`synthesize`] (§9
//! "Builder fluency vs option bundle"), named after the host-visible
//! builder exercised by `examples/original_source/tests/python/test_grex.py`.
//! It owns no behavior beyond forwarding to the option record and the
//! pipeline entry point.

use crate::error::SynthesisError;
use crate::options::Options;
use crate::synthesize::{synthesize, Examples};

#[derive(Clone, Debug)]
pub struct RegExpBuilder {
    examples: Examples,
    options: Options,
}

impl RegExpBuilder {
    pub fn from_test_cases(
        test_cases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, SynthesisError> {
        Ok(RegExpBuilder {
            examples: Examples::new(test_cases)?,
            options: Options::default(),
        })
    }

    pub fn with_conversion_of_digits(mut self) -> Self {
        self.options = self.options.conversion_of_digits(true);
        self
    }

    pub fn with_conversion_of_non_digits(mut self) -> Self {
        self.options = self.options.conversion_of_non_digits(true);
        self
    }

    pub fn with_conversion_of_whitespace(mut self) -> Self {
        self.options = self.options.conversion_of_whitespace(true);
        self
    }

    pub fn with_conversion_of_non_whitespace(mut self) -> Self {
        self.options = self.options.conversion_of_non_whitespace(true);
        self
    }

    pub fn with_conversion_of_words(mut self) -> Self {
        self.options = self.options.conversion_of_words(true);
        self
    }

    pub fn with_conversion_of_non_words(mut self) -> Self {
        self.options = self.options.conversion_of_non_words(true);
        self
    }

    pub fn with_conversion_of_repetitions(mut self) -> Self {
        self.options = self.options.conversion_of_repetitions(true);
        self
    }

    pub fn with_minimum_repetitions(mut self, count: i64) -> Result<Self, SynthesisError> {
        self.options = self.options.minimum_repetitions(count)?;
        Ok(self)
    }

    pub fn with_minimum_substring_length(mut self, length: i64) -> Result<Self, SynthesisError> {
        self.options = self.options.minimum_substring_length(length)?;
        Ok(self)
    }

    pub fn with_capturing_groups(mut self) -> Self {
        self.options = self.options.capturing_groups(true);
        self
    }

    pub fn without_anchors(mut self) -> Self {
        self.options = self.options.without_anchors(true);
        self
    }

    pub fn with_case_insensitive_matching(mut self) -> Self {
        self.options = self.options.case_insensitive_matching(true);
        self
    }

    pub fn with_verbose_mode(mut self) -> Self {
        self.options = self.options.verbose_mode(true);
        self
    }

    pub fn with_escaped_non_ascii_chars(mut self, use_surrogate_pairs: bool) -> Self {
        self.options = self
            .options
            .escape_non_ascii(true)
            .use_surrogate_pairs(use_surrogate_pairs);
        self
    }

    pub fn build(&self) -> String {
        synthesize(&self.examples, &self.options)
    }
}
