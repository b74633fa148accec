//! Extended grapheme cluster segmentation.
//!
//! Every example string is split into the user-perceived characters defined
//! by [UAX #29](https://www.unicode.org/reports/tr29/) before any other
//! stage of the pipeline sees it, so that a combining sequence (e.g. `e` +
//! combining acute) is never torn apart by the DFA or the character-class
//! folder. A Rust `&str` is already validated UTF-8, so unlike a
//! byte-oriented binding of this same pipeline, there is no encoding error
//! to report here: the precondition is enforced by the type system instead.

use std::rc::Rc;
use unicode_segmentation::UnicodeSegmentation;

/// A single extended grapheme cluster: one or more Unicode scalar values
/// that together form one user-perceived character. This is the atomic unit
/// the DFA is built over and the unit a [`Literal`](crate::expr::Node::Literal)
/// node holds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grapheme(Rc<str>);

impl Grapheme {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_rc(self) -> Rc<str> {
        self.0
    }

    /// The grapheme's single scalar value, if it consists of exactly one.
    /// Multi-scalar graphemes (most combining sequences, flag emoji, ZWJ
    /// sequences) are never eligible for `\d`/`\w`/`\s` folding or for
    /// character-class range coalescing, both of which operate on single
    /// codepoints.
    pub fn single_scalar(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Unicode simple case folding, approximated with per-scalar
    /// lowercasing (see `DESIGN.md` for why a dedicated case-folding table
    /// isn't pulled in for this). Used to compare grapheme labels for
    /// equality when `case_insensitive_matching` is requested, and as the
    /// canonical label stored on the resulting merged edge.
    pub fn case_folded(&self) -> Rc<str> {
        let folded: String = self.0.chars().flat_map(char::to_lowercase).collect();
        Rc::from(folded)
    }
}

impl From<&str> for Grapheme {
    fn from(value: &str) -> Self {
        Grapheme(Rc::from(value))
    }
}

impl std::fmt::Display for Grapheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits `input` into its extended grapheme clusters, in order.
pub fn segment(input: &str) -> Vec<Grapheme> {
    input.graphemes(true).map(Grapheme::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_combining_sequences_as_one_unit() {
        // 'e' + combining acute accent, rather than the precomposed 'é'
        let input = "e\u{0301}b";
        let graphemes = segment(input);
        assert_eq!(graphemes.len(), 2);
        assert_eq!(graphemes[0].as_str(), "e\u{0301}");
        assert_eq!(graphemes[1].as_str(), "b");
    }

    #[test]
    fn single_scalar_detects_multi_scalar_graphemes() {
        assert_eq!(segment("a")[0].single_scalar(), Some('a'));
        assert_eq!(segment("e\u{0301}")[0].single_scalar(), None);
    }

    #[test]
    fn case_folding_lowercases_ascii() {
        assert_eq!(&*segment("A")[0].case_folded(), "a");
        assert_eq!(&*segment("z")[0].case_folded(), "z");
    }
}
