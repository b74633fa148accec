//! # rexemplar
//!
//! `rexemplar` synthesizes a single regular expression that matches exactly
//! a finite set of example strings, subject to a handful of user-controlled
//! generalizations (digit/word/whitespace folding, repetition detection,
//! case-insensitive matching, capturing groups, verbose rendering).
//!
//! It is a one-shot, offline synthesizer, not a runtime matcher: the output
//! is textual regex source meant for a standard PCRE-compatible engine. The
//! crate has no public builder DSL of its own beyond [`RegExpBuilder`]; a
//! CLI, file I/O, and host-language bindings are all out of scope here.
//!
//! ## Usage
//!
//! ```rust
//! use rexemplar::RegExpBuilder;
//!
//! fn main() {
//!     let pattern = RegExpBuilder::from_test_cases(["abc", "abd", "abe"])
//!         .unwrap()
//!         .build();
//!     assert_eq!(pattern, "^ab[c-e]$");
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [Grapheme segmentation](grapheme) splits every example into extended
//!    grapheme clusters.
//! 2. [DFA construction](dfa) builds a trie over the grapheme sequences and
//!    minimizes it with partition refinement.
//! 3. [Repetition detection](repetition), when requested, rewrites repeated
//!    runs as bounded quantifiers.
//! 4. [State elimination](expr) reduces the (possibly rewritten) DFA to a
//!    single expression tree.
//! 5. [Character-class folding](expr::fold) rewrites literal leaves into
//!    `\d \D \w \W \s \S` where requested.
//! 6. [Rendering](render) serializes the tree to text.
//!
//! [`synthesize`] wires these stages together; [`RegExpBuilder`] is a thin
//! fluent wrapper over [`Examples`], [`Options`] and [`synthesize`].

pub mod builder;
pub mod dfa;
pub mod error;
pub mod expr;
pub mod grapheme;
pub mod options;
pub mod render;
pub mod repetition;
pub mod synthesize;

pub use builder::RegExpBuilder;
pub use error::SynthesisError;
pub use options::Options;
pub use synthesize::{synthesize, Examples};

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_default_options() {
        let examples = Examples::new(["abc", "abd", "abe"]).unwrap();
        let pattern = synthesize(&examples, &Options::default());
        assert_eq!(pattern, "^ab[c-e]$");
    }
}
