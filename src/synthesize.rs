//! The top-level synthesis pipeline (§2, §9) and the [`Examples`] input
//! type it consumes.
//!
//! [`synthesize`] is total on a valid `(Examples, Options)` pair (§7): it
//! never fails, never retries, and never leaves partial output. It wires
//! the six pipeline stages in the fixed order the design notes mandate —
//! the repetition detector runs before the character-class folder, so
//! that repeated literals are quantified before being absorbed into a
//! class (§9, last bullet).

use std::collections::HashSet;

use crate::dfa::Dfa;
use crate::error::SynthesisError;
use crate::expr::eliminate::eliminate;
use crate::expr::fold;
use crate::grapheme;
use crate::options::Options;
use crate::render;
use crate::repetition;

/// A non-empty, duplicate-free, order-preserving set of example strings
/// (§3 "Example set"). Duplicates are collapsed at construction so that
/// the duplicate-invariance property (§8 property 4) holds trivially.
#[derive(Clone, Debug)]
pub struct Examples {
    items: Vec<String>,
}

impl Examples {
    /// Builds an `Examples` set, collapsing duplicates and rejecting an
    /// empty input.
    pub fn new(
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Examples, SynthesisError> {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for item in items {
            let item = item.into();
            if seen.insert(item.clone()) {
                deduped.push(item);
            }
        }
        if deduped.is_empty() {
            return Err(SynthesisError::EmptyExamples);
        }
        Ok(Examples { items: deduped })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

/// Runs the full pipeline: grapheme segmentation, DFA construction and
/// minimization, optional repetition detection, state elimination,
/// character-class folding, and rendering.
pub fn synthesize(examples: &Examples, opts: &Options) -> String {
    let graphemes: Vec<Vec<_>> = examples.as_slice().iter().map(|e| grapheme::segment(e)).collect();

    let mut dfa = Dfa::from_examples(&graphemes, opts.case_insensitive_matching);
    dfa.minimize();

    let mut tree = eliminate(&dfa);

    if opts.conversion_of_repetitions {
        tree = repetition::compress_tree(
            tree,
            opts.minimum_repetitions,
            opts.minimum_substring_length,
        );
    }

    tree = fold::fold(tree, opts);
    tree = fold::coalesce(tree);

    render::render(&tree, opts)
}
