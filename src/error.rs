//! Errors surfaced at the synthesis interface.
//!
//! There are exactly three error kinds, all user-input validation, all
//! raised before any synthesis work begins. The synthesis pipeline itself
//! is total on valid input (see the module docs on [`crate::synthesize`]).
//! The messages are part of the public contract and must not change.

use thiserror::Error;

/// An error constructing an [`Examples`](crate::Examples) set or a valid
/// [`Options`](crate::Options) bundle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("No test cases have been provided for regular expression generation")]
    EmptyExamples,
    #[error("Quantity of minimum repetitions must be greater than zero")]
    InvalidMinimumRepetitions,
    #[error("Minimum substring length must be greater than zero")]
    InvalidMinimumSubstringLength,
}
