//! Precondition errors for the step generators
//!
//! This module defines [`GeneratorError`], raised by
//! [`Algorithm::generate`](super::Algorithm::generate) before any step is
//! computed. The generators themselves never fail: once the input passes
//! validation they always produce a complete trace.

use super::Algorithm;
use thiserror::Error;

/// Input rejected before generation began
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Every algorithm needs at least one element
    #[error("input array is empty")]
    EmptyInput,

    /// Binary and exponential search need ascending input
    #[error("input array is not sorted ascending (first descent at index {index})")]
    UnsortedInput { index: usize },

    /// Search algorithms were called without a target
    #[error("{algorithm} needs a target value")]
    MissingTarget { algorithm: Algorithm },
}

/// Check that `values` is non-empty
pub(crate) fn require_non_empty(values: &[i64]) -> Result<(), GeneratorError> {
    if values.is_empty() {
        return Err(GeneratorError::EmptyInput);
    }
    Ok(())
}

/// Check that `values` is in non-decreasing order, reporting the first offending index
pub(crate) fn require_sorted(values: &[i64]) -> Result<(), GeneratorError> {
    match values.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(pos) => Err(GeneratorError::UnsortedInput { index: pos + 1 }),
        None => Ok(()),
    }
}
