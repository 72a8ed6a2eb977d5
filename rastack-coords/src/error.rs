//! Error types for coordinate normalization

use thiserror::Error;

/// Coordinate-normalization error types
#[derive(Debug, Error)]
pub enum CoordsError {
    /// Unwrap was handed an array that does not hold exactly one element.
    #[error("expected a single-element array, got {len} elements")]
    NotSingleton {
        /// Number of elements the array actually held.
        len: usize,
    },
    /// Sibling sequences disagree on length along one axis.
    #[error("ragged nesting along axis {axis}: expected length {expected}, got {actual}")]
    RaggedSequence {
        /// Axis (nesting depth) where the mismatch was found.
        axis: usize,
        /// Length established by the first sequence at this depth.
        expected: usize,
        /// Length of the offending sequence.
        actual: usize,
    },
    /// Scalar and sequence values appear at the same nesting depth.
    #[error("mixed scalar and sequence values at depth {depth}")]
    MixedNesting {
        /// Nesting depth where the mix was found.
        depth: usize,
    },
    /// Internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CoordsError>;
