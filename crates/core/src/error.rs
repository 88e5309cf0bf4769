//! Error types for vector math operations.

use thiserror::Error;

/// Result type for vector math operations.
pub type VecMathResult<T> = Result<T, VecMathError>;

/// Errors surfaced by the fallible vector math operations.
///
/// Most of the library is infallible; only operations over dynamically
/// shaped collections and the checked interpolation helpers can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VecMathError {
    /// A vector collection does not have the expected number of columns.
    #[error("shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch {
        /// Column count required by the operation.
        expected: usize,
        /// Column count of the offending collection.
        actual: usize,
    },

    /// Inverse interpolation over a range whose start equals its end.
    #[error("degenerate interpolation range: start equals end")]
    DegenerateRange,

    /// The operation needs at least one vector.
    #[error("vector collection is empty")]
    EmptyCollection,
}
