//! Error types for stable-match
//!
//! Every error is a caller input error detected while building a
//! [`Market`](crate::market::Market). Once a market exists the engine cannot
//! fail.

use crate::types::Side;
use thiserror::Error;

/// Result type alias using the crate's error
pub type Result<T> = std::result::Result<T, MatchingError>;

/// Errors raised when validating a matching instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// A preference row does not cover the other side plus the sentinel
    #[error("{side} {row}: preference row has length {got}, expected {expected}")]
    RowLength {
        /// Side the row belongs to
        side: Side,
        /// Row index
        row: usize,
        /// Required length (other side size + 1)
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// A preference row repeats an id or contains one out of range
    #[error("{side} {row}: preference row is not a permutation (bad or repeated id {id})")]
    NotAPermutation {
        /// Side the row belongs to
        side: Side,
        /// Row index
        row: usize,
        /// Offending id
        id: usize,
    },

    /// A preference matrix was built for the other side of the market
    #[error("expected {expected} preferences, got {got} preferences")]
    SideMismatch {
        /// Side the matrix was supplied for
        expected: Side,
        /// Side the matrix is tagged with
        got: Side,
    },

    /// Capacity vector length differs from the number of respondents
    #[error("capacity vector has length {got}, expected {expected}")]
    CapacityLength {
        /// Number of respondents
        expected: usize,
        /// Supplied length
        got: usize,
    },

    /// A respondent was given zero seats
    #[error("respondent {respondent} has zero capacity")]
    ZeroCapacity {
        /// Respondent index
        respondent: usize,
    },
}
