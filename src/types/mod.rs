//! Core data types for stable-match
//!
//! ## Types
//!
//! - [`Side`]: Proposer or Respondent
//! - [`Match`]: Outcome for one agent (matched partner or unmatched)
//! - [`MatchingError`]: Validation errors for market construction
//! - [`MatchingReceipt`]: SSZ-encodable run summary with a SHA-256 digest

mod side;
mod outcome;
mod error;
mod receipt;

pub use side::Side;
pub use outcome::Match;
pub use error::{MatchingError, Result};
pub use receipt::MatchingReceipt;
