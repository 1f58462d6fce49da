//! # stable-match
//!
//! Deferred-acceptance (Gale-Shapley) stable matching for two-sided markets.
//!
//! ## Architecture
//!
//! - **Types**: Core data types (Side, Match, MatchingError, MatchingReceipt)
//! - **Market**: Validated preferences, rank tables and seat storage
//! - **Engine**: The proposal/rejection loop, one-to-one and many-to-one
//! - **Analysis**: Stability, rationality and capacity checks
//! - **Generator**: Random preference lists and capacities
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical inputs always yield identical matchings
//! 2. **Validate Up Front**: All input errors surface before any matching work
//! 3. **Dense Hot Loop**: The sentinel is an array index internally; callers see [`Match`]
//! 4. **Synchronous Execution**: No threads, no I/O
//!
//! ## Example
//!
//! ```
//! use stable_match::{deferred_acceptance, Match};
//!
//! // 3 proposers, 3 respondents; id 3 means "unmatched"
//! let result = deferred_acceptance(
//!     &[[0, 1, 2, 3], [0, 1, 2, 3], [0, 1, 2, 3]],
//!     &[[2, 1, 0, 3], [2, 1, 0, 3], [2, 1, 0, 3]],
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(result.proposer_match(0), Match::Matched(2));
//! assert_eq!(result.held_by(0), &[Match::Matched(2)]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Side, Match, errors, receipts
pub mod types;

/// Market model: preference matrices, rank tables, seats
pub mod market;

/// Matching engine: deferred acceptance
pub mod engine;

/// Properties of a matching: stability, rationality, capacities
pub mod analysis;

/// Random preferences and capacities
pub mod generator;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Match, MatchingError, MatchingReceipt, Result, Side};
pub use market::{Market, PrefMatrix, RankTable, SeatTable};
pub use engine::{deferred_acceptance, MatchResult, MatchStats, MatchingEngine};
pub use generator::{random_prefs, random_prefs_with_caps, RandomMarket};
