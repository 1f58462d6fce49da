//! Matching engine module for stable-match.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same market always produces the same matching
//! 2. **O(1) Comparisons**: Respondent preferences are inverted into rank tables
//! 3. **Synchronous Execution**: One thread, no I/O, no suspension
//! 4. **Owned State**: Cursors, flags and seats live in structs owned by one run
//!
//! ## Guarantees
//!
//! - The result is **stable**: no proposer and respondent both prefer each
//!   other to what they got
//! - The result is **proposer-optimal** among all stable matchings
//! - Nobody is matched to an agent they rank below staying unmatched
//! - No respondent holds more proposers than its capacity
//! - At most `m * (n + 1)` proposals are made
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::MatchingEngine;
//! use stable_match::market::Market;
//!
//! // 4 students, 2 colleges with 2 seats each
//! let market = Market::new(
//!     &[[0, 1, 2], [0, 1, 2], [0, 1, 2], [0, 1, 2]],
//!     &[[3, 2, 1, 0, 4], [0, 1, 2, 3, 4]],
//! )
//! .unwrap()
//! .with_capacities(vec![2, 2])
//! .unwrap();
//!
//! let mut engine = MatchingEngine::new();
//! let result = engine.run(&market);
//!
//! assert_eq!(result.indptr(), Some(&[0, 2, 4][..]));
//! assert_eq!(result.num_matched(), 4);
//! ```

pub mod matcher;
pub mod result;
pub mod state;

pub use matcher::{deferred_acceptance, MatchingEngine};
pub use result::{MatchResult, MatchStats};
pub use state::ProposalState;
