//! Market model: preferences, rank tables, and seats.
//!
//! ## Components
//!
//! - [`PrefMatrix`]: Validated preference orders for one side
//! - [`RankTable`]: Inverted preference orders for O(1) comparisons
//! - [`SeatTable`]: Slot array partitioned per respondent by `indptr`
//! - [`Market`]: Both sides plus optional capacities
//!
//! ## The Sentinel
//!
//! Each side ranks "unmatched" alongside real agents, encoded as the id equal
//! to the other side's size. For `m` proposers and `n` respondents:
//!
//! | Matrix | Shape | Sentinel |
//! |--------|-------|----------|
//! | Proposer prefs | m x (n + 1) | n |
//! | Respondent prefs | n x (m + 1) | m |
//!
//! Anything ranked below the sentinel is unacceptable to that agent.

pub mod prefs;
pub mod rank;
pub mod seats;
mod instance;

pub use prefs::PrefMatrix;
pub use rank::RankTable;
pub use seats::SeatTable;
pub use instance::Market;
