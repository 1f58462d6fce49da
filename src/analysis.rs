//! Checks a matching against the properties deferred acceptance guarantees.
//!
//! These are independent of the engine: they rebuild rank tables for both
//! sides and look at the matching from the outside, so they can be used to
//! audit any [`MatchResult`] against its [`Market`].
//!
//! ## Example
//!
//! ```
//! use stable_match::analysis;
//! use stable_match::engine::MatchingEngine;
//! use stable_match::market::Market;
//!
//! let market = Market::new(
//!     &[[0, 1, 2], [1, 0, 2]],
//!     &[[1, 0, 2], [0, 1, 2]],
//! ).unwrap();
//! let result = MatchingEngine::new().run(&market);
//!
//! assert!(analysis::is_stable(&market, &result));
//! assert!(analysis::is_individually_rational(&market, &result));
//! ```

use crate::engine::MatchResult;
use crate::market::{Market, RankTable};
use crate::types::Match;

/// Every `(proposer, respondent)` pair that would rather be together.
///
/// A pair `(p, r)` blocks when `p` is not held by `r`, `p` ranks `r` above
/// its own outcome, and `r` either has a free seat and finds `p` acceptable
/// or ranks `p` above the worst proposer it holds.
pub fn blocking_pairs(market: &Market, result: &MatchResult) -> Vec<(usize, usize)> {
    let prop_ranks = RankTable::from_prefs(market.proposer_prefs());
    let resp_ranks = RankTable::from_prefs(market.respondent_prefs());
    let num_respondents = market.num_respondents();

    let held: Vec<Vec<usize>> = (0..num_respondents)
        .map(|r| result.partners(r).collect())
        .collect();

    let mut pairs = Vec::new();
    for p in 0..market.num_proposers() {
        let outcome = result.proposer_match(p).to_dense(num_respondents);
        for (r, holding) in held.iter().enumerate() {
            if outcome == r || holding.contains(&p) {
                continue;
            }
            if !prop_ranks.prefers(p, r, outcome) {
                continue;
            }

            let r_wants_p = if holding.len() < market.capacity(r) {
                resp_ranks.is_acceptable(r, p)
            } else {
                holding
                    .iter()
                    .max_by_key(|&&q| resp_ranks.rank(r, q))
                    .is_some_and(|&worst| resp_ranks.prefers(r, p, worst))
            };
            if r_wants_p {
                pairs.push((p, r));
            }
        }
    }
    pairs
}

/// No blocking pair exists
pub fn is_stable(market: &Market, result: &MatchResult) -> bool {
    blocking_pairs(market, result).is_empty()
}

/// Nobody is matched to an agent ranked below staying unmatched
pub fn is_individually_rational(market: &Market, result: &MatchResult) -> bool {
    let prop_ranks = RankTable::from_prefs(market.proposer_prefs());
    let resp_ranks = RankTable::from_prefs(market.respondent_prefs());

    let proposers_ok = result
        .proposer_matches()
        .iter()
        .enumerate()
        .all(|(p, m)| m.partner().map_or(true, |r| prop_ranks.is_acceptable(p, r)));

    let respondents_ok = (0..market.num_respondents())
        .all(|r| result.partners(r).all(|p| resp_ranks.is_acceptable(r, p)));

    proposers_ok && respondents_ok
}

/// No respondent holds more proposers than it has seats
pub fn respects_capacities(market: &Market, result: &MatchResult) -> bool {
    (0..market.num_respondents()).all(|r| result.partners(r).count() <= market.capacity(r))
}

/// The proposer view and the respondent view describe the same matching
pub fn is_consistent(result: &MatchResult) -> bool {
    let mut held_total = 0;
    for r in 0..result.num_respondents() {
        for p in result.partners(r) {
            held_total += 1;
            if result.proposer_match(p) != Match::Matched(r) {
                return false;
            }
        }
    }
    held_total == result.num_matched()
}

// ============================================================================
// Unit Tests
// ============================================================================
