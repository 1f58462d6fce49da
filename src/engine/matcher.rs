//! Deferred-acceptance (Gale-Shapley) proposal loop.
//!
//! ## Rounds
//!
//! Each round sweeps proposers in index order. Every proposer still single
//! proposes to the entry under its cursor and the cursor advances, whatever
//! the answer. The loop stops once nobody is single. A proposer evicted
//! during a sweep is picked up later in the same sweep if its index is
//! higher, otherwise in the next one; the fixed point is the same either way.
//!
//! ## One-to-one
//!
//! Each respondent holds at most one proposer. A vacant respondent counts as
//! holding its own sentinel, so a single rank comparison covers both
//! "is `p` acceptable?" and "is `p` better than the current partner?".
//!
//! ## Many-to-one
//!
//! Each respondent holds up to `capacity[r]` proposers in a [`SeatTable`].
//! Acceptability is checked first, since an open seat no longer guards it.
//! When all seats are full the least preferred occupant is evicted if the
//! newcomer ranks strictly above it.

use crate::engine::{MatchResult, MatchStats, ProposalState};
use crate::market::{Market, RankTable, SeatTable};
use crate::types::Result;

/// Deferred-acceptance engine.
///
/// The engine keeps running totals across calls; all loop state is created
/// fresh for each [`run`](Self::run) and dropped once the result is built.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    /// Markets solved by this engine
    runs: u64,
    /// Proposals made across all runs
    total_proposals: u64,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the proposer-optimal stable matching of `market`.
    ///
    /// Dispatches to the capacitated loop iff the market carries capacities.
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::engine::MatchingEngine;
    /// use stable_match::market::Market;
    /// use stable_match::types::Match;
    ///
    /// let market = Market::new(
    ///     &[[0, 1, 2], [0, 1, 2]],
    ///     &[[1, 0, 2], [1, 0, 2]],
    /// ).unwrap();
    ///
    /// let result = MatchingEngine::new().run(&market);
    /// assert_eq!(result.proposer_matches(), &[Match::Matched(1), Match::Matched(0)]);
    /// ```
    pub fn run(&mut self, market: &Market) -> MatchResult {
        let result = match market.capacities() {
            Some(capacities) => run_capacitated(market, capacities),
            None => run_one_to_one(market),
        };

        self.runs += 1;
        self.total_proposals += result.stats().proposals;
        result
    }

    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    #[inline]
    pub fn total_proposals(&self) -> u64 {
        self.total_proposals
    }
}

/// Validate raw preferences and run deferred acceptance.
///
/// # Arguments
///
/// * `proposer_prefs` - m rows, each a permutation of `0..=n`
/// * `respondent_prefs` - n rows, each a permutation of `0..=m`
/// * `capacities` - Optional seats per respondent (length n, all >= 1)
///
/// # Errors
///
/// Any [`MatchingError`](crate::types::MatchingError) from validation. No
/// matching work is done when validation fails.
///
/// # Example
///
/// ```
/// use stable_match::deferred_acceptance;
///
/// let result = deferred_acceptance(
///     &[[0, 1, 2, 3], [0, 1, 2, 3], [0, 1, 2, 3]],
///     &[[2, 1, 0, 3], [2, 1, 0, 3], [2, 1, 0, 3]],
///     None,
/// ).unwrap();
///
/// let (proposers, respondents, indptr) = result.to_dense();
/// assert_eq!(proposers, vec![2, 1, 0]);
/// assert_eq!(respondents, vec![2, 1, 0]);
/// assert!(indptr.is_none());
/// ```
pub fn deferred_acceptance<P, R>(
    proposer_prefs: &[P],
    respondent_prefs: &[R],
    capacities: Option<&[usize]>,
) -> Result<MatchResult>
where
    P: AsRef<[usize]>,
    R: AsRef<[usize]>,
{
    let mut market = Market::new(proposer_prefs, respondent_prefs)?;
    if let Some(capacities) = capacities {
        market = market.with_capacities(capacities.to_vec())?;
    }

    Ok(MatchingEngine::new().run(&market))
}

fn run_one_to_one(market: &Market) -> MatchResult {
    let prefs = market.proposer_prefs();
    let ranks = RankTable::from_prefs(market.respondent_prefs());

    let num_proposers = market.num_proposers();
    let prop_unmatched = market.num_respondents();
    let resp_unmatched = num_proposers;

    let mut state = ProposalState::new(num_proposers);
    let mut current = vec![resp_unmatched; market.num_respondents()];
    let mut stats = MatchStats::default();

    while state.any_single() {
        stats.rounds += 1;
        for p in 0..num_proposers {
            if !state.is_single(p) {
                continue;
            }

            let r = prefs.get(p, state.advance(p));
            stats.proposals += 1;

            if r == prop_unmatched {
                state.settle(p);
            } else if ranks.prefers(r, p, current[r]) {
                let prev = current[r];
                if prev != resp_unmatched {
                    state.release(prev);
                    stats.evictions += 1;
                }
                current[r] = p;
                state.settle(p);
            }
        }
    }

    MatchResult::one_to_one(prefs, state.cursors(), current, stats)
}

fn run_capacitated(market: &Market, capacities: &[usize]) -> MatchResult {
    let prefs = market.proposer_prefs();
    let ranks = RankTable::from_prefs(market.respondent_prefs());

    let num_proposers = market.num_proposers();
    let prop_unmatched = market.num_respondents();

    let mut state = ProposalState::new(num_proposers);
    let mut seats = SeatTable::new(capacities, num_proposers);
    let mut stats = MatchStats::default();

    while state.any_single() {
        stats.rounds += 1;
        for p in 0..num_proposers {
            if !state.is_single(p) {
                continue;
            }

            let r = prefs.get(p, state.advance(p));
            stats.proposals += 1;

            if r == prop_unmatched {
                state.settle(p);
            } else if !ranks.is_acceptable(r, p) {
                // r would rather leave the seat empty
            } else if seats.has_vacancy(r) {
                seats.fill(r, p);
                state.settle(p);
            } else if let Some((slot, worst)) = seats.worst_held(r, &ranks) {
                if ranks.prefers(r, p, worst) {
                    let evicted = seats.replace(slot, p);
                    state.release(evicted);
                    state.settle(p);
                    stats.evictions += 1;
                }
            }
        }
    }

    MatchResult::capacitated(prefs, state.cursors(), seats, stats)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Match, MatchingError};

    #[test]
    fn test_three_by_three_trace() {
        let result = deferred_acceptance(
            &[[0, 1, 2, 3], [0, 1, 2, 3], [0, 1, 2, 3]],
            &[[2, 1, 0, 3], [2, 1, 0, 3], [2, 1, 0, 3]],
            None,
        )
        .expect("valid market");

        assert_eq!(
            result.proposer_matches(),
            &[Match::Matched(2), Match::Matched(1), Match::Matched(0)]
        );
        assert_eq!(
            result.respondent_matches(),
            &[Match::Matched(2), Match::Matched(1), Match::Matched(0)]
        );
        // Round 1: all to 0, 2 kept. Round 2: 0 and 1 to 1, 1 kept.
        // Round 3: 0 to 2. Sweeping in index order, each better proposer
        // displaces the one accepted just before it.
        assert_eq!(result.stats().rounds, 3);
        assert_eq!(result.stats().proposals, 6);
        assert_eq!(result.stats().evictions, 3);
    }

    #[test]
    fn test_eviction_one_to_one() {
        // Proposer 0 is accepted by respondent 0, then displaced by
        // proposer 1 in the same sweep and falls back to respondent 1.
        let result = deferred_acceptance(
            &[[0, 1, 2], [0, 1, 2]],
            &[[1, 0, 2], [0, 1, 2]],
            None,
        )
        .expect("valid market");

        let (proposers, respondents, _) = result.to_dense();
        assert_eq!(proposers, vec![1, 0]);
        assert_eq!(respondents, vec![1, 0]);
        assert_eq!(result.stats().evictions, 1);
    }

    #[test]
    fn test_unacceptable_proposer_rejected() {
        // Respondent 0 ranks its vacancy (1) above proposer 0
        let result = deferred_acceptance(&[[0, 1]], &[[1, 0]], None).expect("valid market");

        assert_eq!(result.proposer_matches(), &[Match::Unmatched]);
        assert_eq!(result.respondent_matches(), &[Match::Unmatched]);
    }

    #[test]
    fn test_proposer_prefers_unmatched() {
        // Proposer 0 ranks staying single (1) first
        let result = deferred_acceptance(&[[1, 0]], &[[0, 1]], None).expect("valid market");

        assert_eq!(result.proposer_matches(), &[Match::Unmatched]);
        assert_eq!(result.respondent_matches(), &[Match::Unmatched]);
        assert_eq!(result.stats().proposals, 1);
    }

    #[test]
    fn test_empty_markets() {
        let no_respondents: &[[usize; 3]] = &[];
        let result = deferred_acceptance(&[[0], [0]], no_respondents, None).expect("valid market");
        assert_eq!(result.proposer_matches(), &[Match::Unmatched, Match::Unmatched]);
        assert!(result.respondent_matches().is_empty());

        let no_proposers: &[[usize; 3]] = &[];
        let result = deferred_acceptance(no_proposers, &[[0], [0]], None).expect("valid market");
        assert!(result.proposer_matches().is_empty());
        assert_eq!(result.respondent_matches(), &[Match::Unmatched, Match::Unmatched]);
        assert_eq!(result.stats().rounds, 0);
    }

    #[test]
    fn test_capacitated_scenario() {
        // Everyone prefers respondent 0; respondent 0 ranks 3 > 2 > 1 > 0
        let proposer_prefs = [[0, 1, 2], [0, 1, 2], [0, 1, 2], [0, 1, 2]];
        let respondent_prefs = [[3, 2, 1, 0, 4], [0, 1, 2, 3, 4]];

        let result = deferred_acceptance(&proposer_prefs, &respondent_prefs, Some(&[2, 2]))
            .expect("valid market");

        assert_eq!(result.indptr(), Some(&[0, 2, 4][..]));
        assert_eq!(result.nums_occupied(), Some(&[2, 2][..]));

        let mut held: Vec<usize> = result.partners(0).collect();
        held.sort_unstable();
        assert_eq!(held, vec![2, 3]);

        let mut held: Vec<usize> = result.partners(1).collect();
        held.sort_unstable();
        assert_eq!(held, vec![0, 1]);

        assert_eq!(
            result.proposer_matches(),
            &[Match::Matched(1), Match::Matched(1), Match::Matched(0), Match::Matched(0)]
        );
        assert_eq!(result.stats().evictions, 2);
    }

    #[test]
    fn test_capacitated_unacceptable_with_open_seat() {
        // Respondent 0 has two seats but ranks proposer 1 below vacancy
        let result = deferred_acceptance(&[[0, 1], [0, 1]], &[[0, 2, 1]], Some(&[2]))
            .expect("valid market");

        assert_eq!(result.proposer_matches(), &[Match::Matched(0), Match::Unmatched]);
        assert_eq!(result.held_by(0), &[Match::Matched(0), Match::Unmatched]);
        assert_eq!(result.nums_occupied(), Some(&[1][..]));
    }

    #[test]
    fn test_capacitated_full_rejects_worse() {
        // One seat, held by the preferred proposer 0; proposer 1 is rejected
        let result = deferred_acceptance(&[[0, 1], [0, 1]], &[[0, 1, 2]], Some(&[1]))
            .expect("valid market");

        assert_eq!(result.proposer_matches(), &[Match::Matched(0), Match::Unmatched]);
        assert_eq!(result.stats().evictions, 0);
    }

    #[test]
    fn test_unit_capacities_match_one_to_one() {
        let proposer_prefs = [[1, 0, 2, 3], [0, 2, 1, 3], [0, 1, 3, 2]];
        let respondent_prefs = [[2, 0, 1, 3], [0, 3, 1, 2], [1, 2, 0, 3]];

        let plain = deferred_acceptance(&proposer_prefs, &respondent_prefs, None)
            .expect("valid market");
        let unit = deferred_acceptance(&proposer_prefs, &respondent_prefs, Some(&[1, 1, 1]))
            .expect("valid market");

        assert_eq!(plain.proposer_matches(), unit.proposer_matches());
        assert_eq!(plain.respondent_matches(), unit.respondent_matches());
        assert_eq!(unit.indptr(), Some(&[0, 1, 2, 3][..]));
    }

    #[test]
    fn test_validation_errors() {
        let err = deferred_acceptance(&[[0, 1]], &[[0, 1], [1, 0]], None).unwrap_err();
        assert!(matches!(err, MatchingError::RowLength { .. }));

        let err = deferred_acceptance(&[[0, 1]], &[[0, 1]], Some(&[1, 1])).unwrap_err();
        assert_eq!(err, MatchingError::CapacityLength { expected: 1, got: 2 });

        let err = deferred_acceptance(&[[0, 0]], &[[0, 1]], None).unwrap_err();
        assert!(matches!(err, MatchingError::NotAPermutation { .. }));
    }

    #[test]
    fn test_engine_totals() {
        let market = Market::new(&[[0, 1]], &[[0, 1]]).expect("valid market");
        let mut engine = MatchingEngine::new();

        engine.run(&market);
        engine.run(&market);

        assert_eq!(engine.runs(), 2);
        assert_eq!(engine.total_proposals(), 2);
    }
}
