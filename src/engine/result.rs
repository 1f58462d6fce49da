//! Final matching assembled from the engine's terminal state.

use crate::market::{PrefMatrix, SeatTable};
use crate::types::{Match, MatchingReceipt};

/// Counters collected while the proposal loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStats {
    /// Sweeps over the single proposers until none were left
    pub rounds: u64,
    /// Proposals made, including proposals to the sentinel
    pub proposals: u64,
    /// Held proposers displaced by a better proposal
    pub evictions: u64,
}

/// Outcome of a deferred-acceptance run.
///
/// ## Respondent Layout
///
/// - One-to-one: `respondent_matches()[r]` is the partner of `r`.
/// - Many-to-one: `respondent_matches()` is the seat array and `indptr()`
///   slices it, so `r` holds `respondent_matches()[indptr[r]..indptr[r + 1]]`
///   in arbitrary seat order, with `Match::Unmatched` for empty seats.
///
/// [`held_by`](Self::held_by) hides the difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    num_proposers: usize,
    num_respondents: usize,
    proposer_matches: Vec<Match>,
    respondent_matches: Vec<Match>,
    indptr: Option<Vec<usize>>,
    nums_occupied: Option<Vec<usize>>,
    stats: MatchStats,
}

impl MatchResult {
    /// Assemble a one-to-one result from final cursors and occupants.
    pub(crate) fn one_to_one(
        proposer_prefs: &PrefMatrix,
        cursors: &[usize],
        occupants: Vec<usize>,
        stats: MatchStats,
    ) -> Self {
        let vacant = cursors.len();
        Self {
            num_proposers: cursors.len(),
            num_respondents: occupants.len(),
            proposer_matches: final_targets(proposer_prefs, cursors),
            respondent_matches: occupants
                .into_iter()
                .map(|p| Match::from_dense(p, vacant))
                .collect(),
            indptr: None,
            nums_occupied: None,
            stats,
        }
    }

    /// Assemble a many-to-one result from final cursors and seats.
    pub(crate) fn capacitated(
        proposer_prefs: &PrefMatrix,
        cursors: &[usize],
        seats: SeatTable,
        stats: MatchStats,
    ) -> Self {
        let vacant = seats.vacant();
        let num_respondents = seats.num_respondents();
        let (indptr, slots, nums_occupied) = seats.into_parts();

        Self {
            num_proposers: cursors.len(),
            num_respondents,
            proposer_matches: final_targets(proposer_prefs, cursors),
            respondent_matches: slots
                .into_iter()
                .map(|p| Match::from_dense(p, vacant))
                .collect(),
            indptr: Some(indptr),
            nums_occupied: Some(nums_occupied),
            stats,
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[inline]
    pub fn num_proposers(&self) -> usize {
        self.num_proposers
    }

    #[inline]
    pub fn num_respondents(&self) -> usize {
        self.num_respondents
    }

    /// Respondent matched to each proposer
    #[inline]
    pub fn proposer_matches(&self) -> &[Match] {
        &self.proposer_matches
    }

    /// Proposer held by each respondent (one-to-one) or each seat
    #[inline]
    pub fn respondent_matches(&self) -> &[Match] {
        &self.respondent_matches
    }

    /// Seat partition, present iff capacities were supplied
    #[inline]
    pub fn indptr(&self) -> Option<&[usize]> {
        self.indptr.as_deref()
    }

    /// Filled seats per respondent, present iff capacities were supplied
    #[inline]
    pub fn nums_occupied(&self) -> Option<&[usize]> {
        self.nums_occupied.as_deref()
    }

    #[inline]
    pub fn is_capacitated(&self) -> bool {
        self.indptr.is_some()
    }

    #[inline]
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Respondent matched to proposer `p`
    #[inline]
    pub fn proposer_match(&self, p: usize) -> Match {
        self.proposer_matches[p]
    }

    /// Seats of respondent `r`, vacant ones included
    ///
    /// # Panics
    ///
    /// Panics if `r >= num_respondents()`.
    pub fn held_by(&self, r: usize) -> &[Match] {
        match &self.indptr {
            Some(indptr) => &self.respondent_matches[indptr[r]..indptr[r + 1]],
            None => &self.respondent_matches[r..r + 1],
        }
    }

    /// Proposers held by respondent `r`
    pub fn partners(&self, r: usize) -> impl Iterator<Item = usize> + '_ {
        self.held_by(r).iter().filter_map(|m| m.partner())
    }

    /// Number of proposers that ended up matched
    pub fn num_matched(&self) -> usize {
        self.proposer_matches.iter().filter(|m| m.is_matched()).count()
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Dense arrays using the sentinel encoding.
    ///
    /// Returns `(proposer_matches, respondent_matches, indptr)` where
    /// unmatched proposers hold `n` and empty seats hold `m`.
    pub fn to_dense(&self) -> (Vec<usize>, Vec<usize>, Option<Vec<usize>>) {
        let proposers = self
            .proposer_matches
            .iter()
            .map(|m| m.to_dense(self.num_respondents))
            .collect();
        let respondents = self
            .respondent_matches
            .iter()
            .map(|m| m.to_dense(self.num_proposers))
            .collect();
        (proposers, respondents, self.indptr.clone())
    }

    /// Deterministic summary with a digest of the matching
    pub fn receipt(&self) -> MatchingReceipt {
        let (proposers, respondents, _) = self.to_dense();
        MatchingReceipt::new(
            self.num_proposers as u64,
            self.num_respondents as u64,
            self.num_matched() as u64,
            self.stats.rounds,
            self.stats.proposals,
            self.stats.evictions,
            MatchingReceipt::compute_digest(&proposers, &respondents),
        )
    }
}

/// Each proposer ends at the last entry it proposed to.
fn final_targets(proposer_prefs: &PrefMatrix, cursors: &[usize]) -> Vec<Match> {
    let unmatched = proposer_prefs.sentinel();
    cursors
        .iter()
        .enumerate()
        .map(|(p, &cursor)| match cursor.checked_sub(1) {
            Some(j) => Match::from_dense(proposer_prefs.get(p, j), unmatched),
            None => Match::Unmatched,
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
