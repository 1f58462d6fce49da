//! Seat storage for capacitated respondents.
//!
//! ## Layout
//!
//! All seats live in one flat slot array. Respondent `r` owns the slots
//! `indptr[r]..indptr[r + 1]`, where `indptr` is the prefix sum of the
//! capacities:
//!
//! ```text
//! capacities = [2, 1, 3]
//! indptr     = [0, 2, 3, 6]
//! slots      = [p, p | p | p, -, -]     (- = vacant sentinel)
//! ```
//!
//! Occupied seats always form a prefix of a respondent's range. Seats are
//! only ever filled at the end of that prefix or overwritten by eviction,
//! never emptied, so `nums_occupied[r]` is also the length of the prefix.

use crate::market::RankTable;

/// Fixed-size seat table partitioned per respondent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTable {
    /// Prefix sum of capacities (length n + 1)
    indptr: Vec<usize>,

    /// Proposer held in each seat, or `vacant`
    slots: Vec<usize>,

    /// Filled seats per respondent
    nums_occupied: Vec<usize>,

    /// Id written into empty seats (the number of proposers)
    vacant: usize,
}

impl SeatTable {
    /// Allocate seats for the given capacities.
    ///
    /// # Arguments
    ///
    /// * `capacities` - Seats per respondent
    /// * `vacant` - Id marking an empty seat
    pub fn new(capacities: &[usize], vacant: usize) -> Self {
        let mut indptr = Vec::with_capacity(capacities.len() + 1);
        let mut total = 0;
        indptr.push(total);
        for &cap in capacities {
            total += cap;
            indptr.push(total);
        }

        Self {
            indptr,
            slots: vec![vacant; total],
            nums_occupied: vec![0; capacities.len()],
            vacant,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn num_respondents(&self) -> usize {
        self.nums_occupied.len()
    }

    #[inline]
    pub fn capacity(&self, r: usize) -> usize {
        self.indptr[r + 1] - self.indptr[r]
    }

    #[inline]
    pub fn num_occupied(&self, r: usize) -> usize {
        self.nums_occupied[r]
    }

    #[inline]
    pub fn has_vacancy(&self, r: usize) -> bool {
        self.num_occupied(r) < self.capacity(r)
    }

    // ========================================================================
    // Seat Operations
    // ========================================================================

    /// Seat `p` in the next free slot of `r`.
    ///
    /// The caller must have checked [`has_vacancy`](Self::has_vacancy).
    pub fn fill(&mut self, r: usize, p: usize) {
        debug_assert!(self.has_vacancy(r), "respondent {} is full", r);
        let slot = self.indptr[r] + self.nums_occupied[r];
        self.slots[slot] = p;
        self.nums_occupied[r] += 1;
    }

    /// Find the held proposer `r` ranks worst.
    ///
    /// Linear scan over the occupied seats of `r`.
    ///
    /// # Returns
    ///
    /// `(slot, proposer)` of the least preferred occupant, or None if `r`
    /// holds nobody.
    pub fn worst_held(&self, r: usize, ranks: &RankTable) -> Option<(usize, usize)> {
        let start = self.indptr[r];
        self.held(r)
            .iter()
            .enumerate()
            .max_by_key(|&(_, &p)| ranks.rank(r, p))
            .map(|(offset, &p)| (start + offset, p))
    }

    /// Overwrite an occupied seat, returning the proposer it held
    pub fn replace(&mut self, slot: usize, p: usize) -> usize {
        std::mem::replace(&mut self.slots[slot], p)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Proposers currently held by `r`
    #[inline]
    pub fn held(&self, r: usize) -> &[usize] {
        let start = self.indptr[r];
        &self.slots[start..start + self.nums_occupied[r]]
    }

    #[inline]
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    #[inline]
    pub fn vacant(&self) -> usize {
        self.vacant
    }

    /// Consume the table, returning `(indptr, slots, nums_occupied)`
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        (self.indptr, self.slots, self.nums_occupied)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
