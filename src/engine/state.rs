//! Proposer-side loop state: cursors and single flags.

/// Per-proposer cursor and "still proposing" flag.
///
/// Cursors only move forward, one step per proposal, which bounds the loop
/// by the total length of all proposer preference rows.
#[derive(Debug, Clone)]
pub struct ProposalState {
    /// Next preference index to propose to
    cursors: Vec<usize>,

    /// Unmatched and still willing to propose
    single: Vec<bool>,

    /// Count of `true` entries in `single`
    num_single: usize,
}

impl ProposalState {
    /// Every proposer starts single at cursor 0
    pub fn new(num_proposers: usize) -> Self {
        Self {
            cursors: vec![0; num_proposers],
            single: vec![true; num_proposers],
            num_single: num_proposers,
        }
    }

    #[inline]
    pub fn is_single(&self, p: usize) -> bool {
        self.single[p]
    }

    #[inline]
    pub fn any_single(&self) -> bool {
        self.num_single > 0
    }

    /// Return the current cursor of `p` and move it one step forward
    #[inline]
    pub fn advance(&mut self, p: usize) -> usize {
        let j = self.cursors[p];
        self.cursors[p] += 1;
        j
    }

    /// `p` is held by a respondent or has given up; stop proposing
    #[inline]
    pub fn settle(&mut self, p: usize) {
        if self.single[p] {
            self.single[p] = false;
            self.num_single -= 1;
        }
    }

    /// `p` was evicted and resumes proposing from its cursor
    #[inline]
    pub fn release(&mut self, p: usize) {
        if !self.single[p] {
            self.single[p] = true;
            self.num_single += 1;
        }
    }

    #[inline]
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
