//! Per-agent outcome of a matching.
//!
//! Internally the engine uses the size of the other side as a dense
//! "unmatched" index so that rank lookups stay plain array reads. `Match` is
//! the tagged form handed to callers; conversion happens only at the boundary.

/// What a single agent ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Match {
    /// Matched with the agent of the given index on the other side
    Matched(usize),
    /// Remains single (proposer) or the seat is vacant (respondent)
    Unmatched,
}

impl Match {
    /// Build from a dense id, where `sentinel` means unmatched
    #[inline]
    pub fn from_dense(id: usize, sentinel: usize) -> Self {
        if id == sentinel {
            Match::Unmatched
        } else {
            Match::Matched(id)
        }
    }

    /// Convert back to a dense id, using `sentinel` for unmatched
    #[inline]
    pub fn to_dense(self, sentinel: usize) -> usize {
        match self {
            Match::Matched(id) => id,
            Match::Unmatched => sentinel,
        }
    }

    /// The partner index, if any
    #[inline]
    pub fn partner(self) -> Option<usize> {
        match self {
            Match::Matched(id) => Some(id),
            Match::Unmatched => None,
        }
    }

    #[inline]
    pub fn is_matched(self) -> bool {
        matches!(self, Match::Matched(_))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
