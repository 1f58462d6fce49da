//! The two sides of a two-sided matching market.

// ============================================================================
// Side enum
// ============================================================================

/// Market side: the proposing side or the responding side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Agents that make offers (students, men in the marriage market)
    Proposer,
    /// Agents that hold or reject offers (colleges, women)
    Respondent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Proposer => write!(f, "proposer"),
            Side::Respondent => write!(f, "respondent"),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
