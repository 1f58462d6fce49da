//! Matching receipt summarizing one engine run.
//!
//! The receipt is a fixed-size SSZ container. Its 32-byte digest is a
//! SHA-256 hash over the dense proposer and respondent match arrays, so two
//! runs on the same market always produce byte-identical receipts.

use ssz_rs::prelude::*;
use sha2::{Digest, Sha256};

/// Summary of a deferred-acceptance run.
///
/// ## Example
///
/// ```
/// use stable_match::types::MatchingReceipt;
///
/// let digest = MatchingReceipt::compute_digest(&[2, 1, 0], &[2, 1, 0]);
/// let receipt = MatchingReceipt::new(
///     3,       // num_proposers
///     3,       // num_respondents
///     3,       // matched_pairs
///     3,       // rounds
///     6,       // proposals
///     0,       // evictions
///     digest,
/// );
/// assert_eq!(receipt.match_rate(), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchingReceipt {
    /// Number of proposers in the market
    pub num_proposers: u64,

    /// Number of respondents in the market
    pub num_respondents: u64,

    /// Proposers that ended up matched
    pub matched_pairs: u64,

    /// Proposal rounds until the fixed point
    pub rounds: u64,

    /// Total proposals made
    pub proposals: u64,

    /// Held proposers displaced by a better proposal
    pub evictions: u64,

    /// SHA-256 over the dense match arrays
    pub digest: [u8; 32],
}

impl MatchingReceipt {
    pub fn new(
        num_proposers: u64,
        num_respondents: u64,
        matched_pairs: u64,
        rounds: u64,
        proposals: u64,
        evictions: u64,
        digest: [u8; 32],
    ) -> Self {
        Self {
            num_proposers,
            num_respondents,
            matched_pairs,
            rounds,
            proposals,
            evictions,
            digest,
        }
    }

    /// Hash the dense proposer and respondent match arrays
    ///
    /// Each array is prefixed with its length so that the boundary between
    /// the two is unambiguous.
    pub fn compute_digest(proposer_matches: &[usize], respondent_matches: &[usize]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for array in [proposer_matches, respondent_matches] {
            hasher.update((array.len() as u64).to_le_bytes());
            for &id in array {
                hasher.update((id as u64).to_le_bytes());
            }
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Check if the market had no proposers
    pub fn is_empty(&self) -> bool {
        self.num_proposers == 0
    }

    /// Fraction of proposers that were matched
    ///
    /// Returns None if there are no proposers.
    pub fn match_rate(&self) -> Option<f64> {
        if self.num_proposers == 0 {
            None
        } else {
            Some(self.matched_pairs as f64 / self.num_proposers as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
