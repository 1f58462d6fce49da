//! Random preference and capacity generation.
//!
//! ## Row Contract
//!
//! Every generated row is a uniformly random permutation of `0..=k`, where
//! `k` is the size of the other side and `k` itself is the sentinel:
//!
//! - `allow_unmatched = true`: the sentinel may sit anywhere except first,
//!   so every agent finds at least one partner acceptable
//! - `allow_unmatched = false`: the sentinel is always last, so every
//!   partner is acceptable
//!
//! When the other side is empty the only possible row is `[0]`.
//!
//! ## Capacities
//!
//! Respondent `r` gets a capacity drawn uniformly from `1..=s`, where `s` is
//! the rank of the sentinel in `r`'s row, i.e. the number of proposers `r`
//! finds acceptable. A respondent with no acceptable proposers gets 1.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use stable_match::generator::RandomMarket;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let market = RandomMarket::new(8, 6)
//!     .with_capacities(true)
//!     .generate(&mut rng);
//!
//! assert_eq!(market.num_proposers(), 8);
//! assert_eq!(market.capacities().map(|c| c.len()), Some(6));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::market::{Market, PrefMatrix};
use crate::types::Side;

/// Random preference matrices for `m` proposers and `n` respondents.
///
/// # Returns
///
/// `(proposer_prefs, respondent_prefs)` with shapes `m x (n + 1)` and
/// `n x (m + 1)`.
pub fn random_prefs<R: Rng + ?Sized>(
    m: usize,
    n: usize,
    allow_unmatched: bool,
    rng: &mut R,
) -> (PrefMatrix, PrefMatrix) {
    let proposers = random_matrix(Side::Proposer, m, n, allow_unmatched, rng);
    let respondents = random_matrix(Side::Respondent, n, m, allow_unmatched, rng);
    (proposers, respondents)
}

/// Like [`random_prefs`], plus a capacity vector for the respondents.
pub fn random_prefs_with_caps<R: Rng + ?Sized>(
    m: usize,
    n: usize,
    allow_unmatched: bool,
    rng: &mut R,
) -> (PrefMatrix, PrefMatrix, Vec<usize>) {
    let (proposers, respondents) = random_prefs(m, n, allow_unmatched, rng);
    let capacities = random_caps(&respondents, rng);
    (proposers, respondents, capacities)
}

/// Capacities bounded by each respondent's number of acceptable proposers.
pub fn random_caps<R: Rng + ?Sized>(respondent_prefs: &PrefMatrix, rng: &mut R) -> Vec<usize> {
    let sentinel = respondent_prefs.sentinel();
    respondent_prefs
        .rows()
        .map(|row| {
            let acceptable = row.iter().position(|&id| id == sentinel).unwrap_or(0);
            if acceptable == 0 {
                1
            } else {
                rng.gen_range(1..=acceptable)
            }
        })
        .collect()
}

fn random_matrix<R: Rng + ?Sized>(
    side: Side,
    rows: usize,
    others: usize,
    allow_unmatched: bool,
    rng: &mut R,
) -> PrefMatrix {
    let data = (0..rows)
        .map(|_| random_row(others, allow_unmatched, rng))
        .collect();
    PrefMatrix::from_valid_rows(side, data, others + 1)
}

fn random_row<R: Rng + ?Sized>(k: usize, allow_unmatched: bool, rng: &mut R) -> Vec<usize> {
    let mut row: Vec<usize> = (0..k).collect();
    row.shuffle(rng);

    if allow_unmatched && k > 0 {
        let pos = rng.gen_range(1..=k);
        row.insert(pos, k);
    } else {
        row.push(k);
    }
    row
}

// ============================================================================
// RandomMarket builder
// ============================================================================

/// Builder for random [`Market`]s.
///
/// Defaults: unmatched allowed (never first), no capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomMarket {
    num_proposers: usize,
    num_respondents: usize,
    allow_unmatched: bool,
    with_capacities: bool,
}

impl RandomMarket {
    pub fn new(num_proposers: usize, num_respondents: usize) -> Self {
        Self {
            num_proposers,
            num_respondents,
            allow_unmatched: true,
            with_capacities: false,
        }
    }

    /// Let the sentinel appear anywhere but first (true) or force it last
    pub fn allow_unmatched(mut self, allow: bool) -> Self {
        self.allow_unmatched = allow;
        self
    }

    /// Also draw respondent capacities
    pub fn with_capacities(mut self, with_capacities: bool) -> Self {
        self.with_capacities = with_capacities;
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Market {
        let (proposers, respondents) = random_prefs(
            self.num_proposers,
            self.num_respondents,
            self.allow_unmatched,
            rng,
        );
        let capacities = self
            .with_capacities
            .then(|| random_caps(&respondents, rng));

        Market::assemble(proposers, respondents, capacities)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
