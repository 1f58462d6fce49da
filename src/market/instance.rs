//! A validated two-sided matching instance.

use crate::market::PrefMatrix;
use crate::types::{MatchingError, Result, Side};

/// Proposer and respondent preferences plus optional respondent capacities.
///
/// Constructing a `Market` is the only fallible step of the pipeline. Row
/// counts fix the market size: with `m` proposer rows and `n` respondent
/// rows, every proposer row must have length `n + 1` and every respondent
/// row length `m + 1`.
///
/// ## Example
///
/// ```
/// use stable_match::market::Market;
///
/// let market = Market::new(
///     &[[0, 1, 2], [1, 0, 2]],
///     &[[1, 0, 2], [0, 1, 2]],
/// )
/// .unwrap()
/// .with_capacities(vec![1, 2])
/// .unwrap();
///
/// assert_eq!(market.num_proposers(), 2);
/// assert_eq!(market.capacity(1), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    proposers: PrefMatrix,
    respondents: PrefMatrix,
    capacities: Option<Vec<usize>>,
}

impl Market {
    /// Validate raw preference rows and build a one-to-one market.
    ///
    /// # Errors
    ///
    /// Fails on the first row with the wrong length or a non-permutation,
    /// checking proposers before respondents.
    pub fn new<P, R>(proposer_prefs: &[P], respondent_prefs: &[R]) -> Result<Self>
    where
        P: AsRef<[usize]>,
        R: AsRef<[usize]>,
    {
        let num_proposers = proposer_prefs.len();
        let num_respondents = respondent_prefs.len();

        let proposers = PrefMatrix::new(Side::Proposer, proposer_prefs, num_respondents + 1)?;
        let respondents = PrefMatrix::new(Side::Respondent, respondent_prefs, num_proposers + 1)?;

        Ok(Self::assemble(proposers, respondents, None))
    }

    /// Build from already validated matrices, checking they fit together.
    ///
    /// # Errors
    ///
    /// * [`MatchingError::SideMismatch`] if a matrix is tagged with the wrong side
    /// * [`MatchingError::RowLength`] if a width is not the other side's size
    ///   plus one, even when the matrix has no rows
    pub fn from_matrices(proposers: PrefMatrix, respondents: PrefMatrix) -> Result<Self> {
        check_side(&proposers, Side::Proposer)?;
        check_side(&respondents, Side::Respondent)?;
        check_width(&proposers, Side::Proposer, respondents.num_rows() + 1)?;
        check_width(&respondents, Side::Respondent, proposers.num_rows() + 1)?;

        Ok(Self::assemble(proposers, respondents, None))
    }

    /// Attach respondent capacities, making this a many-to-one market.
    ///
    /// # Errors
    ///
    /// * [`MatchingError::CapacityLength`] if `capacities.len() != n`
    /// * [`MatchingError::ZeroCapacity`] if any capacity is 0
    pub fn with_capacities(mut self, capacities: Vec<usize>) -> Result<Self> {
        if capacities.len() != self.num_respondents() {
            return Err(MatchingError::CapacityLength {
                expected: self.num_respondents(),
                got: capacities.len(),
            });
        }
        if let Some(respondent) = capacities.iter().position(|&cap| cap == 0) {
            return Err(MatchingError::ZeroCapacity { respondent });
        }

        self.capacities = Some(capacities);
        Ok(self)
    }

    pub(crate) fn assemble(
        proposers: PrefMatrix,
        respondents: PrefMatrix,
        capacities: Option<Vec<usize>>,
    ) -> Self {
        Self {
            proposers,
            respondents,
            capacities,
        }
    }

    #[inline]
    pub fn num_proposers(&self) -> usize {
        self.proposers.num_rows()
    }

    #[inline]
    pub fn num_respondents(&self) -> usize {
        self.respondents.num_rows()
    }

    #[inline]
    pub fn proposer_prefs(&self) -> &PrefMatrix {
        &self.proposers
    }

    #[inline]
    pub fn respondent_prefs(&self) -> &PrefMatrix {
        &self.respondents
    }

    /// Capacities, if this is a many-to-one market
    #[inline]
    pub fn capacities(&self) -> Option<&[usize]> {
        self.capacities.as_deref()
    }

    #[inline]
    pub fn is_capacitated(&self) -> bool {
        self.capacities.is_some()
    }

    /// Seats of respondent `r` (1 in a one-to-one market)
    #[inline]
    pub fn capacity(&self, r: usize) -> usize {
        self.capacities.as_ref().map_or(1, |caps| caps[r])
    }
}

fn check_side(prefs: &PrefMatrix, expected: Side) -> Result<()> {
    if prefs.side() != expected {
        return Err(MatchingError::SideMismatch {
            expected,
            got: prefs.side(),
        });
    }
    Ok(())
}

fn check_width(prefs: &PrefMatrix, side: Side, expected: usize) -> Result<()> {
    if prefs.width() != expected {
        return Err(MatchingError::RowLength {
            side,
            row: 0,
            expected,
            got: prefs.width(),
        });
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_new() {
        let market = Market::new(
            &[vec![0, 1, 2], vec![1, 0, 2], vec![2, 0, 1]],
            &[vec![0, 1, 2, 3], vec![3, 2, 1, 0]],
        )
        .expect("valid market");

        assert_eq!(market.num_proposers(), 3);
        assert_eq!(market.num_respondents(), 2);
        assert!(!market.is_capacitated());
        assert_eq!(market.capacity(0), 1);
        assert_eq!(market.capacities(), None);
    }

    #[test]
    fn test_market_proposer_shape_mismatch() {
        // Two respondents, so proposer rows need length 3
        let err = Market::new(&[vec![0, 1]], &[vec![0, 1], vec![1, 0]]).unwrap_err();
        assert_eq!(
            err,
            MatchingError::RowLength {
                side: Side::Proposer,
                row: 0,
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn test_market_respondent_shape_mismatch() {
        let err = Market::new(&[vec![0, 1]], &[vec![0, 1, 2]]).unwrap_err();
        assert_eq!(
            err,
            MatchingError::RowLength {
                side: Side::Respondent,
                row: 0,
                expected: 2,
                got: 3,
            }
        );
    }

    #[test]
    fn test_market_capacities() {
        let market = Market::new(&[[0, 1, 2]], &[[0, 1], [1, 0]])
            .expect("valid market")
            .with_capacities(vec![2, 1])
            .expect("valid capacities");

        assert!(market.is_capacitated());
        assert_eq!(market.capacities(), Some(&[2, 1][..]));
        assert_eq!(market.capacity(0), 2);
    }

    #[test]
    fn test_market_capacity_length_mismatch() {
        let err = Market::new(&[[0, 1, 2]], &[[0, 1], [1, 0]])
            .expect("valid market")
            .with_capacities(vec![1])
            .unwrap_err();
        assert_eq!(err, MatchingError::CapacityLength { expected: 2, got: 1 });
    }

    #[test]
    fn test_market_zero_capacity() {
        let err = Market::new(&[[0, 1, 2]], &[[0, 1], [1, 0]])
            .expect("valid market")
            .with_capacities(vec![1, 0])
            .unwrap_err();
        assert_eq!(err, MatchingError::ZeroCapacity { respondent: 1 });
    }

    #[test]
    fn test_market_from_matrices() {
        let proposers = PrefMatrix::new(Side::Proposer, &[[1, 0, 2]], 3).expect("valid rows");
        let respondents =
            PrefMatrix::new(Side::Respondent, &[[0, 1], [1, 0]], 2).expect("valid rows");
        assert!(Market::from_matrices(proposers.clone(), respondents).is_ok());

        let too_narrow = PrefMatrix::new(Side::Respondent, &[[0, 1, 2]], 3).expect("valid rows");
        assert!(Market::from_matrices(proposers, too_narrow).is_err());
    }

    #[test]
    fn test_market_from_matrices_empty_side_needs_width() {
        let no_proposers =
            PrefMatrix::new(Side::Proposer, &[] as &[[usize; 0]], 0).expect("no rows is valid");
        let respondents = PrefMatrix::new(Side::Respondent, &[[0], [0]], 1).expect("valid rows");

        let err = Market::from_matrices(no_proposers, respondents.clone()).unwrap_err();
        assert_eq!(
            err,
            MatchingError::RowLength {
                side: Side::Proposer,
                row: 0,
                expected: 3,
                got: 0,
            }
        );

        // The correctly shaped empty side is accepted and solves cleanly
        let no_proposers =
            PrefMatrix::new(Side::Proposer, &[] as &[[usize; 3]], 3).expect("no rows is valid");
        let market = Market::from_matrices(no_proposers, respondents).expect("valid market");
        let result = crate::engine::MatchingEngine::new().run(&market);
        assert_eq!(result.num_matched(), 0);
        assert_eq!(result.respondent_matches().len(), 2);
    }

    #[test]
    fn test_market_from_matrices_rejects_swapped_sides() {
        let proposers = PrefMatrix::new(Side::Proposer, &[[1, 0, 2]], 3).expect("valid rows");
        let respondents =
            PrefMatrix::new(Side::Respondent, &[[0, 1], [1, 0]], 2).expect("valid rows");
        let mislabeled =
            PrefMatrix::new(Side::Respondent, &[[1, 0, 2]], 3).expect("valid rows");

        let err = Market::from_matrices(mislabeled, respondents.clone()).unwrap_err();
        assert_eq!(
            err,
            MatchingError::SideMismatch {
                expected: Side::Proposer,
                got: Side::Respondent,
            }
        );

        let err = Market::from_matrices(respondents, proposers).unwrap_err();
        assert_eq!(
            err,
            MatchingError::SideMismatch {
                expected: Side::Proposer,
                got: Side::Respondent,
            }
        );
    }

    #[test]
    fn test_market_empty_sides() {
        // No respondents: every proposer row is just the sentinel
        let market = Market::new(&[[0], [0]], &[] as &[[usize; 3]]).expect("valid market");
        assert_eq!(market.num_proposers(), 2);
        assert_eq!(market.num_respondents(), 0);
    }
}
