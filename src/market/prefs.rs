//! Dense preference matrices.
//!
//! ## Layout
//!
//! A `PrefMatrix` stores one preference order per agent as a row of a
//! row-major `Vec<usize>`. Row `i` lists the ids of the other side from most
//! to least preferred, with the "unmatched" sentinel (the other side's size)
//! somewhere in the row:
//!
//! ```text
//! proposer 0: [1, 0, 3, 2]   prefers 1, then 0, then staying single
//!                            (respondent 2 is unacceptable)
//! ```
//!
//! Every row is validated as a permutation of `0..width` on construction.

use crate::types::{MatchingError, Result, Side};

/// Validated preference orders for one side of the market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefMatrix {
    /// Which side of the market these orders belong to
    side: Side,

    /// Number of agents (rows)
    num_rows: usize,

    /// Other side size + 1 (the sentinel)
    width: usize,

    /// Row-major preference ids
    data: Vec<usize>,
}

impl PrefMatrix {
    /// Build a matrix from rows, validating every row.
    ///
    /// # Arguments
    ///
    /// * `side` - Side of the market the rows belong to (used in errors)
    /// * `rows` - One preference order per agent
    /// * `width` - Required row length: other side size + 1
    ///
    /// # Errors
    ///
    /// * [`MatchingError::RowLength`] if a row is not `width` long
    /// * [`MatchingError::NotAPermutation`] if a row repeats an id or holds
    ///   one `>= width`
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::market::PrefMatrix;
    /// use stable_match::types::Side;
    ///
    /// let prefs = PrefMatrix::new(Side::Proposer, &[[1, 0, 2], [2, 0, 1]], 3).unwrap();
    /// assert_eq!(prefs.num_rows(), 2);
    /// assert_eq!(prefs.sentinel(), 2);
    /// assert_eq!(prefs.row(1), &[2, 0, 1]);
    ///
    /// assert!(PrefMatrix::new(Side::Proposer, &[[1, 1, 2]], 3).is_err());
    /// ```
    pub fn new<R: AsRef<[usize]>>(side: Side, rows: &[R], width: usize) -> Result<Self> {
        let mut data = Vec::with_capacity(rows.len() * width);
        let mut seen = vec![false; width];

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatchingError::RowLength {
                    side,
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }

            seen.fill(false);
            for &id in row {
                if id >= width || seen[id] {
                    return Err(MatchingError::NotAPermutation { side, row: i, id });
                }
                seen[id] = true;
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            side,
            num_rows: rows.len(),
            width,
            data,
        })
    }

    /// Build from rows that are known to be permutations of `0..width`.
    pub(crate) fn from_valid_rows(side: Side, rows: Vec<Vec<usize>>, width: usize) -> Self {
        let num_rows = rows.len();
        let data: Vec<usize> = rows.into_iter().flatten().collect();
        debug_assert_eq!(data.len(), num_rows * width);

        Self {
            side,
            num_rows,
            width,
            data,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of agents on this side
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Row length (other side size + 1)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Id standing for "unmatched" in this matrix's rows
    #[inline]
    pub fn sentinel(&self) -> usize {
        self.width - 1
    }

    /// Preference order of agent `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[usize] {
        let start = i * self.width;
        &self.data[start..start + self.width]
    }

    /// The `j`-th preferred id of agent `i`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.width + j]
    }

    /// Iterate over all rows in agent order
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        // chunks_exact rejects a zero chunk size
        self.data.chunks_exact(self.width.max(1))
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
