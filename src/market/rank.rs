//! Rank tables: inverted preference orders.
//!
//! A preference row answers "who is my j-th choice?". The engine needs the
//! opposite question, "how do I rank agent x?", once per proposal. Inverting
//! every row up front makes that an O(1) array read:
//!
//! ```text
//! prefs[r] = [2, 1, 0, 3]   ->   ranks[r] = [2, 1, 0, 3]
//! prefs[r] = [3, 0, 2, 1]   ->   ranks[r] = [1, 3, 2, 0]
//! ```

use crate::market::PrefMatrix;

/// Per-agent rank lookup built from a [`PrefMatrix`]. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    num_rows: usize,
    width: usize,
    /// `ranks[i * width + id]` = position of `id` in row `i` (0 = best)
    ranks: Vec<usize>,
}

impl RankTable {
    /// Invert every row of `prefs`. O(rows * width).
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::market::{PrefMatrix, RankTable};
    /// use stable_match::types::Side;
    ///
    /// let prefs = PrefMatrix::new(Side::Respondent, &[[3, 0, 2, 1]], 4).unwrap();
    /// let ranks = RankTable::from_prefs(&prefs);
    ///
    /// assert_eq!(ranks.rank(0, 3), 0);
    /// assert_eq!(ranks.rank(0, 1), 3);
    /// assert!(ranks.prefers(0, 0, 2));
    /// ```
    pub fn from_prefs(prefs: &PrefMatrix) -> Self {
        let width = prefs.width();
        let mut ranks = vec![0; prefs.num_rows() * width];

        for (i, row) in prefs.rows().enumerate() {
            let out = &mut ranks[i * width..(i + 1) * width];
            for (j, &id) in row.iter().enumerate() {
                out[id] = j;
            }
        }

        Self {
            num_rows: prefs.num_rows(),
            width,
            ranks,
        }
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Id of the "unmatched" sentinel
    #[inline]
    pub fn sentinel(&self) -> usize {
        self.width - 1
    }

    /// Rank agent `i` gives to `id` (0 = most preferred)
    #[inline]
    pub fn rank(&self, i: usize, id: usize) -> usize {
        self.ranks[i * self.width + id]
    }

    /// Whether agent `i` strictly prefers `a` to `b`
    #[inline]
    pub fn prefers(&self, i: usize, a: usize, b: usize) -> bool {
        self.rank(i, a) < self.rank(i, b)
    }

    /// Whether agent `i` ranks `id` above staying unmatched
    #[inline]
    pub fn is_acceptable(&self, i: usize, id: usize) -> bool {
        self.prefers(i, id, self.sentinel())
    }

    /// The full rank row of agent `i`
    #[inline]
    pub fn row(&self, i: usize) -> &[usize] {
        &self.ranks[i * self.width..(i + 1) * self.width]
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
