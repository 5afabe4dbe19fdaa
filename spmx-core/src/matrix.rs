//! Hash-map backed sparse integer matrix
//!
//! Only nonzero entries are stored, keyed by their `(row, col)` coordinate.
//! Every mutation goes through [`SparseMatrix::set_element`], which is where
//! the "no stored zeros" invariant is enforced.

use alloc::vec::Vec;
use hashbrown::HashMap;

/// A single stored coordinate/value triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }
}

/// Sparse matrix of `i64` values with a fixed shape
///
/// Coordinates are not checked against the declared shape by the element
/// accessors. The text loader and the serde deserializer reject entries that
/// fall outside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    pub(crate) elements: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Build a matrix from triples, applying each one through the setter
    ///
    /// Later triples overwrite earlier ones at the same coordinate, and zero
    /// values remove whatever was stored there.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value);
        }
        matrix
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored nonzero entries
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at `(row, col)`, or 0 when nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> i64 {
        self.elements.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Store `value` at `(row, col)`; a zero value removes the entry
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) {
        if value != 0 {
            self.elements.insert((row, col), value);
        } else {
            self.elements.remove(&(row, col));
        }
    }

    /// Whether `(row, col)` lies inside the declared shape
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Iterate stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// Stored entries ordered by ascending `(row, col)`
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries().collect();
        entries.sort_unstable_by_key(|e| (e.row, e.col));
        entries
    }
}
