//! Addition, subtraction and multiplication of sparse matrices
//!
//! All three borrow their operands and return a freshly owned result. Work
//! is proportional to the stored entries, never to `rows * cols`.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{OpKind, Result, SparseMatrix, SpmxError};

impl SparseMatrix {
    /// Element-wise sum; both operands must have the same shape
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, OpKind::Addition, i64::checked_add)
    }

    /// Element-wise difference; both operands must have the same shape
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, OpKind::Subtraction, i64::checked_sub)
    }

    /// Matrix product; requires `self.cols() == other.rows()`
    ///
    /// `other` is indexed by row once, so each stored entry `(r, k)` of
    /// `self` only visits the stored entries of row `k` in `other`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(other, OpKind::Multiplication));
        }

        let mut other_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (&(row, col), &value) in &other.elements {
            // Entries past the declared width cannot appear in the product
            if col < other.cols() {
                other_rows.entry(row).or_default().push((col, value));
            }
        }

        let overflow = |row, col| SpmxError::Overflow {
            op: OpKind::Multiplication,
            row,
            col,
        };

        // Partial sums are kept wide so that the result does not depend on
        // hash iteration order.
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();
        for (&(row, k), &lhs) in &self.elements {
            let Some(rhs_row) = other_rows.get(&k) else {
                continue;
            };
            for &(col, rhs) in rhs_row {
                let sum = sums.entry((row, col)).or_insert(0);
                *sum = sum
                    .checked_add(i128::from(lhs) * i128::from(rhs))
                    .ok_or_else(|| overflow(row, col))?;
            }
        }

        let mut result = SparseMatrix::new(self.rows(), other.cols());
        for ((row, col), sum) in sums {
            let value = i64::try_from(sum).map_err(|_| overflow(row, col))?;
            result.set_element(row, col, value);
        }

        log::trace!(
            "multiplied {:?} ({} nnz) by {:?} ({} nnz) into {} nnz",
            self.dimensions(),
            self.nnz(),
            other.dimensions(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    fn combine(
        &self,
        other: &SparseMatrix,
        op: OpKind,
        apply: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(self.mismatch(other, op));
        }

        let mut result = self.clone();
        for (&(row, col), &value) in &other.elements {
            let updated = apply(result.get_element(row, col), value)
                .ok_or(SpmxError::Overflow { op, row, col })?;
            result.set_element(row, col, updated);
        }

        log::trace!("{op} of {:?} matrices produced {} nnz", self.dimensions(), result.nnz());
        Ok(result)
    }

    fn mismatch(&self, other: &SparseMatrix, op: OpKind) -> SpmxError {
        SpmxError::DimensionMismatch {
            op,
            lhs: self.dimensions(),
            rhs: other.dimensions(),
        }
    }
}
