//! Coordinate-list text format
//!
//! ```text
//! rows=<N>
//! cols=<M>
//! (r, c, v)
//! (r, c, v)
//! ```
//!
//! Parsing is line oriented and all-or-nothing: the first malformed line
//! aborts the load. Blank lines after the header are skipped. Output is
//! canonical, with entries sorted by `(row, col)` and no trailing newline.

pub mod constants;
pub mod entry;
pub mod header;

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{Result, SparseMatrix, SpmxError};
use constants::HEADER_LINES;

pub use entry::{parse_entry, write_entry};
pub use header::{parse_header, write_header};

/// Parse a matrix from its text representation
///
/// Entries whose coordinates fall outside the declared shape are rejected
/// like any other malformed line.
pub fn parse_matrix(text: &str) -> Result<SparseMatrix> {
    let mut lines = text.lines();
    let (rows, cols) = parse_header(lines.next(), lines.next())?;

    let mut matrix = SparseMatrix::new(rows, cols);
    for (index, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let entry = parse_entry(line)
            .filter(|e| matrix.contains(e.row, e.col))
            .ok_or_else(|| SpmxError::MalformedEntry {
                line: index + HEADER_LINES + 1,
                text: line.to_string(),
            })?;
        matrix.set_element(entry.row, entry.col, entry.value);
    }

    log::debug!(
        "parsed {}x{} matrix with {} nonzero entries",
        rows,
        cols,
        matrix.nnz()
    );
    Ok(matrix)
}

/// Write the canonical text representation of `matrix`
pub fn write_matrix<W: fmt::Write>(out: &mut W, matrix: &SparseMatrix) -> fmt::Result {
    write_header(out, matrix.rows(), matrix.cols())?;
    for entry in matrix.sorted_entries() {
        out.write_char('\n')?;
        write_entry(out, &entry)?;
    }
    Ok(())
}

impl SparseMatrix {
    /// Parse a matrix from text; see [`parse_matrix`]
    pub fn parse(text: &str) -> Result<Self> {
        parse_matrix(text)
    }

    /// Canonical text representation
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl FromStr for SparseMatrix {
    type Err = SpmxError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self)
    }
}
