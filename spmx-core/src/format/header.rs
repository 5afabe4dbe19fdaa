//! `rows=`/`cols=` header lines
//!
//! The key in front of the separator is written on output but not checked on
//! input: only the field after the first `=` has to parse as a count.

use core::fmt;

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};
use crate::{Result, SpmxError};

/// Parse the count carried by a single header line
///
/// Returns `None` when the line has no separator or the field after it is
/// not a non-negative integer.
pub fn parse_dimension(line: &str) -> Option<usize> {
    line.split(HEADER_SEPARATOR).nth(1)?.trim().parse().ok()
}

/// Parse the two header lines into `(rows, cols)`
///
/// Both lines must be present and both must parse; any failure is reported
/// as [`SpmxError::InvalidHeader`].
pub fn parse_header(rows_line: Option<&str>, cols_line: Option<&str>) -> Result<(usize, usize)> {
    let rows = rows_line.and_then(parse_dimension);
    let cols = cols_line.and_then(parse_dimension);
    match (rows, cols) {
        (Some(rows), Some(cols)) => Ok((rows, cols)),
        _ => Err(SpmxError::InvalidHeader),
    }
}

/// Write the two header lines, without a trailing newline
pub fn write_header<W: fmt::Write>(out: &mut W, rows: usize, cols: usize) -> fmt::Result {
    write!(
        out,
        "{ROWS_KEY}{HEADER_SEPARATOR}{rows}\n{COLS_KEY}{HEADER_SEPARATOR}{cols}"
    )
}
