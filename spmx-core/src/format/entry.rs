//! `(row, col, value)` entry lines

use core::fmt;

use super::constants::{ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR};
use crate::Entry;

/// Parse an already trimmed entry line
///
/// The line must be wrapped in parentheses and hold exactly three
/// comma-separated integers. Whitespace around each field is ignored.
pub fn parse_entry(line: &str) -> Option<Entry> {
    let inner = line.strip_prefix(ENTRY_OPEN)?.strip_suffix(ENTRY_CLOSE)?;

    if inner.split(FIELD_SEPARATOR).count() != ENTRY_FIELDS {
        return None;
    }

    let mut fields = inner.split(FIELD_SEPARATOR).map(str::trim);
    let row = fields.next()?.parse().ok()?;
    let col = fields.next()?.parse().ok()?;
    let value = fields.next()?.parse().ok()?;
    Some(Entry { row, col, value })
}

/// Write one entry as `(row, col, value)`
pub fn write_entry<W: fmt::Write>(out: &mut W, entry: &Entry) -> fmt::Result {
    write!(
        out,
        "{ENTRY_OPEN}{}{FIELD_SEPARATOR} {}{FIELD_SEPARATOR} {}{ENTRY_CLOSE}",
        entry.row, entry.col, entry.value
    )
}
