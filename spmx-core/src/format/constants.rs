//! Format constants for the SPMX coordinate-list text format

/// Key written before the row count on the first header line
pub const ROWS_KEY: &str = "rows";

/// Key written before the column count on the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, column, value
pub const ENTRY_FIELDS: usize = 3;
