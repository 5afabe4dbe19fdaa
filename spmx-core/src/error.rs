//! Error types for SPMX operations

use alloc::string::String;

/// Binary operation named in dimension and overflow errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Addition,
    Subtraction,
    Multiplication,
}

impl core::fmt::Display for OpKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            OpKind::Addition => "addition",
            OpKind::Subtraction => "subtraction",
            OpKind::Multiplication => "multiplication",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while loading or combining sparse matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpmxError {
    /// The `rows=`/`cols=` header lines are missing or do not hold integers
    InvalidHeader,
    /// A data line is not a well-formed `(row, col, value)` triple
    MalformedEntry {
        /// 1-based line number in the source text
        line: usize,
        /// The offending line with surrounding whitespace removed
        text: String,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        op: OpKind,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// An intermediate value does not fit in an `i64`
    Overflow { op: OpKind, row: usize, col: usize },
}

/// Coarse classification of [`SpmxError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed matrix source text
    Format,
    /// Shape-incompatible operands
    Dimension,
    /// Value range exceeded during arithmetic
    Arithmetic,
}

impl SpmxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpmxError::InvalidHeader | SpmxError::MalformedEntry { .. } => ErrorCategory::Format,
            SpmxError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            SpmxError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }

    pub fn is_dimension_error(&self) -> bool {
        self.category() == ErrorCategory::Dimension
    }
}

impl core::fmt::Display for SpmxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmxError::InvalidHeader => {
                write!(f, "Input file has wrong format: invalid rows/cols definition")
            }
            SpmxError::MalformedEntry { text, .. } => {
                write!(f, "Input file has wrong format: {text}")
            }
            SpmxError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "Matrix dimensions must agree for {op} ({}x{} vs {}x{})",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            SpmxError::Overflow { op, row, col } => {
                write!(f, "Integer overflow during {op} at ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmxError {}

/// Result type for SPMX operations
pub type Result<T> = core::result::Result<T, SpmxError>;
