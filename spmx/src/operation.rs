//! The closed set of binary operations a run can perform

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spmx_core::SparseMatrix;

use crate::{Error, Result};

const PROMPT: &str = "Enter the operation to perform (add, subtract, multiply): ";

/// Binary operation selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// File stem the result of this operation is written under
    pub fn result_stem(self) -> &'static str {
        match self {
            Operation::Add => "addition_result",
            Operation::Subtract => "subtraction_result",
            Operation::Multiply => "multiplication_result",
        }
    }

    /// Apply the operation to `lhs` and `rhs`
    pub fn apply(self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> spmx_core::Result<SparseMatrix> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidOperation(s.to_string()))
    }
}

/// Ask for an operation on `output` and read the answer from `input`
pub fn prompt_operation<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Operation> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| Error::io("<stdout>", e))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| Error::io("<stdin>", e))?;
    answer.parse()
}
