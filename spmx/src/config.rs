//! Run configuration for the `spmx` front end
//!
//! Paths and the operation are always passed in explicitly, either from a
//! JSON file or from command-line flags; nothing is read from the process
//! environment.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Operation, Result};

/// Encoding used for the result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `rows=`/`cols=` header followed by sorted `(row, col, value)` lines
    #[default]
    Text,
    /// `{ "rows", "cols", "entries" }` JSON document
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

/// Where the operands come from and where the result goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory the operand paths are resolved against
    pub input_dir: PathBuf,
    /// Left operand, relative to `input_dir` unless absolute
    pub lhs: PathBuf,
    /// Right operand, relative to `input_dir` unless absolute
    pub rhs: PathBuf,
    /// Directory the result file is written to
    pub output_dir: PathBuf,
    /// Operation to perform; prompted for when absent
    pub operation: Option<Operation>,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("sample_inputs"),
            lhs: PathBuf::from("easy_sample_01_1.txt"),
            rhs: PathBuf::from("easy_sample_01_2.txt"),
            output_dir: PathBuf::from("."),
            operation: None,
            format: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Read a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the directory operands are resolved against
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Set both operand paths
    pub fn with_operands(mut self, lhs: impl Into<PathBuf>, rhs: impl Into<PathBuf>) -> Self {
        self.lhs = lhs.into();
        self.rhs = rhs.into();
        self
    }

    /// Set the result directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Resolved path of the left operand
    pub fn lhs_path(&self) -> PathBuf {
        self.input_dir.join(&self.lhs)
    }

    /// Resolved path of the right operand
    pub fn rhs_path(&self) -> PathBuf {
        self.input_dir.join(&self.rhs)
    }

    /// Path the result of `operation` is written to
    pub fn output_path(&self, operation: Operation) -> PathBuf {
        self.output_dir
            .join(operation.result_stem())
            .with_extension(self.format.extension())
    }
}
