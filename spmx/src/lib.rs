//! SPMX - Sparse matrix arithmetic over coordinate-list text files
//!
//! This crate is the file and command-line layer on top of `spmx-core`:
//!
//! - **spmx-core**: the matrix type, text format and arithmetic (no I/O)
//! - **spmx**: file loading and saving, run configuration, the operation
//!   selector and the `spmx` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{run, Operation, RunConfig};
//!
//! fn example() -> spmx::Result<()> {
//!     let config = RunConfig::default()
//!         .with_input_dir("sample_inputs")
//!         .with_operands("a.txt", "b.txt")
//!         .with_output_dir("out");
//!
//!     let outcome = run(&config, Operation::Multiply)?;
//!     println!("{} nonzero entries", outcome.result.nnz());
//!     Ok(())
//! }
//! ```

// Re-export the core abstractions
pub use spmx_core::{Entry, ErrorCategory, OpKind, SparseMatrix, SpmxError};

pub mod config;
pub mod driver;
pub mod error;
pub mod file_io;
pub mod operation;

pub use config::{OutputFormat, RunConfig};
pub use driver::{apply_and_save, load_operands, run, Operands, RunOutcome};
pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use operation::{prompt_operation, Operation};
