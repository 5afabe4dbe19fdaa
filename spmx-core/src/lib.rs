#![no_std]

//! SPMX Core - Sparse integer matrices in coordinate-list text form
//!
//! This crate provides the [`SparseMatrix`] type, its line-oriented text
//! format, and shape-checked addition, subtraction and multiplication. It
//! performs no I/O; reading and writing files is left to the caller.
//!
//! ```
//! use spmx_core::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)".parse().unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 4)".parse().unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.to_text(), "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 8)");
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use format::{parse_matrix, write_matrix};
pub use matrix::{Entry, SparseMatrix};
