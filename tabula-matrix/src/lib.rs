//! Tabula Matrix - Dense matrix value type
//!
//! Provides a row-major `f64` matrix with:
//! - Validated construction (new, zeros, filled, identity, from_rows)
//! - Arithmetic (negate, scale, add, sub, increment/decrement, matmul)
//! - Comparison (element-wise equality, ordering by entry sum)
//! - Text formatting (`[1 0]\n[0 1]`) and strict parsing (`[1 0], [0 1]`)
//!
//! Operations that can fail on shape return `tabula_core::Result`, and a
//! failed operation never leaves a partially modified matrix behind.

mod types;
mod construct;
mod ops;
mod compare;
mod format;
mod parse;

pub use types::Matrix;
pub use format::Layout;
pub use parse::parse_matrix;
pub use tabula_core::{MatrixError, ErrorReport, Shape, Result};
