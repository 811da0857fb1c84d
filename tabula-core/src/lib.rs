//! Tabula Core - Fundamental types
//!
//! This crate provides the core types used throughout Tabula:
//! - `Shape`: matrix dimensions and the guards every operation runs first
//! - `MatrixError`: the error returned by every fallible operation
//! - `ErrorReport`: structured, serializable view of a `MatrixError`

mod shape;
mod error;

pub use shape::{Shape, validate_shape, validate_equal_shape, validate_mult_shape};
pub use error::{MatrixError, ErrorReport, ErrorContext, Result, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Shape, MatrixError, ErrorReport, Result};
    pub use crate::error::codes;
}
