//! Matrix shapes and the dimension guards run before every construction
//! and binary operation.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::{MatrixError, Result};

/// The (rows, cols) pair describing a matrix's dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Number of entries, `None` on overflow
    pub fn size(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Check that `size` entries can back a `rows`×`cols` matrix.
///
/// Fails when either dimension is zero, when `rows * cols` overflows, or when
/// the product differs from `size`.
pub fn validate_shape(size: usize, rows: usize, cols: usize) -> Result<Shape> {
    let shape = Shape::new(rows, cols);
    if rows < 1 || cols < 1 || shape.size() != Some(size) {
        tracing::trace!(size, rows, cols, "rejected matrix shape");
        return Err(MatrixError::InvalidShape { size, rows, cols });
    }
    Ok(shape)
}

/// Check that two operands have identical dimensions
pub fn validate_equal_shape(op: &'static str, left: Shape, right: Shape) -> Result<()> {
    if left != right {
        tracing::trace!(op, %left, %right, "operand shapes differ");
        return Err(MatrixError::ShapeMismatch { op, left, right });
    }
    Ok(())
}

/// Check that `left * right` is defined and return the product's shape
pub fn validate_mult_shape(left: Shape, right: Shape) -> Result<Shape> {
    if left.cols != right.rows {
        tracing::trace!(%left, %right, "inner dimensions differ");
        return Err(MatrixError::ShapeMismatch { op: "mul", left, right });
    }
    Ok(Shape::new(left.rows, right.cols))
}
