//! Core matrix type

use tabula_core::{validate_shape, Shape, Result};

/// Dense matrix of `f64` stored row-major.
///
/// Every `Matrix` that exists satisfies `rows ≥ 1`, `cols ≥ 1` and
/// `entries.len() == rows * cols`. The fields are private so the only way
/// to obtain one is through a validating constructor or an operation on
/// already valid matrices. `Clone` is a deep copy.
#[derive(Debug, Clone)]
pub struct Matrix {
    entries: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from row-major `entries`.
    ///
    /// Fails with `InvalidShape` when a dimension is zero or
    /// `entries.len() != rows * cols`.
    pub fn new(entries: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        validate_shape(entries.len(), rows, cols)?;
        Ok(Matrix { entries, rows, cols })
    }

    /// Build a matrix whose shape has already been validated against
    /// `entries.len()`.
    pub(crate) fn from_parts(entries: Vec<f64>, shape: Shape) -> Self {
        debug_assert_eq!(shape.size(), Some(entries.len()));
        Matrix { entries, rows: shape.rows, cols: shape.cols }
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of entries (`rows * cols`, never zero)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed matrix
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.entries[row * self.cols + col])
        } else {
            None
        }
    }

    /// Get a row as a slice
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.entries[start..start + self.cols])
    }

    /// Iterate over rows in order
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.entries.chunks_exact(self.cols)
    }

    /// Entries in row-major order
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<f64> {
        self.entries
    }

    /// Sum of all entries, accumulated in row-major order
    pub fn sum(&self) -> f64 {
        self.entries.iter().sum()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [f64] {
        &mut self.entries
    }
}
