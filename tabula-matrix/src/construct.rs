//! Matrix construction: zeros, filled, identity, from_rows

use tabula_core::{validate_shape, MatrixError, Result};
use crate::types::Matrix;

impl Matrix {
    /// `rows`×`cols` matrix with every entry set to `value`
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let size = rows.checked_mul(cols)
            .ok_or(MatrixError::InvalidShape { size: 0, rows, cols })?;
        let shape = validate_shape(size, rows, cols)?;
        Ok(Matrix::from_parts(vec![value; size], shape))
    }

    /// `rows`×`cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Matrix::filled(rows, cols, 0.0)
    }

    /// `n`×`n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Matrix::zeros(n, n)?;
        let entries = m.entries_mut();
        for i in 0..n {
            entries[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Build a matrix from a list of rows.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut entries = Vec::with_capacity(rows.len() * cols);

        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                let size = rows.iter().map(|r| r.as_ref().len()).sum();
                return Err(MatrixError::InvalidShape { size, rows: rows.len(), cols });
            }
            entries.extend_from_slice(row);
        }

        Matrix::new(entries, rows.len(), cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
        assert!(Matrix::zeros(0, 3).is_err());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(m.is_square());
        assert!(Matrix::identity(0).is_err());
    }

    #[test]
    fn test_filled() {
        let m = Matrix::filled(2, 2, 7.5).unwrap();
        assert_eq!(m.as_slice(), &[7.5; 4]);
        assert!(Matrix::filled(usize::MAX, 2, 1.0).is_err());
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(1, 0), Some(3.0));

        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(m.shape().cols, 3);
    }

    #[test]
    fn test_from_rows_invalid() {
        let empty: [Vec<f64>; 0] = [];
        assert!(matches!(Matrix::from_rows(&empty), Err(MatrixError::InvalidShape { .. })));
        assert!(matches!(
            Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::InvalidShape { size: 3, rows: 2, cols: 2 })
        ));
        assert!(Matrix::from_rows(&[Vec::<f64>::new()]).is_err());
    }
}
