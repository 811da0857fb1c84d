//! Matrix arithmetic: negate, scale, add, sub, increment/decrement, matmul
//!
//! Shape-checked operations validate before touching any storage, so a
//! failed `try_*_assign` leaves the receiver exactly as it was. Operator
//! forms of the checked operations (`&a + &b`, `&a - &b`, `&a * &b`) return
//! `Result<Matrix>`.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};
use tabula_core::{validate_equal_shape, validate_mult_shape, Result};
use crate::types::Matrix;

impl Matrix {
    /// Unary plus: an independent copy with unchanged values
    pub fn plus(&self) -> Matrix {
        self.clone()
    }

    /// Sign-flip every nonzero entry; zeros (including `-0.0`) become `+0.0`
    pub fn negated(&self) -> Matrix {
        let mut result = self.clone();
        for val in result.entries_mut() {
            *val = if *val != 0.0 { -*val } else { 0.0 };
        }
        result
    }

    /// Multiply every entry by `scalar`, returning a new matrix
    pub fn scale(&self, scalar: f64) -> Matrix {
        let mut result = self.clone();
        result.scale_in_place(scalar);
        result
    }

    /// Multiply every entry by `scalar` in place
    pub fn scale_in_place(&mut self, scalar: f64) -> &mut Self {
        for val in self.entries_mut() {
            *val *= scalar;
        }
        self
    }

    /// Element-wise sum; shapes must match
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix> {
        let mut result = self.clone();
        result.try_add_assign(other)?;
        Ok(result)
    }

    /// Element-wise difference; shapes must match
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix> {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }

    /// `self += other`
    pub fn try_add_assign(&mut self, other: &Matrix) -> Result<&mut Self> {
        validate_equal_shape("add", self.shape(), other.shape())?;
        for (val, rhs) in self.entries_mut().iter_mut().zip(other.as_slice()) {
            *val += rhs;
        }
        Ok(self)
    }

    /// `self -= other`
    pub fn try_sub_assign(&mut self, other: &Matrix) -> Result<&mut Self> {
        validate_equal_shape("sub", self.shape(), other.shape())?;
        for (val, rhs) in self.entries_mut().iter_mut().zip(other.as_slice()) {
            *val -= rhs;
        }
        Ok(self)
    }

    /// Prefix increment: add 1 to every entry, return the mutated receiver
    pub fn increment(&mut self) -> &mut Self {
        for val in self.entries_mut() {
            *val += 1.0;
        }
        self
    }

    /// Prefix decrement: subtract 1 from every entry, return the mutated receiver
    pub fn decrement(&mut self) -> &mut Self {
        for val in self.entries_mut() {
            *val -= 1.0;
        }
        self
    }

    /// Postfix increment: increment the receiver, return its previous value
    pub fn post_increment(&mut self) -> Matrix {
        let before = self.clone();
        self.increment();
        before
    }

    /// Postfix decrement: decrement the receiver, return its previous value
    pub fn post_decrement(&mut self) -> Matrix {
        let before = self.clone();
        self.decrement();
        before
    }

    /// Matrix product.
    ///
    /// For `self` shaped R×K and `other` shaped K×C the result is R×C with
    /// `result[r][c] = Σ_k self[r][k] * other[k][c]`, summed in increasing `k`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix> {
        let shape = validate_mult_shape(self.shape(), other.shape())?;
        let inner = self.cols();
        let (lhs, rhs) = (self.as_slice(), other.as_slice());

        let mut entries = Vec::with_capacity(shape.rows * shape.cols);
        for r in 0..shape.rows {
            let row = &lhs[r * inner..(r + 1) * inner];
            for c in 0..shape.cols {
                let mut acc = 0.0;
                for (k, &left) in row.iter().enumerate() {
                    acc += left * rhs[k * shape.cols + c];
                }
                entries.push(acc);
            }
        }

        Ok(Matrix::from_parts(entries, shape))
    }

    /// `self *= other`: rows are kept, columns become `other.cols()`
    pub fn try_mul_assign(&mut self, other: &Matrix) -> Result<&mut Self> {
        let product = self.try_mul(other)?;
        *self = product;
        Ok(self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negated()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negated()
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        self.try_add(rhs)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &Matrix) -> Result<Matrix> {
        self.try_sub(rhs)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.try_mul(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, scalar: f64) -> Matrix {
        self.scale_in_place(scalar);
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scale(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix * self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale_in_place(scalar);
    }
}
