//! Matrix comparison: element-wise equality and ordering by entry sum
//!
//! The checked forms (`try_eq`, `try_lt`, ...) fail with `ShapeMismatch`
//! for operands of different shapes. The `PartialEq`/`PartialOrd` impls
//! cannot fail, so there mismatched shapes are simply unequal and unordered.

use std::cmp::Ordering;
use tabula_core::{validate_equal_shape, Result};
use crate::types::Matrix;

impl Matrix {
    /// True iff every pair of entries is equal (`0.0 == -0.0`)
    pub fn try_eq(&self, other: &Matrix) -> Result<bool> {
        validate_equal_shape("eq", self.shape(), other.shape())?;
        Ok(self.entries_equal(other))
    }

    pub fn try_ne(&self, other: &Matrix) -> Result<bool> {
        Ok(!self.try_eq(other)?)
    }

    /// Strictly smaller entry sum
    pub fn try_lt(&self, other: &Matrix) -> Result<bool> {
        validate_equal_shape("lt", self.shape(), other.shape())?;
        Ok(self.sum() < other.sum())
    }

    /// Strictly larger entry sum
    pub fn try_gt(&self, other: &Matrix) -> Result<bool> {
        validate_equal_shape("gt", self.shape(), other.shape())?;
        Ok(self.sum() > other.sum())
    }

    /// `try_lt` or `try_eq`
    pub fn try_le(&self, other: &Matrix) -> Result<bool> {
        Ok(self.try_lt(other)? || self.try_eq(other)?)
    }

    /// `try_gt` or `try_eq`
    pub fn try_ge(&self, other: &Matrix) -> Result<bool> {
        Ok(self.try_gt(other)? || self.try_eq(other)?)
    }

    fn entries_equal(&self, other: &Matrix) -> bool {
        self.as_slice().iter().zip(other.as_slice()).all(|(a, b)| a == b)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.shape() == other.shape() && self.entries_equal(other)
    }
}

impl PartialOrd for Matrix {
    /// `Less`/`Greater` by entry sum, `Equal` only for element-wise equal
    /// matrices. Different shapes, tied sums with different entries, and
    /// NaN sums are unordered.
    fn partial_cmp(&self, other: &Matrix) -> Option<Ordering> {
        if self.shape() != other.shape() {
            return None;
        }
        let (lhs, rhs) = (self.sum(), other.sum());
        if lhs < rhs {
            Some(Ordering::Less)
        } else if lhs > rhs {
            Some(Ordering::Greater)
        } else if self.entries_equal(other) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}
