//! 2x2 matrix, the base case of the cofactor expansion used by [`Mat3`] and
//! [`Mat4`].
//!
//! [`Mat3`]: super::mat3::Mat3
//! [`Mat4`]: super::mat4::Mat4

use std::ops::Mul;

use crate::error::{Degeneracy, RenderError, Result};

/// Row-major 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    data: [[f32; 2]; 2],
}

impl Mat2 {
    pub fn new(data: [[f32; 2]; 2]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        Self::new([[1.0, 0.0], [0.0, 1.0]])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }

    pub fn transpose(&self) -> Self {
        Self::new([
            [self.data[0][0], self.data[1][0]],
            [self.data[0][1], self.data[1][1]],
        ])
    }

    /// The 1x1 sub-matrix left after deleting `row` and `col`.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> f32 {
        self.data[1 - row][1 - col]
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col)
    }

    /// First-row cofactor expansion; for a 2x2 matrix this is `ad - bc`.
    pub fn determinant(&self) -> f32 {
        self.data[0][0] * self.cofactor(0, 0) + self.data[0][1] * self.cofactor(0, 1)
    }

    /// Adjugate divided by the determinant.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(RenderError::DegenerateTransform(Degeneracy::SingularMatrix));
        }
        let mut inverse = [[0.0; 2]; 2];
        for (row, values) in inverse.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.cofactor(col, row) / det;
            }
        }
        Ok(Self::new(inverse))
    }
}

impl Mul<Mat2> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        let mut result = [[0.0f32; 2]; 2];
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col] + self.data[row][1] * rhs.data[1][col];
            }
        }
        Mat2::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_is_ad_minus_bc() {
        let m = Mat2::new([[3.0, 8.0], [4.0, 6.0]]);
        assert_eq!(m.determinant(), -14.0);
    }

    #[test]
    fn inverse_round_trips_to_identity() {
        let m = Mat2::new([[4.0, 7.0], [2.0, 6.0]]);
        let product = m * m.inverse().unwrap();
        let identity = Mat2::identity();
        for row in 0..2 {
            for col in 0..2 {
                assert!((product.get(row, col) - identity.get(row, col)).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Mat2::new([[1.0, 2.0], [2.0, 4.0]]);
        assert!(m.inverse().is_err());
    }
}
