//! 3x3 matrix for linear (non-translating) work such as normal matrices.

use std::ops::Mul;

use super::mat2::Mat2;
use super::vec3::Vec3;
use crate::error::{Degeneracy, RenderError, Result};

/// Row-major 3x3 matrix. Vectors multiply on the left, like [`Mat4`].
///
/// [`Mat4`]: super::mat4::Mat4
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Mat3 {
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
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
        let mut result = [[0.0f32; 3]; 3];
        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                result[col][row] = *value;
            }
        }
        Self::new(result)
    }

    /// The 2x2 sub-matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat2 {
        let mut sub = [[0.0f32; 2]; 2];
        for i in (0..3).filter(|&i| i != row) {
            for j in (0..3).filter(|&j| j != col) {
                sub[if i > row { i - 1 } else { i }][if j > col { j - 1 } else { j }] =
                    self.data[i][j];
            }
        }
        Mat2::new(sub)
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        (0..3).map(|col| self.data[0][col] * self.cofactor(0, col)).sum()
    }

    /// Adjugate divided by the determinant.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(RenderError::DegenerateTransform(Degeneracy::SingularMatrix));
        }
        let mut inverse = [[0.0f32; 3]; 3];
        for (row, values) in inverse.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.cofactor(col, row) / det;
            }
        }
        Ok(Self::new(inverse))
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = (0..3).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }
        Mat3::new(result)
    }
}

/// Row vector times matrix: `v * M`.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, m: Mat3) -> Self::Output {
        let d = &m.data;
        Vec3::new(
            self.x * d[0][0] + self.y * d[1][0] + self.z * d[2][0],
            self.x * d[0][1] + self.y * d[1][1] + self.z * d[2][1],
            self.x * d[0][2] + self.y * d[1][2] + self.z * d[2][2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn determinant_by_cofactors() {
        let m = Mat3::new([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.determinant(), -306.0);
    }

    #[test]
    fn minor_drops_row_and_column() {
        let m = Mat3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.minor(1, 1), Mat2::new([[1.0, 3.0], [7.0, 9.0]]));
    }

    #[test]
    fn inverse_reverts_transform() {
        let m = Mat3::new([[2.0, 0.0, 1.0], [0.0, 4.0, 2.0], [1.0, 0.0, 3.0]]);
        let v = Vec3::new(1.0, -2.0, 5.0);
        let back = (v * m) * m.inverse().unwrap();
        assert_relative_eq!(back, v, epsilon = 1e-5);
    }

    #[test]
    fn scaling_inverse_is_exact() {
        let m = Mat3::new([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
        assert_eq!(m * m.inverse().unwrap(), Mat3::identity());
    }

    #[test]
    fn identical_rows_are_singular() {
        let m = Mat3::new([[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [0.0, 1.0, 0.0]]);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inverse().is_err());
    }
}
