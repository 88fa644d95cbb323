//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `Vec4 * Mat4`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//! - The coordinate system is left-handed: +X right, +Y up, +Z into the screen
//!
//! # Example
//! ```ignore
//! let world = Mat4::scaling(2.0, 2.0, 2.0) * Mat4::translation(0.0, 0.0, 10.0);
//! let mvp = world * (view * projection);
//! let clip = Vec4::point(1.0, 0.0, 0.0) * mvp;
//! ```

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::mat3::Mat3;
use super::vec3::Vec3;
use super::vec4::Vec4;
use crate::error::{Degeneracy, RenderError, Result};

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    /// Returns a fresh identity matrix.
    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix. The offset lives in the last row.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a left-handed perspective projection.
    ///
    /// View-space z in `[near, far]` maps to clip-space z in `[0, 1]` after
    /// the perspective divide, and clip-space w receives the view-space z.
    ///
    /// # Arguments
    ///
    /// * `near` - Distance to the near plane.
    /// * `far` - Distance to the far plane.
    /// * `fov_y` - Vertical field of view in radians.
    /// * `aspect` - Width divided by height.
    ///
    /// # Errors
    ///
    /// [`Degeneracy::CoincidentClipPlanes`] when `near == far`, and
    /// [`Degeneracy::EmptyFrustum`] when the aspect ratio, the field of view
    /// or a clip plane leaves nothing to project. Zero, infinite and NaN
    /// inputs all land here.
    pub fn perspective_lh(near: f32, far: f32, fov_y: f32, aspect: f32) -> Result<Self> {
        if near == far {
            return Err(RenderError::DegenerateTransform(
                Degeneracy::CoincidentClipPlanes,
            ));
        }
        let empty = || RenderError::DegenerateTransform(Degeneracy::EmptyFrustum);
        let tan_half = (fov_y / 2.0).tan();
        if aspect == 0.0 || !aspect.is_finite() || tan_half == 0.0 || !tan_half.is_finite() {
            return Err(empty());
        }

        let y_scale = 1.0 / tan_half;
        let x_scale = y_scale / aspect;
        let z_range = far / (far - near);
        if !(x_scale.is_finite() && near.is_finite() && far.is_finite() && z_range.is_finite()) {
            return Err(empty());
        }
        Ok(Mat4::new([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, z_range, 1.0],
            [0.0, 0.0, -near * z_range, 0.0],
        ]))
    }

    /// Creates a view matrix with left-handed coordinate system.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `focus` - The point the camera is looking at.
    /// * `up` - The world up direction.
    ///
    /// # Errors
    ///
    /// [`Degeneracy::ZeroLengthVector`] when `eye == focus` or when the view
    /// direction is parallel to `up`.
    pub fn look_at_lh(eye: Vec3, focus: Vec3, up: Vec3) -> Result<Self> {
        let degenerate = || RenderError::DegenerateTransform(Degeneracy::ZeroLengthVector);
        let forward = (focus - eye).try_normalize().ok_or_else(degenerate)?;
        let right = up.cross(forward).try_normalize().ok_or_else(degenerate)?;
        let up = forward.cross(right);

        // Basis vectors as columns; the last row moves the eye to the origin.
        Ok(Self::new([
            [right.x, up.x, forward.x, 0.0],
            [right.y, up.y, forward.y, 0.0],
            [right.z, up.z, forward.z, 0.0],
            [-eye.dot(right), -eye.dot(up), -eye.dot(forward), 1.0],
        ]))
    }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                result[col][row] = *value;
            }
        }
        Mat4::new(result)
    }

    /// The 3x3 sub-matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat3 {
        let mut sub = [[0.0f32; 3]; 3];
        for i in (0..4).filter(|&i| i != row) {
            for j in (0..4).filter(|&j| j != col) {
                sub[if i > row { i - 1 } else { i }][if j > col { j - 1 } else { j }] =
                    self.data[i][j];
            }
        }
        Mat3::new(sub)
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Cofactor expansion along the first row, recursing through [`Mat3`]
    /// and [`Mat2`](super::mat2::Mat2).
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.data[0][col] * self.cofactor(0, col)).sum()
    }

    /// Computes the inverse as the adjugate divided by the determinant.
    ///
    /// # Errors
    ///
    /// [`Degeneracy::SingularMatrix`] when the determinant is zero or not
    /// finite.
    pub fn inverse(&self) -> Result<Mat4> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(RenderError::DegenerateTransform(Degeneracy::SingularMatrix));
        }

        // The inverse is the transpose of the cofactor matrix divided by determinant
        let mut inverse = [[0.0f32; 4]; 4];
        for (row, values) in inverse.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.cofactor(col, row) / det;
            }
        }
        Ok(Mat4::new(inverse))
    }

    /// The linear (rotation and scale) part of the transform.
    pub fn upper_left(&self) -> Mat3 {
        self.minor(3, 3)
    }

    /// Transforms a point with an implicit w of 1, ignoring the resulting w.
    ///
    /// Only meaningful for affine matrices; projective transforms go through
    /// `Vec4 * Mat4` and [`Vec4::perspective_divide`].
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (Vec4::from(p) * *self).to_vec3()
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For the row-vector convention, `v * A * B` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Vec4 * Mat4 (row vector).
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        let d = &m.data;
        Vec4::new(
            self.x * d[0][0] + self.y * d[1][0] + self.z * d[2][0] + self.w * d[3][0],
            self.x * d[0][1] + self.y * d[1][1] + self.z * d[2][1] + self.w * d[3][1],
            self.x * d[0][2] + self.y * d[1][2] + self.z * d[2][2] + self.w * d[3][2],
            self.x * d[0][3] + self.y * d[1][3] + self.z * d[2][3] + self.w * d[3][3],
        )
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn sample_transform() -> Mat4 {
        Mat4::scaling(2.0, 0.5, 3.0)
            * Mat4::rotation_x(0.3)
            * Mat4::rotation_y(-1.1)
            * Mat4::rotation_z(0.7)
            * Mat4::translation(4.0, -2.0, 9.0)
    }

    #[test]
    fn identity_determinant_is_exactly_one() {
        assert_eq!(Mat4::identity().determinant(), 1.0);
    }

    #[test]
    fn identical_rows_have_zero_determinant() {
        let m = Mat4::new([
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 13.0],
        ]);
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn determinant_of_scaling_is_product_of_diagonal() {
        assert_eq!(Mat4::scaling(2.0, 3.0, 4.0).determinant(), 24.0);
    }

    #[test]
    fn matrix_times_inverse_is_identity() {
        let matrices = [
            sample_transform(),
            Mat4::new([
                [4.0, 7.0, 2.0, 3.0],
                [0.0, 5.0, 0.0, 1.0],
                [1.0, 0.0, 3.0, 6.0],
                [2.0, 2.0, 0.0, 8.0],
            ]),
            Mat4::perspective_lh(0.1, 100.0, FRAC_PI_2, 1.5).unwrap(),
        ];
        for m in matrices {
            let inverse = m.inverse().unwrap();
            assert_relative_eq!(m * inverse, Mat4::identity(), epsilon = 1e-4);
            assert_relative_eq!(inverse * m, Mat4::identity(), epsilon = 1e-4);
        }
    }

    #[test]
    fn singular_matrix_is_reported() {
        let m = Mat4::scaling(1.0, 0.0, 1.0);
        assert!(matches!(
            m.inverse(),
            Err(RenderError::DegenerateTransform(Degeneracy::SingularMatrix))
        ));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = sample_transform();
        let t = m.transpose();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(m.get(row, col), t.get(col, row));
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let a = Mat4::rotation_z(FRAC_PI_2);
        let b = Mat4::translation(1.0, 0.0, 0.0);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn composition_applies_left_matrix_first() {
        // Rotate +X onto +Y, then move along +X.
        let m = Mat4::rotation_z(FRAC_PI_2) * Mat4::translation(1.0, 0.0, 0.0);
        let p = m.transform_point(Vec3::RIGHT);
        assert_relative_eq!(p, Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn rotations_match_vector_rotations() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(
            Mat4::rotation_x(0.4).transform_point(v),
            v.rotate_x(0.4),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            Mat4::rotation_y(0.4).transform_point(v),
            v.rotate_y(0.4),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            Mat4::rotation_z(0.4).transform_point(v),
            v.rotate_z(0.4),
            epsilon = 1e-6
        );
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, -5.0);
        let view = Mat4::look_at_lh(eye, Vec3::ZERO, Vec3::UP).unwrap();
        assert_relative_eq!(view.transform_point(eye), Vec3::ZERO, epsilon = 1e-5);

        // The focus point lands straight ahead on +Z.
        let focus = view.transform_point(Vec3::ZERO);
        assert_relative_eq!(focus, Vec3::new(0.0, 0.0, 5.0), epsilon = 1e-5);
    }

    #[test]
    fn look_at_from_off_axis_eye() {
        let eye = Vec3::new(3.0, 4.0, -2.0);
        let view = Mat4::look_at_lh(eye, Vec3::new(-1.0, 0.5, 6.0), Vec3::UP).unwrap();
        assert_relative_eq!(view.transform_point(eye), Vec3::ZERO, epsilon = 1e-5);
    }

    #[test]
    fn look_at_rejects_collinear_up() {
        let result = Mat4::look_at_lh(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Vec3::UP);
        assert!(matches!(
            result,
            Err(RenderError::DegenerateTransform(Degeneracy::ZeroLengthVector))
        ));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let (near, far) = (0.5, 50.0);
        let proj = Mat4::perspective_lh(near, far, FRAC_PI_2, 1.0).unwrap();

        let near_ndc = (Vec4::point(0.0, 0.0, near) * proj)
            .perspective_divide()
            .unwrap();
        let far_ndc = (Vec4::point(0.0, 0.0, far) * proj)
            .perspective_divide()
            .unwrap();
        assert_relative_eq!(near_ndc.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(far_ndc.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(far_ndc.w, far);
    }

    #[test]
    fn perspective_rejects_coincident_planes() {
        assert!(matches!(
            Mat4::perspective_lh(1.0, 1.0, FRAC_PI_2, 1.0),
            Err(RenderError::DegenerateTransform(
                Degeneracy::CoincidentClipPlanes
            ))
        ));
        assert!(matches!(
            Mat4::perspective_lh(0.1, 10.0, 0.0, 1.0),
            Err(RenderError::DegenerateTransform(Degeneracy::EmptyFrustum))
        ));
    }

    #[test]
    fn perspective_rejects_non_finite_aspect() {
        for aspect in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            assert!(matches!(
                Mat4::perspective_lh(0.1, 100.0, FRAC_PI_2, aspect),
                Err(RenderError::DegenerateTransform(Degeneracy::EmptyFrustum))
            ));
        }
    }

    #[test]
    fn perspective_rejects_non_finite_planes() {
        for (near, far) in [(f32::NAN, 100.0), (0.1, f32::NAN), (0.1, f32::INFINITY)] {
            assert!(matches!(
                Mat4::perspective_lh(near, far, FRAC_PI_2, 1.0),
                Err(RenderError::DegenerateTransform(Degeneracy::EmptyFrustum))
            ));
        }
    }
}
