//! Transform component for scene objects.
//!
//! Provides a [`Transform`] struct with a fluent API for position, rotation
//! (Euler angles) and scale, producing the world matrix a [`Mesh`] draws
//! with.
//!
//! [`Mesh`]: crate::mesh::Mesh

use crate::error::Result;
use crate::math::{mat3::Mat3, mat4::Mat4, vec3::Vec3};

/// A 3D transform with position, rotation (Euler angles), and scale.
///
/// ```ignore
/// transform
///     .set_position(Vec3::new(0.0, 0.0, 10.0))
///     .rotate(Vec3::new(0.0, 0.1, 0.0))
///     .set_scale_uniform(2.0);
/// mesh.set_world_matrix(transform.to_matrix());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    /// Euler angles in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Add a delta rotation (Euler angles in radians).
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation = self.rotation + delta;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    /// The world matrix.
    ///
    /// Order: Scale * RotationZ * RotationY * RotationX * Translation
    /// (row vectors: scale applied first, then rotations, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        self.linear_matrix()
            * Mat4::translation(self.position.x, self.position.y, self.position.z)
    }

    /// Inverse transpose of the rotation and scale part, for transforming
    /// normals under non-uniform scale.
    ///
    /// Fails when a scale component is zero.
    pub fn normal_matrix(&self) -> Result<Mat3> {
        Ok(self.linear_matrix().upper_left().inverse()?.transpose())
    }

    fn linear_matrix(&self) -> Mat4 {
        Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
            * Mat4::rotation_z(self.rotation.z)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_x(self.rotation.x)
    }
}
