//! Look-at camera
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! The camera keeps its eye, focus and up vectors and rebuilds the view
//! matrix whenever one of them changes, so the matrix is always consistent
//! with the stored vectors.

use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Camera defined by an eye position, a focus point and a world up vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    focus: Vec3,
    up: Vec3,
    view: Mat4,
}

impl Default for Camera {
    /// A camera at the origin looking along +Z, whose view matrix is the
    /// identity.
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            focus: Vec3::FORWARD,
            up: Vec3::UP,
            view: Mat4::identity(),
        }
    }
}

impl Camera {
    /// Creates a camera at `eye` looking toward `focus`.
    ///
    /// Fails when `eye == focus` or the view direction is parallel to `up`.
    pub fn looking_at(eye: Vec3, focus: Vec3, up: Vec3) -> Result<Self> {
        let mut camera = Self::default();
        camera.look_at(eye, focus, up)?;
        Ok(camera)
    }

    /// Points the camera. On error the camera is left unchanged.
    pub fn look_at(&mut self, eye: Vec3, focus: Vec3, up: Vec3) -> Result<()> {
        self.view = Mat4::look_at_lh(eye, focus, up)?;
        self.eye = eye;
        self.focus = focus;
        self.up = up;
        Ok(())
    }

    /// Moves the eye while keeping the same focus point and up vector.
    pub fn set_position(&mut self, eye: Vec3) -> Result<()> {
        self.look_at(eye, self.focus, self.up)
    }

    pub fn position(&self) -> Vec3 {
        self.eye
    }

    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Normalized viewing direction.
    pub fn forward(&self) -> Vec3 {
        (self.focus - self.eye).normalize()
    }

    /// Computes the view matrix for the rendering pipeline.
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_has_identity_view() {
        let camera = Camera::default();
        assert_eq!(camera.view_matrix(), Mat4::identity());
        let from_look_at = Camera::looking_at(Vec3::ZERO, Vec3::FORWARD, Vec3::UP).unwrap();
        assert_relative_eq!(from_look_at.view_matrix(), Mat4::identity());
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::UP).unwrap();
        let eye = camera.view_matrix().transform_point(camera.position());
        assert_relative_eq!(eye, Vec3::ZERO, epsilon = 1e-5);

        // Origin is 5 units in front
        let origin = camera.view_matrix().transform_point(Vec3::ZERO);
        assert_relative_eq!(origin.z, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn set_position_keeps_focus() {
        let mut camera = Camera::looking_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::UP).unwrap();
        camera.set_position(Vec3::new(5.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(camera.forward(), Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
        let focus = camera.view_matrix().transform_point(camera.focus());
        assert_relative_eq!(focus, Vec3::new(0.0, 0.0, 5.0), epsilon = 1e-5);
    }

    #[test]
    fn failed_look_at_leaves_camera_unchanged() {
        let mut camera = Camera::looking_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::UP).unwrap();
        let before = camera.clone();
        assert!(camera.look_at(Vec3::ZERO, Vec3::ZERO, Vec3::UP).is_err());
        assert_eq!(camera, before);
    }
}
