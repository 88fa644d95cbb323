//! Render settings with sensible defaults.

use crate::colors::{self, Color};
use crate::math::vec3::Vec3;
use crate::projection::Projection;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Everything a [`Scene`](crate::scene::Scene) needs to produce a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub clear_color: Color,
    pub fill_color: Color,
    pub eye: Vec3,
    pub focus: Vec3,
    pub up: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov_y_degrees: 90.0,
            z_near: 0.1,
            z_far: 100.0,
            clear_color: colors::BACKGROUND,
            fill_color: colors::FILL,
            eye: Vec3::ZERO,
            focus: Vec3::FORWARD,
            up: Vec3::UP,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Width divided by height. Infinite or NaN when the height is zero,
    /// which the projection builder rejects.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn projection(&self) -> Projection {
        Projection::from_degrees(
            self.fov_y_degrees,
            self.aspect_ratio(),
            self.z_near,
            self.z_far,
        )
    }
}
