use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// A mesh vertex: position plus texture coordinates and an optional colour.
///
/// Texture coordinates are carried for mesh sources but are not sampled by
/// the rasterizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub uv: Vec2,
    pub color: Option<Color>,
}

impl Point {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            uv: Vec2::ZERO,
            color: None,
        }
    }

    pub const fn with_uv(position: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            uv,
            color: None,
        }
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl From<Vec3> for Point {
    fn from(position: Vec3) -> Self {
        Self::with_uv(position, Vec2::ZERO)
    }
}

/// Three ordered points. The winding order decides which side faces the
/// viewer: see [`Triangle::normal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { points: [a, b, c] }
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.points.map(|p| p.position)
    }

    /// Unnormalized face normal `(b - a) x (c - b)`.
    ///
    /// Triangles wound counter-clockwise as seen by the viewer get a normal
    /// with positive z in view space and count as front-facing.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.positions();
        (b - a).cross(c - b)
    }

    /// Homogeneous (w = 1) positions ready for matrix transforms.
    pub fn homogeneous(&self) -> [Vec4; 3] {
        self.positions().map(Vec4::from)
    }

    /// The same triangle with the opposite winding.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.points;
        Self::new(a, c, b)
    }
}
