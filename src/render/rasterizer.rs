//! Bounding-box triangle rasterization with a per-pixel depth test.
//!
//! # Algorithm Overview
//!
//! 1. Compute the integer bounding box of the three screen-space vertices,
//!    clamped to the buffer
//! 2. For each pixel in the box, test whether its sample point lies inside
//!    the triangle (three 2D cross products sharing a sign)
//! 3. Compute screen-space barycentric weights, correct them for
//!    perspective using the per-vertex clip-space w, and interpolate depth
//! 4. Hand the fragment to the back buffer's depth test, shading it only if
//!    it will be written
//!
//! Sample points sit on the integer lattice: pixel `(x, y)` is sampled at
//! `(x as f32, y as f32)`, so vertices with integer screen coordinates are
//! covered.

use tracing::trace;

use super::backbuffer::BackBuffer;
use super::shader::PixelShader;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// A triangle after viewport mapping.
///
/// For each point, `x`/`y` are screen pixels (Y-up), `z` is the NDC depth
/// and `w` is the clip-space w kept for perspective correction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec4; 3],
}

impl ScreenTriangle {
    pub fn new(points: [Vec4; 3]) -> Self {
        Self { points }
    }

    /// Twice the signed screen-space area.
    pub fn signed_area(&self) -> f32 {
        let [v0, v1, v2] = self.points;
        edge_function(v0, v1, v2)
    }
}

/// 2D cross product `(b - a) x (p - a)`, ignoring z and w.
#[inline]
fn edge_function(a: Vec4, b: Vec4, p: Vec4) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Tests whether `(x, y)` lies inside or on the triangle's edges.
///
/// Each edge is crossed with the vector to the sample point, all at z = 0.
/// The point is inside when the three z components are all non-negative or
/// all non-positive, which accepts either winding order.
pub fn inside_triangle(x: f32, y: f32, v: &[Vec4; 3]) -> bool {
    let p = Vec3::new(x, y, 0.0);
    let [a, b, c] = v.map(|v| Vec3::new(v.x, v.y, 0.0));
    let t1 = (b - a).cross(p - a).z;
    let t2 = (c - b).cross(p - b).z;
    let t3 = (a - c).cross(p - c).z;
    (t1 >= 0.0 && t2 >= 0.0 && t3 >= 0.0) || (t1 <= 0.0 && t2 <= 0.0 && t3 <= 0.0)
}

/// Screen-space barycentric weights `(α, β, γ)` of `(x, y)`.
///
/// Each weight is the area of the sub-triangle opposite its vertex divided
/// by the full area. Returns `None` for a zero-area triangle.
pub fn barycentric(x: f32, y: f32, v: &[Vec4; 3]) -> Option<[f32; 3]> {
    let [v0, v1, v2] = *v;
    let area = edge_function(v0, v1, v2);
    if area == 0.0 || !area.is_finite() {
        return None;
    }
    let p = Vec4::new(x, y, 0.0, 0.0);
    Some([
        edge_function(v1, v2, p) / area,
        edge_function(v2, v0, p) / area,
        edge_function(v0, v1, p) / area,
    ])
}

/// Corrects screen-space weights for perspective and interpolates depth.
///
/// `w_reciprocal = 1 / (α/w₀ + β/w₁ + γ/w₂)` and each corrected weight is
/// `(λᵢ/wᵢ) * w_reciprocal`; the returned depth is
/// `w_reciprocal * (α*z₀/w₀ + β*z₁/w₁ + γ*z₂/w₂)`.
#[inline]
pub fn perspective_correct(lambda: [f32; 3], v: &[Vec4; 3]) -> ([f32; 3], f32) {
    let over_w = [
        lambda[0] / v[0].w,
        lambda[1] / v[1].w,
        lambda[2] / v[2].w,
    ];
    let w_reciprocal = 1.0 / (over_w[0] + over_w[1] + over_w[2]);
    let corrected = over_w.map(|l| l * w_reciprocal);
    let depth = corrected[0] * v[0].z + corrected[1] * v[1].z + corrected[2] * v[2].z;
    (corrected, depth)
}

/// Trait for triangle fill algorithms.
pub trait Rasterizer {
    /// Fills `triangle` into `buffer`, depth-testing every covered pixel.
    ///
    /// Returns the number of fragments written.
    fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &ScreenTriangle,
        buffer: &mut BackBuffer,
        shader: &S,
    ) -> usize;
}

/// Triangle rasterizer that walks the bounding box and tests each pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    fn rasterize_with_shader<S: PixelShader>(
        triangle: &ScreenTriangle,
        buffer: &mut BackBuffer,
        shader: &S,
    ) -> usize {
        let v = &triangle.points;
        if v.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            trace!("skipping triangle with non-finite screen coordinates");
            return 0;
        }
        if triangle.signed_area() == 0.0 {
            return 0;
        }

        // ─────────────────────────────────────────────────────────────────────
        // Bounding box, clamped so no row wraps into its neighbour
        // ─────────────────────────────────────────────────────────────────────
        let min_x = (v[0].x.min(v[1].x).min(v[2].x).floor() as i32).max(0);
        let max_x = (v[0].x.max(v[1].x).max(v[2].x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v[0].y.min(v[1].y).min(v[2].y).floor() as i32).max(0);
        let max_y =
            (v[0].y.max(v[1].y).max(v[2].y).ceil() as i32).min(buffer.height() as i32 - 1);

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as f32, y as f32);
                if !inside_triangle(px, py, v) {
                    continue;
                }
                let Some(lambda) = barycentric(px, py, v) else {
                    continue;
                };
                let (weights, depth) = perspective_correct(lambda, v);
                if buffer.depth(x, y).is_some_and(|stored| depth < stored)
                    && buffer.write_fragment(x, y, depth, shader.shade(weights))
                {
                    written += 1;
                }
            }
        }
        written
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &ScreenTriangle,
        buffer: &mut BackBuffer,
        shader: &S,
    ) -> usize {
        Self::rasterize_with_shader(triangle, buffer, shader)
    }
}
