//! Per-triangle draw sequence: clip transform, perspective divide, viewport
//! mapping, culling and fill.

use tracing::trace;

use super::backbuffer::BackBuffer;
use super::rasterizer::{Rasterizer, ScreenTriangle};
use super::shader::{FlatShader, InterpolatedShader};
use super::state::{FillMode, PipelineState, ShadingMode};
use crate::colors::Color;
use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec4::Vec4;
use crate::triangle::Triangle;

/// Matrices one mesh draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTransforms {
    /// World * view, used to find the view-space normal for culling.
    pub model_view: Mat4,
    /// World * view * projection.
    pub model_view_projection: Mat4,
}

/// Why a triangle produced no fragments, or how many it wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Culled,
    Drawn { fragments: usize },
}

/// Maps NDC x/y to screen pixels: `width * (1 + x) / 2`, `height * (1 + y) / 2`.
#[inline]
pub fn viewport(ndc: Vec4, width: u32, height: u32) -> Vec4 {
    Vec4::new(
        width as f32 * (1.0 + ndc.x) / 2.0,
        height as f32 * (1.0 + ndc.y) / 2.0,
        ndc.z,
        ndc.w,
    )
}

/// Transforms a triangle to clip space, divides by w and maps it to the
/// viewport of a `width` x `height` buffer.
///
/// # Errors
///
/// [`Degeneracy::ZeroW`](crate::Degeneracy::ZeroW) when any vertex lands on
/// the eye plane.
pub fn project_triangle(
    triangle: &Triangle,
    mvp: &Mat4,
    width: u32,
    height: u32,
) -> Result<ScreenTriangle> {
    let [a, b, c] = triangle.homogeneous();
    let project = |v: Vec4| -> Result<Vec4> {
        let ndc = (v * *mvp).perspective_divide()?;
        Ok(viewport(ndc, width, height))
    };
    Ok(ScreenTriangle::new([project(a)?, project(b)?, project(c)?]))
}

/// Whether `triangle` is discarded by the pipeline's cull mode, judged by
/// the z of its normal in view space.
pub fn face_culled(triangle: &Triangle, model_view: &Mat4, state: &PipelineState) -> bool {
    let [a, b, c] = triangle.positions().map(|p| model_view.transform_point(p));
    let normal = (b - a).cross(c - b);
    state.cull_mode.discards(normal.z)
}

/// Runs the full draw sequence for one triangle.
///
/// Flat shading uses `fill_color`; interpolated shading blends the vertex
/// colours, falling back to `fill_color` for vertices without one.
///
/// # Errors
///
/// [`RenderError::UnimplementedFillMode`] for wireframe, and
/// [`RenderError::DegenerateTransform`] when projection hits w = 0.
pub fn draw_triangle<R: Rasterizer>(
    rasterizer: &R,
    buffer: &mut BackBuffer,
    triangle: &Triangle,
    transforms: &DrawTransforms,
    state: &PipelineState,
    fill_color: Color,
) -> Result<DrawOutcome> {
    if state.fill_mode == FillMode::Wireframe {
        return Err(RenderError::UnimplementedFillMode(state.fill_mode));
    }

    if face_culled(triangle, &transforms.model_view, state) {
        trace!(cull_mode = ?state.cull_mode, "triangle culled");
        return Ok(DrawOutcome::Culled);
    }

    let screen = project_triangle(
        triangle,
        &transforms.model_view_projection,
        buffer.width(),
        buffer.height(),
    )?;

    let fragments = match state.shading {
        ShadingMode::Flat => {
            let shader = FlatShader::new(fill_color);
            rasterizer.fill_triangle(&screen, buffer, &shader)
        }
        ShadingMode::Interpolated => {
            let shader =
                InterpolatedShader::new(triangle.points.map(|p| p.color.unwrap_or(fill_color)));
            rasterizer.fill_triangle(&screen, buffer, &shader)
        }
    };
    Ok(DrawOutcome::Drawn { fragments })
}
