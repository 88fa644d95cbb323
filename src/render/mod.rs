//! Rasterization: back buffer, pipeline state, shaders and the per-triangle
//! draw sequence.

mod backbuffer;
mod draw;
mod rasterizer;
mod shader;
mod state;

pub use backbuffer::{BackBuffer, Frame};
pub use draw::{draw_triangle, face_culled, project_triangle, viewport, DrawOutcome, DrawTransforms};
pub use rasterizer::{
    barycentric, inside_triangle, perspective_correct, EdgeFunctionRasterizer, Rasterizer,
    ScreenTriangle,
};
pub use shader::{FlatShader, InterpolatedShader, PixelShader};
pub use state::{CullMode, FillMode, PipelineState, ShadingMode};
