//! A small CPU software rasterizer.
//!
//! Triangles are transformed with row-vector 4x4 matrices (left-handed, z
//! into the screen), divided by w, mapped to the viewport and filled by a
//! bounding-box rasterizer with a perspective-correct z-buffer. Finished
//! frames are handed to a [`Presenter`](presenter::Presenter), such as the
//! PNG writer.
//!
//! # Quick Start
//!
//! ```ignore
//! use softras::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut scene = Scene::from_config(&config)?;
//! let cube = scene.add_mesh(Mesh::cube());
//! scene.mesh_mut(cube).unwrap().set_position(Vec3::new(0.0, 0.0, 5.0));
//! scene.render()?;
//! scene.present(&mut PngPresenter::new("frame.png"))?;
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod presenter;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;
pub mod triangle;

pub use camera::Camera;
pub use colors::Color;
pub use config::RenderConfig;
pub use error::{Degeneracy, RenderError, Result};
pub use mesh::{Mesh, MeshSource, ObjMeshSource};
pub use presenter::{PngPresenter, Presenter};
pub use projection::Projection;
pub use scene::{FrameStats, Scene};
pub use transform::Transform;
pub use triangle::{Point, Triangle};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softras::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::config::RenderConfig;
    pub use crate::mesh::{Mesh, MeshSource, ObjMeshSource};
    pub use crate::scene::{FrameStats, Scene};

    // Transforms
    pub use crate::projection::Projection;
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::colors::Color;
    pub use crate::presenter::{PngPresenter, Presenter};
    pub use crate::render::{CullMode, FillMode, PipelineState, ShadingMode};
    pub use crate::triangle::{Point, Triangle};

    // Errors
    pub use crate::error::{Degeneracy, RenderError, Result};
}
