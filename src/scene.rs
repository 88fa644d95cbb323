//! Per-frame orchestration.
//!
//! The [`Scene`] owns the back buffer, the meshes, the camera and the
//! projection matrix. Each call to [`Scene::render`] clears the buffer,
//! composes `view * projection` once, then draws every mesh's triangles in
//! mesh order and triangle order. Draw order is the only tie-break between
//! fragments at equal depth: the first one written stays.

use tracing::debug;

use crate::camera::Camera;
use crate::colors::{self, Color};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::mesh::Mesh;
use crate::presenter::Presenter;
use crate::render::{
    draw_triangle, BackBuffer, DrawOutcome, DrawTransforms, EdgeFunctionRasterizer,
};

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles submitted, culled or not.
    pub triangles: usize,
    /// Triangles discarded by their mesh's cull mode.
    pub culled: usize,
    /// Fragments that passed the depth test and were written.
    pub fragments: usize,
}

pub struct Scene {
    buffer: BackBuffer,
    meshes: Vec<Mesh>,
    camera: Camera,
    projection: Mat4,
    clear_color: Color,
    rasterizer: EdgeFunctionRasterizer,
}

impl Scene {
    /// Creates an empty scene with an identity camera.
    ///
    /// The projection matrix starts as the identity; call
    /// [`set_projection`](Self::set_projection) or build the scene with
    /// [`from_config`](Self::from_config) for a perspective view.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: BackBuffer::new(width, height),
            meshes: Vec::new(),
            camera: Camera::default(),
            projection: Mat4::identity(),
            clear_color: colors::BACKGROUND,
            rasterizer: EdgeFunctionRasterizer::new(),
        }
    }

    /// Creates a scene sized, projected and pointed as `config` describes.
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        let mut scene = Self::new(config.width, config.height);
        scene.set_projection_matrix(config.projection().matrix()?);
        scene.set_camera(Camera::looking_at(config.eye, config.focus, config.up)?);
        scene.set_clear_color(config.clear_color);
        Ok(scene)
    }

    /// Adds a mesh and returns its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut Mesh> {
        self.meshes.get_mut(index)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Rebuilds the perspective matrix. On error the previous projection is
    /// kept.
    pub fn set_projection(&mut self, near: f32, far: f32, fov_y: f32, aspect: f32) -> Result<()> {
        self.projection = Mat4::perspective_lh(near, far, fov_y, aspect)?;
        Ok(())
    }

    pub fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn back_buffer(&self) -> &BackBuffer {
        &self.buffer
    }

    /// Renders one frame into the back buffer.
    ///
    /// # Errors
    ///
    /// Stops at the first triangle that fails to draw: a wireframe mesh, or
    /// a vertex that projects to w = 0. The buffer then holds a partial
    /// frame.
    pub fn render(&mut self) -> Result<FrameStats> {
        self.buffer.clear(self.clear_color);

        let view = self.camera.view_matrix();
        let view_projection = view * self.projection;

        let mut stats = FrameStats::default();
        for mesh in &self.meshes {
            let world = mesh.world_matrix();
            let transforms = DrawTransforms {
                model_view: world * view,
                model_view_projection: world * view_projection,
            };
            let state = mesh.pipeline_state();

            for triangle in mesh.triangles() {
                stats.triangles += 1;
                match draw_triangle(
                    &self.rasterizer,
                    &mut self.buffer,
                    triangle,
                    &transforms,
                    &state,
                    mesh.fill_color(),
                )? {
                    DrawOutcome::Culled => stats.culled += 1,
                    DrawOutcome::Drawn { fragments } => stats.fragments += fragments,
                }
            }
        }

        debug!(
            meshes = self.meshes.len(),
            triangles = stats.triangles,
            culled = stats.culled,
            fragments = stats.fragments,
            "frame rendered"
        );
        Ok(stats)
    }

    /// Hands the finished frame to `presenter`.
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) -> Result<()> {
        presenter.present(self.buffer.frame())
    }
}
