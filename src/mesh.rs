//! Meshes and the sources they are loaded from.
//!
//! A [`Mesh`] owns its triangles, a world matrix and the pipeline state its
//! triangles draw with. Geometry comes from a [`MeshSource`]; the crate ships
//! an OBJ-backed source built on `tobj` and a built-in cube.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::colors::{self, Color};
use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::{CullMode, FillMode, PipelineState, ShadingMode};
use crate::triangle::{Point, Triangle};

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// Indices into CUBE_VERTICES, counter-clockwise seen from outside.
const CUBE_FACES: [[usize; 3]; 12] = [
    // Front
    [0, 2, 1],
    [0, 3, 2],
    // Right
    [3, 4, 2],
    [3, 5, 4],
    // Back
    [5, 6, 4],
    [5, 7, 6],
    // Left
    [7, 1, 6],
    [7, 0, 1],
    // Top
    [1, 4, 6],
    [1, 2, 4],
    // Bottom
    [5, 0, 7],
    [5, 3, 0],
];

/// Anything that can produce an ordered list of triangles.
///
/// Winding order is the source's responsibility; it decides which faces the
/// pipeline culls.
pub trait MeshSource {
    /// Human-readable name, used for the mesh and in errors.
    fn name(&self) -> &str;

    /// Produces the triangles in draw order.
    fn load(&self) -> Result<Vec<Triangle>>;

    /// Pipeline state the source asks for, if any.
    fn pipeline_state(&self) -> Option<PipelineState> {
        None
    }
}

/// Wavefront OBJ file read with `tobj`.
///
/// Faces are triangulated, every object in the file is appended in file
/// order, texture coordinates are kept and `v x y z r g b` vertex colours
/// become per-vertex colours.
#[derive(Debug, Clone)]
pub struct ObjMeshSource {
    path: PathBuf,
    name: String,
}

impl ObjMeshSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses OBJ text from a reader. Material libraries are not resolved.
    pub fn parse<R: BufRead>(name: &str, reader: &mut R) -> Result<Vec<Triangle>> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &Self::load_options(), |_| {
                Err(tobj::LoadError::OpenFileFailed)
            })
            .map_err(|source| RenderError::MeshLoad {
                path: PathBuf::from(name),
                source,
            })?;
        Ok(triangles_from_models(&models))
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        }
    }
}

impl MeshSource for ObjMeshSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Triangle>> {
        let (models, _materials) = tobj::load_obj(&self.path, &Self::load_options())
            .map_err(|source| RenderError::MeshLoad {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), objects = models.len(), "loaded OBJ");
        Ok(triangles_from_models(&models))
    }
}

fn triangles_from_models(models: &[tobj::Model]) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    for model in models {
        let mesh = &model.mesh;
        let point = |index: u32| {
            let i = index as usize;
            let position = Vec3::new(
                mesh.positions[3 * i],
                mesh.positions[3 * i + 1],
                mesh.positions[3 * i + 2],
            );
            let uv = if mesh.texcoords.len() >= 2 * (i + 1) {
                Vec2::new(mesh.texcoords[2 * i], mesh.texcoords[2 * i + 1])
            } else {
                Vec2::ZERO
            };
            let point = Point::with_uv(position, uv);
            if mesh.vertex_color.len() >= 3 * (i + 1) {
                point.colored(Color::rgb(
                    mesh.vertex_color[3 * i],
                    mesh.vertex_color[3 * i + 1],
                    mesh.vertex_color[3 * i + 2],
                ))
            } else {
                point
            }
        };
        triangles.extend(
            mesh.indices
                .chunks_exact(3)
                .map(|face| Triangle::new(point(face[0]), point(face[1]), point(face[2]))),
        );
    }
    triangles
}

/// A list of triangles with a world transform and pipeline state.
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    world: Mat4,
    triangles: Vec<Triangle>,
    state: PipelineState,
    fill_color: Color,
}

impl Mesh {
    /// Creates a mesh at the origin with default pipeline state and the
    /// default fill colour.
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            world: Mat4::identity(),
            triangles,
            state: PipelineState::default(),
            fill_color: colors::FILL,
        }
    }

    /// Loads a mesh from `source`, applying the source's pipeline state if
    /// it has one.
    pub fn from_source<S: MeshSource + ?Sized>(source: &S) -> Result<Self> {
        let triangles = source.load()?;
        if triangles.is_empty() {
            return Err(RenderError::EmptyMesh(source.name().to_string()));
        }
        debug!(mesh = source.name(), triangles = triangles.len(), "mesh loaded");
        let mut mesh = Self::new(source.name(), triangles);
        if let Some(state) = source.pipeline_state() {
            mesh.state = state;
        }
        Ok(mesh)
    }

    /// A cube spanning -1..1 on every axis, wound so its outside faces are
    /// front-facing.
    pub fn cube() -> Self {
        let triangles = CUBE_FACES
            .iter()
            .map(|&[a, b, c]| {
                Triangle::new(
                    CUBE_VERTICES[a].into(),
                    CUBE_VERTICES[b].into(),
                    CUBE_VERTICES[c].into(),
                )
            })
            .collect();
        Self::new("cube", triangles)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    pub fn set_world_matrix(&mut self, world: Mat4) {
        self.world = world;
    }

    /// Overwrites the translation row of the world matrix, keeping rotation
    /// and scale.
    pub fn set_position(&mut self, position: Vec3) {
        self.world.set(3, 0, position.x);
        self.world.set(3, 1, position.y);
        self.world.set(3, 2, position.z);
    }

    pub fn pipeline_state(&self) -> PipelineState {
        self.state
    }

    pub fn set_pipeline_state(&mut self, state: PipelineState) {
        self.state = state;
    }

    pub fn set_cull_mode(&mut self, cull_mode: CullMode) {
        self.state.cull_mode = cull_mode;
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.state.fill_mode = fill_mode;
    }

    pub fn set_shading_mode(&mut self, shading: ShadingMode) {
        self.state.shading = shading;
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }
}
