//! Error types for the rasterizer.

use std::path::PathBuf;

use thiserror::Error;

use crate::render::FillMode;

/// What made a transform degenerate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// The matrix has a zero (or non-finite) determinant.
    #[error("matrix is singular")]
    SingularMatrix,

    /// Near and far planes are the same distance from the eye.
    #[error("near and far clip planes coincide")]
    CoincidentClipPlanes,

    /// Aspect ratio or field of view leaves an empty view volume.
    #[error("aspect ratio or field of view is degenerate")]
    EmptyFrustum,

    /// A clip-space vertex has w = 0 and cannot be divided.
    #[error("clip-space vertex has w = 0")]
    ZeroW,

    /// A direction vector needed normalizing but had zero length.
    #[error("zero-length direction vector")]
    ZeroLengthVector,
}

/// Main error type for the rasterizer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A transform would have produced non-finite values.
    #[error("degenerate transform: {0}")]
    DegenerateTransform(Degeneracy),

    /// The fill mode is recognised but has no rasterization algorithm.
    #[error("fill mode {0:?} is not implemented")]
    UnimplementedFillMode(FillMode),

    /// The OBJ loader rejected a mesh file.
    #[error("failed to load mesh '{path}': {source}")]
    MeshLoad {
        /// Path to the file that failed to load.
        path: PathBuf,
        /// Underlying loader error.
        #[source]
        source: tobj::LoadError,
    },

    /// A mesh source produced no triangles.
    #[error("mesh '{0}' contains no triangles")]
    EmptyMesh(String),

    /// Writing a presented frame failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias using the rasterizer's error type.
pub type Result<T> = std::result::Result<T, RenderError>;
