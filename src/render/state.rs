//! Per-mesh pipeline state: culling, fill and shading policies.

/// Which faces to discard before rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Discard front faces (view-space normal z > 0).
    Front,
    /// Discard back faces (view-space normal z < 0).
    #[default]
    Back,
    /// Draw both sides.
    None,
}

impl CullMode {
    /// Whether a face with the given view-space normal z is discarded.
    ///
    /// A normal z of exactly zero is never discarded.
    #[inline]
    pub fn discards(self, normal_z: f32) -> bool {
        match self {
            CullMode::Back => normal_z < 0.0,
            CullMode::Front => normal_z > 0.0,
            CullMode::None => false,
        }
    }
}

/// How triangle interiors are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Edges only. Recognised, but drawing it reports
    /// [`RenderError::UnimplementedFillMode`](crate::RenderError::UnimplementedFillMode).
    Wireframe,
    /// Filled interiors.
    #[default]
    Solid,
}

/// How fragment colours are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Every fragment gets the mesh fill colour.
    #[default]
    Flat,
    /// Per-vertex colours blended with perspective-correct weights.
    Interpolated,
}

/// Pipeline state carried by each mesh and applied while its triangles draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineState {
    pub cull_mode: CullMode,
    pub fill_mode: FillMode,
    pub shading: ShadingMode,
}

impl PipelineState {
    pub fn new(cull_mode: CullMode, fill_mode: FillMode, shading: ShadingMode) -> Self {
        Self {
            cull_mode,
            fill_mode,
            shading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_back_culled_solid_flat() {
        let state = PipelineState::default();
        assert_eq!(state.cull_mode, CullMode::Back);
        assert_eq!(state.fill_mode, FillMode::Solid);
        assert_eq!(state.shading, ShadingMode::Flat);
    }

    #[test]
    fn zero_normal_is_never_culled() {
        assert!(!CullMode::Back.discards(0.0));
        assert!(!CullMode::Front.discards(0.0));
    }

    #[test]
    fn cull_modes_are_opposites() {
        assert!(CullMode::Back.discards(-1.0));
        assert!(!CullMode::Back.discards(1.0));
        assert!(CullMode::Front.discards(1.0));
        assert!(!CullMode::Front.discards(-1.0));
        assert!(!CullMode::None.discards(-1.0));
    }
}
