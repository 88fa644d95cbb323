//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer handles coverage, depth and weight correction; a shader
//! only turns perspective-correct barycentric weights into a colour.

use crate::colors::Color;

/// Per-pixel colour computation.
///
/// `lambda` holds perspective-correct barycentric weights `[λ₀, λ₁, λ₂]`
/// summing to 1.0; any per-vertex attribute interpolates as
/// `λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`.
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> Color;
}

/// Flat shader - returns a constant color for all pixels.
pub struct FlatShader {
    color: Color,
}

impl FlatShader {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> Color {
        self.color
    }
}

/// Blends the three vertex colours with the fragment's weights.
pub struct InterpolatedShader {
    colors: [Color; 3],
}

impl InterpolatedShader {
    pub fn new(colors: [Color; 3]) -> Self {
        Self { colors }
    }
}

impl PixelShader for InterpolatedShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Color {
        Color::blend3(&self.colors, lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;

    #[test]
    fn flat_shader_ignores_weights() {
        let shader = FlatShader::new(colors::RED);
        assert_eq!(shader.shade([0.2, 0.3, 0.5]), colors::RED);
    }

    #[test]
    fn interpolated_shader_blends_channels() {
        let shader = InterpolatedShader::new([colors::RED, colors::GREEN, colors::BLUE]);
        let c = shader.shade([0.5, 0.25, 0.25]);
        assert_relative_eq!(c.r, 0.5);
        assert_relative_eq!(c.g, 0.25);
        assert_relative_eq!(c.b, 0.25);
        assert_relative_eq!(c.a, 1.0);
    }
}
