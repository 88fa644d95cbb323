//! RGBA colours stored as four floating-point channels.

/// A colour with channels nominally in `[0, 1]`. Alpha is carried but not
/// blended.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

pub const BACKGROUND: Color = BLACK;
pub const FILL: Color = RED;

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour (alpha 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Weighted sum of three colours, used for barycentric interpolation.
    #[inline]
    pub fn blend3(colors: &[Color; 3], weights: [f32; 3]) -> Self {
        let channel = |f: fn(&Color) -> f32| {
            weights[0] * f(&colors[0]) + weights[1] * f(&colors[1]) + weights[2] * f(&colors[2])
        };
        Self::new(
            channel(|c| c.r),
            channel(|c| c.g),
            channel(|c| c.b),
            channel(|c| c.a),
        )
    }

    /// Quantizes to 8-bit RGBA, clamping out-of-range channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}
