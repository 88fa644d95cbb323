//! Colour and depth storage for one frame.
//!
//! Screen coordinates are Y-up: `(0, 0)` is the bottom-left pixel. Storage is
//! top-down, so the linear index of `(x, y)` is `(height - 1 - y) * width + x`
//! and row 0 of [`BackBuffer::colors`] is the top of the visual image.

use crate::colors::Color;

/// Owns the colour and depth buffers the rasterizer writes into.
///
/// Both buffers always hold `width * height` cells. Depth stores the
/// perspective-interpolated NDC z; smaller is nearer, and a cleared cell is
/// `+inf`.
#[derive(Debug, Clone)]
pub struct BackBuffer {
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

/// Read-only view of a finished frame, handed to a
/// [`Presenter`](crate::presenter::Presenter).
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub colors: &'a [Color],
    pub width: u32,
    pub height: u32,
}

impl BackBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![Color::default(); size],
            depth_buffer: vec![f32::INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every depth cell to `+inf` and every colour cell to `color`.
    pub fn clear(&mut self, color: Color) {
        self.depth_buffer.fill(f32::INFINITY);
        self.color_buffer.fill(color);
    }

    /// Linear index of screen pixel `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let row = (self.height - 1 - y as u32) as usize;
        Some(row * self.width as usize + x as usize)
    }

    /// Writes a fragment if it is strictly nearer than what is stored.
    ///
    /// Returns `false` when the fragment is out of range or fails the depth
    /// test; equal depths keep the earlier fragment.
    #[inline]
    pub fn write_fragment(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if depth >= self.depth_buffer[idx] {
            return false;
        }
        self.depth_buffer[idx] = depth;
        self.color_buffer[idx] = color;
        true
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn color(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the depth at (x, y), or None if out of bounds.
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    pub fn colors(&self) -> &[Color] {
        &self.color_buffer
    }

    pub fn depths(&self) -> &[f32] {
        &self.depth_buffer
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            colors: &self.color_buffer,
            width: self.width,
            height: self.height,
        }
    }

    /// The colour buffer as packed 8-bit RGBA, top row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|c| c.to_rgba8())
            .collect()
    }
}
