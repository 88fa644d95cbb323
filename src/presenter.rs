//! Frame presentation.
//!
//! A [`Presenter`] receives each finished frame as a read-only [`Frame`]
//! after the render pass has completed. The crate ships [`PngPresenter`],
//! which writes the frame to disk with `image`.

use std::path::{Path, PathBuf};

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, RgbaImage};
use tracing::info;

use crate::error::Result;
use crate::render::Frame;

/// Consumer of finished frames.
pub trait Presenter {
    fn present(&mut self, frame: Frame<'_>) -> Result<()>;
}

/// Converts a frame into an 8-bit RGBA image, top row first.
pub fn frame_to_image(frame: Frame<'_>) -> Result<RgbaImage> {
    let pixels = frame.colors.iter().flat_map(|c| c.to_rgba8()).collect();
    RgbaImage::from_raw(frame.width, frame.height, pixels).ok_or_else(|| {
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
        .into()
    })
}

/// Writes every presented frame to the same PNG file.
#[derive(Debug, Clone)]
pub struct PngPresenter {
    path: PathBuf,
    frames: usize,
}

impl PngPresenter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            frames: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Presenter for PngPresenter {
    fn present(&mut self, frame: Frame<'_>) -> Result<()> {
        let image = frame_to_image(frame)?;
        image.save(&self.path)?;
        self.frames += 1;
        info!(path = %self.path.display(), width = frame.width, height = frame.height, "frame written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::render::BackBuffer;

    #[test]
    fn image_matches_buffer_layout() {
        let mut buffer = BackBuffer::new(2, 2);
        buffer.clear(colors::BLUE);
        buffer.write_fragment(0, 0, 0.5, colors::RED);

        let image = frame_to_image(buffer.frame()).unwrap();
        // Screen (0, 0) is bottom-left, image (0, 1) is bottom-left.
        assert_eq!(image.get_pixel(0, 1).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn png_presenter_writes_file() {
        let path = std::env::temp_dir().join(format!("softras-{}.png", std::process::id()));
        let mut buffer = BackBuffer::new(3, 2);
        buffer.clear(colors::GREEN);

        let mut presenter = PngPresenter::new(&path);
        presenter.present(buffer.frame()).unwrap();
        assert_eq!(presenter.frames(), 1);

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (3, 2));
        assert_eq!(written.get_pixel(2, 1).0, [0, 255, 0, 255]);
        let _ = std::fs::remove_file(&path);
    }
}
