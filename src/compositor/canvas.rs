//! An in-memory RGBA frame that paints parts from image files.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::blend::blit_layer;
use super::DrawLayer;
use crate::models::{Part, Warning};

/// Fixed-size frame that loads each part's `src` below an asset root.
///
/// Layers whose size differs from the frame are stretched to cover it.
/// Missing or undecodable images are skipped and recorded as warnings.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    assets: PathBuf,
    frame: RgbaImage,
    warnings: Vec<Warning>,
}

impl ImageCanvas {
    /// Transparent frame of `width` x `height` pixels.
    pub fn new(assets: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            assets: assets.into(),
            frame: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
            warnings: Vec::new(),
        }
    }

    pub fn assets(&self) -> &Path {
        &self.assets
    }

    pub fn image(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// The painted frame and the layers that could not be drawn.
    pub fn finish(self) -> (RgbaImage, Vec<Warning>) {
        (self.frame, self.warnings)
    }

    fn load_layer(&self, part: &Part) -> Result<RgbaImage, String> {
        let path = self.assets.join(&part.src);
        let layer = image::open(&path)
            .map_err(|e| format!("cannot load '{}' for part '{}': {}", path.display(), part.id, e))?
            .to_rgba8();

        let (width, height) = self.frame.dimensions();
        if layer.dimensions() == (width, height) {
            Ok(layer)
        } else {
            debug!(part = %part.id, from = ?layer.dimensions(), to = ?(width, height), "resizing layer");
            Ok(imageops::resize(&layer, width, height, FilterType::Nearest))
        }
    }
}

impl DrawLayer for ImageCanvas {
    fn draw(&mut self, part: &Part) {
        match self.load_layer(part) {
            Ok(layer) => blit_layer(&mut self.frame, &layer),
            Err(message) => {
                warn!("{}", message);
                self.warnings.push(Warning::new(message));
            }
        }
    }
}
