//! Viewport slicing of full-page screenshots.

use std::io::Cursor;

use base64::Engine;
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use lemscope_protocols::{EncodedImage, PipelineError};

/// Owned full-page bitmap. Consumed by [`Slicer::slice`].
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Decode encoded image bytes (PNG, JPEG, WebP, ...).
    pub fn decode(bytes: &[u8]) -> Result<Self, PipelineError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| PipelineError::ImageDecode(e.to_string()))?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(PipelineError::ImageDecode(format!(
                "image has no area ({}x{})",
                decoded.width(),
                decoded.height()
            )));
        }
        Ok(Self {
            pixels: decoded.to_rgba8(),
        })
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// A full-width horizontal band of a [`RasterImage`].
#[derive(Debug, Clone)]
pub struct Slice {
    pub index: usize,
    /// Distance in pixels from the top of the full image.
    pub source_y_offset: u32,
    pub height_pixels: u32,
    pixels: RgbaImage,
}

impl Slice {
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Encode the slice as base64 PNG.
    pub fn encode_png(&self) -> Result<EncodedImage, PipelineError> {
        let mut buffer = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| PipelineError::ImageEncode(format!("slice {}: {}", self.index, e)))?;
        Ok(EncodedImage::png(
            base64::engine::general_purpose::STANDARD.encode(buffer.into_inner()),
        ))
    }
}

/// Cuts pages into slices whose height matches a viewport aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slicer {
    aspect_width: u32,
    aspect_height: u32,
}

impl Default for Slicer {
    fn default() -> Self {
        Self::new(16, 9)
    }
}

impl Slicer {
    /// Zero components are raised to 1.
    pub fn new(aspect_width: u32, aspect_height: u32) -> Self {
        Self {
            aspect_width: aspect_width.max(1),
            aspect_height: aspect_height.max(1),
        }
    }

    /// `floor(width * h / w)`, never less than one pixel.
    pub fn standard_height(&self, width: u32) -> u32 {
        let height = u64::from(width) * u64::from(self.aspect_height) / u64::from(self.aspect_width);
        height.clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Slice geometry as `(source_y_offset, height)` pairs, top to bottom.
    pub fn plan(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let standard = self.standard_height(width);
        let count = height.div_ceil(standard);
        (0..count)
            .map(|i| {
                let offset = i * standard;
                (offset, standard.min(height - offset))
            })
            .collect()
    }

    /// Cut the image into independent slices. The source raster is dropped.
    pub fn slice(&self, raster: RasterImage) -> Vec<Slice> {
        let width = raster.width();
        let plan = self.plan(width, raster.height());
        debug!(
            "Slicing {}x{} image into {} slices of up to {}px",
            width,
            raster.height(),
            plan.len(),
            self.standard_height(width)
        );

        plan.into_iter()
            .enumerate()
            .map(|(index, (offset, height))| Slice {
                index,
                source_y_offset: offset,
                height_pixels: height,
                pixels: image::imageops::crop_imm(&raster.pixels, 0, offset, width, height)
                    .to_image(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "slicer_tests.rs"]
mod tests;
