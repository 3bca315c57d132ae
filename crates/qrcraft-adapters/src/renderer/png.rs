//! PNG rasterizer using the `image` crate.

use std::io::Cursor;

use image::{ImageFormat as RasterFormat, Rgba, RgbaImage};
use tracing::{debug, instrument};

use qrcraft_core::{
    application::{ApplicationError, ports::QrRenderer},
    domain::{ImageFormat, QrMatrix, RenderOptions, RenderedImage},
    error::QrCraftResult,
};

use super::wrong_format;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl PngRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint the symbol plus quiet zone into an RGBA buffer.
    ///
    /// Each pixel samples the module under it, so fractional module sizes
    /// still fill exactly `image_width` pixels.
    pub fn rasterize(&self, matrix: &QrMatrix, options: &RenderOptions) -> RgbaImage {
        let side = options.image_width(matrix.size());
        let scale = options.pixels_per_module(matrix.size());
        let margin = i64::from(options.margin);
        let dark = Rgba(options.dark.rgba());
        let light = Rgba(options.light.rgba());

        let module_at = |px: u32| (f64::from(px) / scale).floor() as i64 - margin;

        let mut img = RgbaImage::new(side, side);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if matrix.is_dark(module_at(x), module_at(y)) {
                dark
            } else {
                light
            };
        }
        img
    }
}

impl QrRenderer for PngRenderer {
    #[instrument(skip_all, fields(size = matrix.size()))]
    fn render(
        &self,
        matrix: &QrMatrix,
        options: &RenderOptions,
        format: ImageFormat,
    ) -> QrCraftResult<RenderedImage> {
        if format != ImageFormat::Png {
            return Err(wrong_format("PngRenderer", format));
        }

        let img = self.rasterize(matrix, options);
        let width = img.width();

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), RasterFormat::Png)
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: format!("PNG encoding failed: {e}"),
            })?;
        debug!(width, bytes = bytes.len(), "PNG rendered");

        Ok(RenderedImage::new(ImageFormat::Png, width, bytes))
    }
}
