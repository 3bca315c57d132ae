//! Image renderers for encoded QR symbols.

mod png;
mod svg;

pub use png::PngRenderer;
pub use svg::SvgRenderer;

use qrcraft_core::{
    application::ports::QrRenderer,
    domain::{ImageFormat, QrMatrix, RenderOptions, RenderedImage},
    error::QrCraftResult,
};

/// Renders either format by delegating to the matching renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRenderer {
    png: PngRenderer,
    svg: SvgRenderer,
}

impl ImageRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QrRenderer for ImageRenderer {
    fn render(
        &self,
        matrix: &QrMatrix,
        options: &RenderOptions,
        format: ImageFormat,
    ) -> QrCraftResult<RenderedImage> {
        match format {
            ImageFormat::Png => self.png.render(matrix, options, format),
            ImageFormat::Svg => self.svg.render(matrix, options, format),
        }
    }
}

fn wrong_format(renderer: &str, format: ImageFormat) -> qrcraft_core::error::QrCraftError {
    qrcraft_core::application::ApplicationError::RenderingFailed {
        reason: format!("{renderer} cannot produce {format}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::QrcodeEncoder;
    use qrcraft_core::{application::ports::QrEncoder, domain::ErrorCorrection};

    #[test]
    fn dispatches_on_format() {
        let matrix = QrcodeEncoder.encode("dispatch", ErrorCorrection::M).unwrap();
        let renderer = ImageRenderer::new();
        let options = RenderOptions::default();

        let png = renderer.render(&matrix, &options, ImageFormat::Png).unwrap();
        let svg = renderer.render(&matrix, &options, ImageFormat::Svg).unwrap();

        assert_eq!(png.format, ImageFormat::Png);
        assert_eq!(svg.format, ImageFormat::Svg);
        assert_eq!(png.width, svg.width);
    }

    #[test]
    fn single_format_renderers_reject_the_other() {
        let matrix = QrcodeEncoder.encode("x", ErrorCorrection::L).unwrap();
        let options = RenderOptions::default();
        assert!(
            PngRenderer
                .render(&matrix, &options, ImageFormat::Svg)
                .is_err()
        );
        assert!(
            SvgRenderer
                .render(&matrix, &options, ImageFormat::Png)
                .is_err()
        );
    }
}
