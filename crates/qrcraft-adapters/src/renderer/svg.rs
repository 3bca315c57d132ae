//! Vector output: one background path and one stroked path of dark runs.

use std::fmt::Write as _;

use tracing::{debug, instrument};

use qrcraft_core::{
    application::ports::QrRenderer,
    domain::{Color, ImageFormat, QrMatrix, RenderOptions, RenderedImage},
    error::{Context, QrCraftResult},
};

use super::wrong_format;

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build the SVG document.
    ///
    /// The `viewBox` is measured in modules; `width`/`height` carry the
    /// pixel size from the render options.
    pub fn to_svg_string(&self, matrix: &QrMatrix, options: &RenderOptions) -> QrCraftResult<String> {
        let modules = options.modules_with_margin(matrix.size());
        let side = options.image_width(matrix.size());
        let margin = options.margin as usize;

        let mut svg = String::new();
        write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {modules} {modules}" shape-rendering="crispEdges">"#
        )
        .context("writing svg header")?;

        if options.light.a > 0 {
            write!(
                svg,
                r#"<path{} d="M0 0h{modules}v{modules}H0z"/>"#,
                paint("fill", options.light)
            )
            .context("writing svg background")?;
        }

        let path = dark_runs(matrix, margin);
        if !path.is_empty() {
            write!(svg, r#"<path{} d="{path}"/>"#, paint("stroke", options.dark))
                .context("writing svg modules")?;
        }
        svg.push_str("</svg>\n");

        Ok(svg)
    }
}

impl QrRenderer for SvgRenderer {
    #[instrument(skip_all, fields(size = matrix.size()))]
    fn render(
        &self,
        matrix: &QrMatrix,
        options: &RenderOptions,
        format: ImageFormat,
    ) -> QrCraftResult<RenderedImage> {
        if format != ImageFormat::Svg {
            return Err(wrong_format("SvgRenderer", format));
        }

        let svg = self.to_svg_string(matrix, options)?;
        debug!(bytes = svg.len(), "SVG rendered");
        Ok(RenderedImage::new(
            ImageFormat::Svg,
            options.image_width(matrix.size()),
            svg.into_bytes(),
        ))
    }
}

/// `fill="#rrggbb"` plus an opacity attribute for translucent colors.
fn paint(attr: &str, color: Color) -> String {
    if color.is_opaque() {
        format!(r#" {attr}="{}""#, color.to_hex_rgb())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{:.2}""#,
            color.to_hex_rgb(),
            color.opacity()
        )
    }
}

/// Horizontal strokes through the middle of each row of dark modules.
fn dark_runs(matrix: &QrMatrix, margin: usize) -> String {
    let mut d = String::new();
    for (y, row) in matrix.rows().enumerate() {
        let mut x = 0;
        while x < row.len() {
            if !row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < row.len() && row[x] {
                x += 1;
            }
            // Infallible for String.
            let _ = write!(d, "M{} {}.5h{}", start + margin, y + margin, x - start);
        }
    }
    d
}
