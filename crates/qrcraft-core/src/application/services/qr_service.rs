//! QR Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Format the payload into the text to encode
//! 2. Encode the text into a module matrix
//! 3. Render the matrix as PNG and SVG
//! 4. Save a rendition to the filesystem

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, QrEncoder, QrRenderer},
    },
    domain::{
        DomainValidator as validator, GeneratedQr, ImageFormat, Payload, RenderOptions,
        RenderedImage,
    },
    error::QrCraftResult,
};

/// Main generation service.
pub struct QrService {
    encoder: Box<dyn QrEncoder>,
    renderer: Box<dyn QrRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl QrService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use qrcraft_core::application::{QrService, ports::*};
    ///
    /// let service = QrService::new(
    ///     encoder,    // impl QrEncoder
    ///     renderer,   // impl QrRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        encoder: Box<dyn QrEncoder>,
        renderer: Box<dyn QrRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            encoder,
            renderer,
            filesystem,
        }
    }

    /// Generate both image renditions for a payload.
    ///
    /// Returns `Ok(None)` when the payload formats to nothing (missing
    /// required fields); the encoder is not called in that case.
    #[instrument(skip_all, fields(content_type = %payload.content_type()))]
    pub fn generate(
        &self,
        payload: &Payload,
        options: &RenderOptions,
    ) -> QrCraftResult<Option<GeneratedQr>> {
        self.generate_text(&payload.format(), options)
    }

    /// Generate both image renditions for already formatted text.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn generate_text(
        &self,
        text: &str,
        options: &RenderOptions,
    ) -> QrCraftResult<Option<GeneratedQr>> {
        validator::validate_render_options(options)?;

        if text.trim().is_empty() {
            debug!("Nothing to encode");
            return Ok(None);
        }

        let matrix = self.encoder.encode(text, options.error_correction)?;
        validator::validate_matrix(&matrix)?;
        validator::validate_geometry(&matrix, options)?;
        debug!(
            size = matrix.size(),
            version = matrix.version(),
            "Symbol encoded"
        );

        let png = self.renderer.render(&matrix, options, ImageFormat::Png)?;
        let svg = self.renderer.render(&matrix, options, ImageFormat::Svg)?;
        info!(width = png.width, "QR code generated");

        Ok(Some(GeneratedQr {
            text: text.to_string(),
            size: matrix.size(),
            matrix,
            png,
            svg,
        }))
    }

    /// Write an image to `path`, returning the path actually written.
    ///
    /// A path without an extension gets the image format's extension.
    /// Existing files are only replaced when `overwrite` is set.
    #[instrument(skip(self, image), fields(format = %image.format, path = %path.as_ref().display()))]
    pub fn save(
        &self,
        image: &RenderedImage,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> QrCraftResult<PathBuf> {
        let path = Self::output_path(path.as_ref(), image.format);

        if !overwrite && self.filesystem.exists(&path) {
            return Err(ApplicationError::FileExists { path }.into());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }

        self.filesystem.write_file(&path, &image.bytes)?;
        info!(bytes = image.len(), "Image saved");
        Ok(path)
    }

    /// The path `save` writes to: `path` itself, or `path` plus the format's
    /// extension when it has none.
    pub fn output_path(path: &Path, format: ImageFormat) -> PathBuf {
        if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(format.extension())
        }
    }
}
