//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `qrcraft-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ErrorCorrection, ImageFormat, QrMatrix, RenderOptions, RenderedImage};
use crate::error::QrCraftResult;

/// Port for QR symbol encoding.
///
/// Implemented by:
/// - `qrcraft_adapters::encoder::QrcodeEncoder`
///
/// Implementations pick the smallest version that fits `text` at `level`
/// and report oversize input as `ApplicationError::Encoding`.
#[cfg_attr(test, automock)]
pub trait QrEncoder: Send + Sync {
    fn encode(&self, text: &str, level: ErrorCorrection) -> QrCraftResult<QrMatrix>;
}

/// Port for turning a symbol into image bytes.
///
/// Implemented by:
/// - `qrcraft_adapters::renderer::PngRenderer`
/// - `qrcraft_adapters::renderer::SvgRenderer`
/// - `qrcraft_adapters::renderer::ImageRenderer` (dispatches on format)
#[cfg_attr(test, automock)]
pub trait QrRenderer: Send + Sync {
    fn render(
        &self,
        matrix: &QrMatrix,
        options: &RenderOptions,
        format: ImageFormat,
    ) -> QrCraftResult<RenderedImage>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `qrcraft_adapters::filesystem::LocalFilesystem` (production)
/// - `qrcraft_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> QrCraftResult<()>;

    /// Write bytes to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> QrCraftResult<()>;

    fn exists(&self, path: &Path) -> bool;
}
