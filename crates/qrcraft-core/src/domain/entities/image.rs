use serde::Serialize;

use crate::domain::{entities::QrMatrix, value_objects::ImageFormat};

/// An encoded image ready to be shown or saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedImage {
    pub format: ImageFormat,
    /// Side length in pixels.
    pub width: u32,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    pub fn new(format: ImageFormat, width: u32, bytes: Vec<u8>) -> Self {
        Self {
            format,
            width,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// SVG markup; `None` for binary formats or non-UTF-8 data.
    pub fn as_text(&self) -> Option<&str> {
        match self.format {
            ImageFormat::Svg => std::str::from_utf8(&self.bytes).ok(),
            ImageFormat::Png => None,
        }
    }
}

/// Result of one generation: the encoded text, the symbol and both image
/// renditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQr {
    /// The exact payload text that was encoded.
    pub text: String,
    /// Symbol side in modules.
    pub size: usize,
    #[serde(skip)]
    pub matrix: QrMatrix,
    pub png: RenderedImage,
    pub svg: RenderedImage,
}

impl GeneratedQr {
    pub fn image(&self, format: ImageFormat) -> &RenderedImage {
        match format {
            ImageFormat::Png => &self.png,
            ImageFormat::Svg => &self.svg,
        }
    }
}
