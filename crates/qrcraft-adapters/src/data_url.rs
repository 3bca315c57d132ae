//! `data:` URLs for embedding rendered images in HTML or JSON.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use qrcraft_core::domain::RenderedImage;

/// `data:<mime>;base64,<payload>` for the image bytes.
pub fn to_data_url(image: &RenderedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.format.mime_type(),
        STANDARD.encode(&image.bytes)
    )
}
