//! Encoder backed by the `qrcode` crate.

use qrcode::{EcLevel, QrCode, types::QrError};
use tracing::{debug, instrument};

use qrcraft_core::{
    application::{ApplicationError, ports::QrEncoder},
    domain::{ErrorCorrection, QrMatrix},
    error::{QrCraftError, QrCraftResult},
};

/// Picks the smallest symbol version that holds the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl QrEncoder for QrcodeEncoder {
    #[instrument(skip(self, text), fields(len = text.len()))]
    fn encode(&self, text: &str, level: ErrorCorrection) -> QrCraftResult<QrMatrix> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(level))
            .map_err(|e| map_qr_error(e, text, level))?;

        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        debug!(size, "Encoded symbol");

        QrMatrix::new(size, modules).ok_or_else(|| QrCraftError::Internal {
            message: format!("encoder returned a malformed {size}x{size} matrix"),
        })
    }
}

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

fn map_qr_error(e: QrError, text: &str, level: ErrorCorrection) -> QrCraftError {
    let reason = match e {
        QrError::DataTooLong => format!(
            "{} bytes exceed the capacity of a version 40 symbol at level {level}",
            text.len()
        ),
        other => other.to_string(),
    };
    ApplicationError::Encoding { reason }.into()
}
