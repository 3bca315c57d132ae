//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while producing or saving a QR image.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The encoder could not build a symbol (usually: data too long).
    #[error("QR encoding failed: {reason}")]
    Encoding { reason: String },

    #[error("Image rendering failed: {reason}")]
    RenderingFailed { reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Refused to replace an existing file.
    #[error("File already exists at {path}")]
    FileExists { path: PathBuf },

    /// Shared in-memory state was poisoned.
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Encoding { .. } => vec![
                "The content does not fit in a QR code".into(),
                "Shorten the text or use a lower error correction level (--ecc L)".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FileExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or pick another name with --output".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Encoding { .. } => ErrorCategory::Validation,
            Self::FileExists { .. } => ErrorCategory::Conflict,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
