// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Formatting never fails (an empty payload is a value, not an error), so
/// everything here is about parsing user-facing identifiers and validating
/// render options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("unknown social platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown error correction level: {0}")]
    UnknownErrorCorrection(String),

    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("invalid {field}: {reason}")]
    InvalidDimension { field: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownPlatform(value) => vec![
                format!("'{value}' is not a supported platform"),
                "Supported: twitter, instagram, linkedin, tiktok, youtube, bluesky, snapchat, whatsapp, facebook"
                    .into(),
            ],
            Self::UnknownErrorCorrection(_) => vec![
                "Error correction must be one of L, M, Q, H".into(),
                "Higher levels survive more damage but hold less data".into(),
            ],
            Self::InvalidColor { .. } => vec![
                "Colors are hex values: #RGB, #RGBA, #RRGGBB or #RRGGBBAA".into(),
                "Example: --dark '#1a1a1a' --light '#ffffff'".into(),
            ],
            Self::InvalidDimension { field, .. } => vec![
                format!("Check the value passed for {field}"),
                "Defaults: width 300, margin 2, scale 4".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPlatform(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
