//! Unified error handling for qrcraft core.
//!
//! Wraps domain and application errors behind one type that carries
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for qrcraft core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QrCraftError {
    /// Invalid input values (colors, dimensions, unknown names).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Failures while encoding, rendering or writing.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl QrCraftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in qrcraft".into(),
                "Please report it together with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True when the input is fine but the result could not be produced,
    /// e.g. the payload is too long for any QR version.
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Encoding { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

pub type QrCraftResult<T> = Result<T, QrCraftError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> QrCraftResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> QrCraftResult<T> {
        self.map_err(|e| QrCraftError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_category_is_carried_through() {
        let err: QrCraftError = DomainError::UnknownPlatform("myspace".into()).into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn file_exists_is_a_conflict() {
        let err: QrCraftError = ApplicationError::FileExists {
            path: PathBuf::from("qrcode.png"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let res: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = res.context("formatting svg").unwrap_err();
        assert!(matches!(err, QrCraftError::Internal { .. }));
        assert!(err.to_string().contains("formatting svg"));
    }
}
