//! Application layer for qrcraft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (QrService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no payload
//! rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::QrService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, QrEncoder, QrRenderer};

pub use error::ApplicationError;
