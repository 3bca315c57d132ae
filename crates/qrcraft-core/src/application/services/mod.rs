//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a QR code" or "save an image".

pub mod qr_service;

pub use qr_service::QrService;
