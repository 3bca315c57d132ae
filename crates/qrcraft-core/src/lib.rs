//! qrcraft Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the qrcraft
//! QR code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           qrcraft-cli (CLI)             │
//! │     (Collects fields, shows results)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (QrService)                │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Encoder, Renderer, Filesystem)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    qrcraft-adapters (Infrastructure)    │
//! │  (QrcodeEncoder, ImageRenderer, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Payload, formatter, RenderOptions)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qrcraft_core::{
//!     application::QrService,
//!     domain::{Payload, RenderOptions, WifiCredentials},
//! };
//!
//! // 1. Describe the content
//! let payload = Payload::Wifi(WifiCredentials::new("Home").password("hunter2"));
//!
//! // 2. Use application service (adapters come from `qrcraft-adapters`)
//! let service = QrService::new(encoder, renderer, filesystem);
//! let generated = service.generate(&payload, &RenderOptions::default()).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        QrService,
        ports::{Filesystem, QrEncoder, QrRenderer},
    };
    pub use crate::domain::{
        Color, ContentType, ErrorCorrection, GeneratedQr, ImageFormat, Payload, QrMatrix,
        RenderOptions, RenderedImage, SocialPlatform, WifiSecurity,
    };
    pub use crate::error::{QrCraftError, QrCraftResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
