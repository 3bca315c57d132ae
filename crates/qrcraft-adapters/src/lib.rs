//! Infrastructure adapters for qrcraft.
//!
//! This crate implements the ports defined in `qrcraft-core::application::ports`.
//! It contains all external dependencies and I/O operations.
//!
//! ## Usage
//!
//! ```rust
//! use qrcraft_adapters::{ImageRenderer, MemoryFilesystem, QrcodeEncoder};
//! use qrcraft_core::{
//!     application::QrService,
//!     domain::{Payload, RenderOptions, WifiCredentials},
//! };
//!
//! let service = QrService::new(
//!     Box::new(QrcodeEncoder::new()),
//!     Box::new(ImageRenderer::new()),
//!     Box::new(MemoryFilesystem::new()),
//! );
//!
//! let payload = Payload::Wifi(WifiCredentials::new("Home").password("hunter2"));
//! let generated = service
//!     .generate(&payload, &RenderOptions::default())?
//!     .expect("an SSID is enough to encode");
//!
//! assert_eq!(generated.text, "WIFI:T:WPA;S:Home;P:hunter2;;");
//! let written = service.save(&generated.png, "wifi", false)?;
//! assert_eq!(written.to_str(), Some("wifi.png"));
//! # Ok::<(), qrcraft_core::error::QrCraftError>(())
//! ```

pub mod data_url;
pub mod encoder;
pub mod filesystem;
pub mod renderer;
pub mod terminal;

// Re-export commonly used adapters
pub use data_url::to_data_url;
pub use encoder::QrcodeEncoder;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{ImageRenderer, PngRenderer, SvgRenderer};
