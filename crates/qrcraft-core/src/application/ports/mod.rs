//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `qrcraft-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `QrEncoder`: Text to module matrix
//!   - `QrRenderer`: Module matrix to PNG/SVG bytes
//!   - `Filesystem`: File operations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, QrEncoder, QrRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockQrEncoder, MockQrRenderer};
