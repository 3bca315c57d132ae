//! QR encoder adapters.

mod qrcode_backend;

pub use qrcode_backend::QrcodeEncoder;
