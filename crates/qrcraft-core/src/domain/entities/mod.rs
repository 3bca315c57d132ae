pub mod image;
pub mod matrix;
pub mod payload;
pub mod render_options;

pub use crate::domain::DomainError;
pub use image::{GeneratedQr, RenderedImage};
pub use matrix::QrMatrix;
pub use payload::{
    AppStoreLinks, BitcoinPayment, ContactCard, EmailMessage, Payload, SmsMessage,
    SocialProfile, TwitterTarget, WifiCredentials,
};
pub use render_options::RenderOptions;
