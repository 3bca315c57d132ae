// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for qrcraft.
//!
//! This module contains pure logic with no I/O. QR encoding, rasterizing and
//! file writing are reached through ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Total formatters**: Formatting never fails, `""` means "no payload"
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod formatter;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    AppStoreLinks, BitcoinPayment, ContactCard, EmailMessage, GeneratedQr, Payload, QrMatrix,
    RenderOptions, RenderedImage, SmsMessage, SocialProfile, TwitterTarget, WifiCredentials,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    Color, ContentType, ErrorCorrection, ImageFormat, SocialPlatform, WifiSecurity,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn platform_parses_short_names() {
        assert_eq!(SocialPlatform::from_str("bsky").unwrap(), SocialPlatform::Bluesky);
        assert_eq!(SocialPlatform::from_str("X").unwrap(), SocialPlatform::Twitter);
        assert!(matches!(
            SocialPlatform::from_str("myspace"),
            Err(DomainError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn wifi_security_keeps_unknown_values_literally() {
        assert_eq!(WifiSecurity::from("WEP"), WifiSecurity::Wep);
        assert_eq!(WifiSecurity::from("nopass"), WifiSecurity::NoPass);
        assert_eq!(WifiSecurity::from("SAE").as_str(), "SAE");
        assert_eq!(WifiSecurity::default().as_str(), "WPA");
    }

    #[test]
    fn error_correction_parses_letters_and_words() {
        assert_eq!(ErrorCorrection::from_str("h").unwrap(), ErrorCorrection::H);
        assert_eq!(ErrorCorrection::from_str("Low").unwrap(), ErrorCorrection::L);
        assert!(ErrorCorrection::from_str("X").is_err());
    }

    #[test]
    fn color_parses_all_hex_forms() {
        assert_eq!(Color::from_str("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_str("fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_str("#33333380").unwrap(),
            Color {
                r: 0x33,
                g: 0x33,
                b: 0x33,
                a: 0x80
            }
        );
        assert_eq!(Color::from_str("#f00a").unwrap().a, 0xaa);
    }

    #[test]
    fn color_rejects_garbage() {
        assert!(matches!(
            Color::from_str("#12345"),
            Err(DomainError::InvalidColor { .. })
        ));
        assert!(Color::from_str("#gggggg").is_err());
        assert!(Color::from_str("").is_err());
    }

    #[test]
    fn color_allows_a_single_hash() {
        assert_eq!(Color::from_str("fff").unwrap(), Color::WHITE);
        assert!(matches!(
            Color::from_str("##fff"),
            Err(DomainError::InvalidColor { .. })
        ));
    }

    #[test]
    fn color_display_drops_opaque_alpha() {
        assert_eq!(Color::rgb(0x1a, 0x2b, 0x3c).to_string(), "#1a2b3c");
        assert_eq!(Color::from_str("#1a2b3c80").unwrap().to_string(), "#1a2b3c80");
    }

    #[test]
    fn image_format_metadata() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Svg.default_file_name(), "qrcode.svg");
    }

    // ========================================================================
    // Payload Tests
    // ========================================================================

    #[test]
    fn payload_reports_content_type() {
        assert_eq!(Payload::text("hi").content_type(), ContentType::Text);
        assert_eq!(Payload::phone("1").content_type(), ContentType::Phone);
        assert_eq!(
            Payload::Wifi(WifiCredentials::new("x")).content_type(),
            ContentType::Wifi
        );
    }

    #[test]
    fn payload_dispatches_to_formatter() {
        let wifi = WifiCredentials::new("Home;Net").password("p:a,ss");
        assert_eq!(
            Payload::Wifi(wifi.clone()).format(),
            formatter::format_wifi(&wifi)
        );
        assert_eq!(Payload::phone("555 1234").format(), "tel:5551234");
        assert_eq!(
            Payload::Social(SocialProfile {
                platform: SocialPlatform::TikTok,
                handle: "@ferris".into(),
            })
            .format(),
            "https://tiktok.com/@ferris"
        );
    }

    #[test]
    fn payload_deserializes_from_tagged_json() {
        let json = r#"{"type":"wifi","ssid":"Cafe","password":"latte","security":"WEP","hidden":true}"#;
        let payload: Payload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.format(), "WIFI:T:WEP;S:Cafe;P:latte;H:true;;");
    }

    #[test]
    fn payload_deserializes_camel_case_vcard() {
        let json = r#"{"type":"vcard","firstName":"Jane","lastName":"Doe"}"#;
        let payload: Payload = serde_json::from_str(json).unwrap();
        assert!(payload.format().contains("FN:Jane Doe"));
    }

    #[test]
    fn missing_required_fields_give_empty_payloads() {
        let empties = [
            Payload::text("  "),
            Payload::Wifi(WifiCredentials::default()),
            Payload::Email(EmailMessage::default()),
            Payload::Sms(SmsMessage::default()),
            Payload::VCard(ContactCard::default()),
            Payload::Bitcoin(BitcoinPayment::default()),
            Payload::Twitter(TwitterTarget::default()),
            Payload::Social(SocialProfile {
                platform: SocialPlatform::Instagram,
                handle: String::new(),
            }),
            Payload::AppStore(AppStoreLinks::default()),
            Payload::phone(""),
        ];
        for payload in empties {
            assert_eq!(payload.format(), "", "{}", payload.content_type());
        }
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn validator_accepts_real_symbol_sizes() {
        let m = QrMatrix::new(21, vec![false; 21 * 21]).unwrap();
        assert!(DomainValidator::validate_matrix(&m).is_ok());
        let odd = QrMatrix::new(22, vec![false; 22 * 22]).unwrap();
        assert!(DomainValidator::validate_matrix(&odd).is_err());
    }
}
