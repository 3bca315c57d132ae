//! Domain value objects: ContentType, SocialPlatform, WifiSecurity,
//! ErrorCorrection, ImageFormat, Color.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Each
//! has a canonical string form (`as_str` / `Display`). The ones a user types
//! (`SocialPlatform`, `ErrorCorrection`, `Color`) also have a lenient
//! `FromStr` that the CLI hands straight to clap.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm (and the `FromStr` arm, if it has one) here
//! 3. Handle it in `formatter.rs`
//! 4. Done, nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ContentType ──────────────────────────────────────────────────────────────

/// The kind of data a QR code carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Text,
    Wifi,
    Email,
    Sms,
    #[serde(rename = "vcard")]
    VCard,
    Bitcoin,
    Twitter,
    Social,
    AppStore,
    Phone,
}

impl ContentType {
    pub const ALL: [ContentType; 10] = [
        Self::Text,
        Self::Wifi,
        Self::Email,
        Self::Sms,
        Self::VCard,
        Self::Bitcoin,
        Self::Twitter,
        Self::Social,
        Self::AppStore,
        Self::Phone,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Wifi => "wifi",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::VCard => "vcard",
            Self::Bitcoin => "bitcoin",
            Self::Twitter => "twitter",
            Self::Social => "social",
            Self::AppStore => "app-store",
            Self::Phone => "phone",
        }
    }

    /// Fields that must be non-empty for this content type to produce a payload.
    ///
    /// Used to tell the user what is missing when formatting yields nothing.
    pub const fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &["text"],
            Self::Wifi => &["ssid"],
            Self::Email => &["to"],
            Self::Sms => &["phone"],
            Self::VCard => &["first name or last name"],
            Self::Bitcoin => &["address"],
            Self::Twitter => &["username or tweet"],
            Self::Social => &["handle"],
            Self::AppStore => &["iOS URL or Android URL"],
            Self::Phone => &["phone"],
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SocialPlatform ───────────────────────────────────────────────────────────

/// A social network whose profile links can be built from a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    LinkedIn,
    TikTok,
    YouTube,
    Bluesky,
    Snapchat,
    WhatsApp,
    Facebook,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 9] = [
        Self::Twitter,
        Self::Instagram,
        Self::LinkedIn,
        Self::TikTok,
        Self::YouTube,
        Self::Bluesky,
        Self::Snapchat,
        Self::WhatsApp,
        Self::Facebook,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::Bluesky => "bluesky",
            Self::Snapchat => "snapchat",
            Self::WhatsApp => "whatsapp",
            Self::Facebook => "facebook",
        }
    }

    /// Profile URL prefix; the cleaned handle is appended verbatim.
    pub const fn profile_prefix(&self) -> &'static str {
        match self {
            Self::Twitter => "https://twitter.com/",
            Self::Instagram => "https://instagram.com/",
            Self::LinkedIn => "https://linkedin.com/in/",
            Self::TikTok => "https://tiktok.com/@",
            Self::YouTube => "https://youtube.com/@",
            Self::Bluesky => "https://bsky.app/profile/",
            Self::Snapchat => "https://snapchat.com/add/",
            Self::WhatsApp => "https://wa.me/",
            Self::Facebook => "https://facebook.com/",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Self::Twitter),
            "instagram" | "ig" => Ok(Self::Instagram),
            "linkedin" => Ok(Self::LinkedIn),
            "tiktok" => Ok(Self::TikTok),
            "youtube" | "yt" => Ok(Self::YouTube),
            "bluesky" | "bsky" => Ok(Self::Bluesky),
            "snapchat" => Ok(Self::Snapchat),
            "whatsapp" | "wa" => Ok(Self::WhatsApp),
            "facebook" | "fb" => Ok(Self::Facebook),
            other => Err(DomainError::UnknownPlatform(other.to_string())),
        }
    }
}

// ── WifiSecurity ─────────────────────────────────────────────────────────────

/// Authentication type written into the `T:` field of a WiFi payload.
///
/// Anything that is not one of the well-known values is carried through
/// literally as [`WifiSecurity::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    NoPass,
    Other(String),
}

impl WifiSecurity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for WifiSecurity {
    fn from(s: &str) -> Self {
        match s {
            "WPA" => Self::Wpa,
            "WEP" => Self::Wep,
            "nopass" => Self::NoPass,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for WifiSecurity {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<WifiSecurity> for String {
    fn from(security: WifiSecurity) -> Self {
        security.as_str().to_string()
    }
}

// ── ErrorCorrection ──────────────────────────────────────────────────────────

/// QR symbol redundancy level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored.
    L,
    /// ~15%.
    #[default]
    M,
    /// ~25%.
    Q,
    /// ~30%.
    H,
}

impl ErrorCorrection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::L),
            "m" | "medium" => Ok(Self::M),
            "q" | "quartile" => Ok(Self::Q),
            "h" | "high" => Ok(Self::H),
            other => Err(DomainError::UnknownErrorCorrection(other.to_string())),
        }
    }
}

// ── ImageFormat ──────────────────────────────────────────────────────────────

/// Output image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub const fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }

    /// File name used when the user does not pick one.
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::Png => "qrcode.png",
            Self::Svg => "qrcode.svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Color ────────────────────────────────────────────────────────────────────

/// An RGBA color parsed from hex notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        f32::from(self.a) / 255.0
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex_rgb())
        } else {
            write!(f, "{}{:02x}", self.to_hex_rgb(), self.a)
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidColor {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected hexadecimal digits"));
        }

        // Short forms repeat each digit: "f0a" == "ff00aa".
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return Err(invalid("expected 3, 4, 6 or 8 hex digits")),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
                .map_err(|_| invalid("expected hexadecimal digits"))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
            a: if expanded.len() == 8 { channel(3)? } else { 0xff },
        })
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
