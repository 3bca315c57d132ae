//! Payload records: the structured inputs a QR code can be built from.
//!
//! Required fields are plain `String`s where empty means "not given".
//! Optional fields are `Option<String>` and `Some("")` is treated the same as
//! `None` by the formatters.

use serde::{Deserialize, Serialize};

use crate::domain::formatter;
use crate::domain::value_objects::{ContentType, SocialPlatform, WifiSecurity};

/// WiFi network credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: Option<String>,
    pub security: WifiSecurity,
    pub hidden: bool,
}

impl WifiCredentials {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            ..Self::default()
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn security(mut self, security: WifiSecurity) -> Self {
        self.security = security;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// A pre-filled email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailMessage {
    pub to: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// A pre-filled text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsMessage {
    pub phone: String,
    pub message: Option<String>,
}

/// Contact details for a vCard 3.0 block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactCard {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub website: Option<String>,
}

/// A BIP21 payment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitcoinPayment {
    pub address: String,
    /// Passed through as written; BIP21 expects a decimal BTC amount.
    pub amount: Option<String>,
    pub label: Option<String>,
    pub message: Option<String>,
}

/// A Twitter profile or a pre-filled tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterTarget {
    pub username: Option<String>,
    /// When set, wins over `username`.
    pub tweet: Option<String>,
}

/// A profile on one of the supported social platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub platform: SocialPlatform,
    /// Handle, phone number (WhatsApp), page id (Facebook) or a full URL.
    pub handle: String,
}

/// Store links for a mobile app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppStoreLinks {
    pub ios_url: Option<String>,
    pub android_url: Option<String>,
}

/// Any payload the generator knows how to format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Payload {
    Text { text: String },
    Wifi(WifiCredentials),
    Email(EmailMessage),
    Sms(SmsMessage),
    #[serde(rename = "vcard")]
    VCard(ContactCard),
    Bitcoin(BitcoinPayment),
    Twitter(TwitterTarget),
    Social(SocialProfile),
    AppStore(AppStoreLinks),
    Phone { phone: String },
}

impl Payload {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn phone(phone: impl Into<String>) -> Self {
        Self::Phone {
            phone: phone.into(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text { .. } => ContentType::Text,
            Self::Wifi(_) => ContentType::Wifi,
            Self::Email(_) => ContentType::Email,
            Self::Sms(_) => ContentType::Sms,
            Self::VCard(_) => ContentType::VCard,
            Self::Bitcoin(_) => ContentType::Bitcoin,
            Self::Twitter(_) => ContentType::Twitter,
            Self::Social(_) => ContentType::Social,
            Self::AppStore(_) => ContentType::AppStore,
            Self::Phone { .. } => ContentType::Phone,
        }
    }

    /// The literal text to encode, or `""` when required input is missing.
    pub fn format(&self) -> String {
        match self {
            Self::Text { text } => formatter::format_text(text),
            Self::Wifi(wifi) => formatter::format_wifi(wifi),
            Self::Email(email) => formatter::format_email(email),
            Self::Sms(sms) => formatter::format_sms(sms),
            Self::VCard(card) => formatter::format_vcard(card),
            Self::Bitcoin(payment) => formatter::format_bitcoin(payment),
            Self::Twitter(target) => formatter::format_twitter(target),
            Self::Social(profile) => formatter::format_social(profile.platform, &profile.handle),
            Self::AppStore(links) => formatter::format_app_store(links),
            Self::Phone { phone } => formatter::format_phone(phone),
        }
    }
}
