//! Payload formatters.
//!
//! One pure function per content type. Each maps a record to the exact text
//! a scanner expects (WIFI schema, vCard 3.0, BIP21, `mailto:`/`sms:`/`tel:`
//! URIs, profile links) and returns `""` when a required field is missing.
//! Nothing here validates input beyond that: a malformed phone number is
//! passed through as given.
//!
//! Escaping follows each format's own rules: WiFi fields are
//! backslash-escaped, URI query values are percent-encoded, vCard values and
//! Bitcoin amounts are written raw.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::entities::payload::{
    AppStoreLinks, BitcoinPayment, ContactCard, EmailMessage, SmsMessage, TwitterTarget,
    WifiCredentials,
};
use crate::domain::value_objects::SocialPlatform;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet?text=";

/// Bytes left alone by `encodeURIComponent`: alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Plain text, trimmed.
pub fn format_text(text: &str) -> String {
    text.trim().to_string()
}

/// `WIFI:T:<security>;S:<ssid>;P:<password>;[H:true;];`
pub fn format_wifi(wifi: &WifiCredentials) -> String {
    if wifi.ssid.is_empty() {
        return String::new();
    }

    let hidden = if wifi.hidden { "H:true;" } else { "" };
    let password = present(&wifi.password).unwrap_or_default();

    format!(
        "WIFI:T:{};S:{};P:{};{};",
        wifi.security.as_str(),
        escape_wifi(&wifi.ssid),
        escape_wifi(password),
        hidden
    )
}

/// `mailto:<to>[?subject=..][&body=..]`
pub fn format_email(email: &EmailMessage) -> String {
    if email.to.is_empty() {
        return String::new();
    }

    let params = query_params([
        ("subject", present(&email.subject).map(percent_encode)),
        ("body", present(&email.body).map(percent_encode)),
    ]);

    with_query(format!("mailto:{}", email.to), &params)
}

/// `sms:<phone>[?body=..]` with whitespace removed from the number.
pub fn format_sms(sms: &SmsMessage) -> String {
    if sms.phone.is_empty() {
        return String::new();
    }

    let phone = strip_whitespace(&sms.phone);
    match present(&sms.message) {
        Some(message) => format!("sms:{phone}?body={}", percent_encode(message)),
        None => format!("sms:{phone}"),
    }
}

/// A vCard 3.0 block, one property per line, `\n` separated.
pub fn format_vcard(card: &ContactCard) -> String {
    let first = present(&card.first_name);
    let last = present(&card.last_name);
    if first.is_none() && last.is_none() {
        return String::new();
    }

    let display_name = [first, last].into_iter().flatten().collect::<Vec<_>>().join(" ");

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", last.unwrap_or_default(), first.unwrap_or_default()),
        format!("FN:{display_name}"),
    ];

    let optional = [
        ("TEL;TYPE=CELL", &card.phone),
        ("EMAIL", &card.email),
        ("ORG", &card.organization),
        ("TITLE", &card.title),
        ("URL", &card.website),
    ];
    lines.extend(
        optional
            .into_iter()
            .filter_map(|(property, value)| present(value).map(|v| format!("{property}:{v}"))),
    );

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// BIP21: `bitcoin:<address>[?amount=..][&label=..][&message=..]`
pub fn format_bitcoin(payment: &BitcoinPayment) -> String {
    if payment.address.is_empty() {
        return String::new();
    }

    let params = query_params([
        ("amount", present(&payment.amount).map(str::to_string)),
        ("label", present(&payment.label).map(percent_encode)),
        ("message", present(&payment.message).map(percent_encode)),
    ]);

    with_query(format!("bitcoin:{}", payment.address), &params)
}

/// Tweet intent when a tweet is given, otherwise the profile link.
pub fn format_twitter(target: &TwitterTarget) -> String {
    if let Some(tweet) = present(&target.tweet) {
        return format!("{TWEET_INTENT}{}", percent_encode(tweet));
    }

    match present(&target.username) {
        Some(username) => format_social(SocialPlatform::Twitter, username),
        None => String::new(),
    }
}

/// Profile link for `handle` on `platform`.
///
/// Values that already start with `http` are returned untouched. Otherwise a
/// leading `@` is dropped and the handle is appended to the platform's
/// profile URL. WhatsApp numbers additionally lose spaces, dashes,
/// parentheses and their first `+`.
pub fn format_social(platform: SocialPlatform, handle: &str) -> String {
    if handle.is_empty() {
        return String::new();
    }
    if handle.starts_with("http") {
        return handle.to_string();
    }

    let handle = handle.strip_prefix('@').unwrap_or(handle);
    let handle = match platform {
        SocialPlatform::WhatsApp => handle
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect::<String>()
            .replacen('+', "", 1),
        _ => handle.to_string(),
    };

    format!("{}{handle}", platform.profile_prefix())
}

/// The iOS link if present, else the Android link, else `""`.
pub fn format_app_store(links: &AppStoreLinks) -> String {
    present(&links.ios_url)
        .or_else(|| present(&links.android_url))
        .unwrap_or_default()
        .to_string()
}

/// `tel:<phone>` with whitespace removed.
pub fn format_phone(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }
    format!("tel:{}", strip_whitespace(phone))
}

// ── helpers ──────────────────────────────────────────────────────────────────

/// Backslash-escape `\`, `;`, `,` and `:` for the WIFI schema.
pub fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Reverse of [`escape_wifi`].
pub fn unescape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode a URI component the way `encodeURIComponent` does.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn query_params<const N: usize>(pairs: [(&str, Option<String>); N]) -> Vec<String> {
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
        .collect()
}

fn with_query(base: String, params: &[String]) -> String {
    if params.is_empty() {
        base
    } else {
        format!("{base}?{}", params.join("&"))
    }
}
