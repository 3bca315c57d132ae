//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use qrcraft_core::domain::{Color, ErrorCorrection, SocialPlatform};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "qrcraft",
    bin_name = "qrcraft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "QR codes for text, WiFi, contacts, payments and social links",
    long_about = "qrcraft turns text or structured data (WiFi credentials, \
                  contacts, payment requests, social profiles...) into QR \
                  codes and saves them as PNG or SVG.",
    after_help = "EXAMPLES:\n\
        \x20 qrcraft text 'Hello, world'\n\
        \x20 qrcraft wifi --ssid Home --password hunter2 -o wifi.png\n\
        \x20 qrcraft social instagram @ferris --format svg\n\
        \x20 qrcraft phone '+1 555 0100' --terminal",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode plain text or a URL.
    #[command(
        visible_alias = "url",
        after_help = "EXAMPLES:\n\
            \x20 qrcraft text 'https://example.com'\n\
            \x20 qrcraft text 'Meet at 6' --payload-only"
    )]
    Text(TextArgs),

    /// Share WiFi credentials.
    #[command(after_help = "EXAMPLES:\n\
            \x20 qrcraft wifi --ssid Home --password hunter2\n\
            \x20 qrcraft wifi --ssid Guest --security nopass --hidden")]
    Wifi(WifiArgs),

    /// Compose an email (mailto: link).
    #[command(visible_alias = "mail")]
    Email(EmailArgs),

    /// Compose a text message (sms: link).
    Sms(SmsArgs),

    /// Share a contact card (vCard 3.0).
    #[command(visible_alias = "contact")]
    Vcard(VcardArgs),

    /// Request a Bitcoin payment (BIP21 URI).
    #[command(visible_alias = "btc")]
    Bitcoin(BitcoinArgs),

    /// Link a Twitter/X profile or pre-filled tweet.
    Twitter(TwitterArgs),

    /// Link a social media profile.
    #[command(after_help = "EXAMPLES:\n\
            \x20 qrcraft social instagram @ferris\n\
            \x20 qrcraft social whatsapp '+1 (555) 010-0000'\n\
            \x20 qrcraft social linkedin https://linkedin.com/in/someone")]
    Social(SocialArgs),

    /// Link an app in the App Store or Google Play.
    #[command(name = "app-store", visible_alias = "app")]
    AppStore(AppStoreArgs),

    /// Dial a phone number (tel: link).
    #[command(visible_alias = "tel")]
    Phone(PhoneArgs),

    /// Generate shell completion scripts.
    #[command(after_help = "EXAMPLES:\n\
            \x20 qrcraft completions bash > ~/.local/share/bash-completion/completions/qrcraft\n\
            \x20 qrcraft completions zsh  > ~/.zfunc/_qrcraft\n\
            \x20 qrcraft completions fish > ~/.config/fish/completions/qrcraft.fish")]
    Completions(CompletionsArgs),

    /// Write a default configuration file.
    Init(InitArgs),

    /// Inspect the configuration.
    #[command(
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 qrcraft config get render.width\n\
            \x20 qrcraft config list\n\
            \x20 qrcraft config path"
    )]
    Config(ConfigCommands),
}

// ── shared render arguments ───────────────────────────────────────────────────

/// Image options shared by every content-type command.
///
/// Unset values fall back to the configuration file, then to built-in
/// defaults.
#[derive(Debug, Clone, Default, Args)]
#[command(next_help_heading = "Image options")]
pub struct RenderArgs {
    #[arg(long = "width", value_name = "PX", help = "Image width in pixels")]
    pub width: Option<u32>,

    #[arg(long = "margin", value_name = "MODULES", help = "Quiet zone in modules")]
    pub margin: Option<u32>,

    /// Used when `--width` is too small for the symbol.
    #[arg(long = "scale", value_name = "PX", help = "Pixels per module")]
    pub scale: Option<u32>,

    #[arg(long = "dark", value_name = "HEX", help = "Dark module color, e.g. #000000")]
    pub dark: Option<Color>,

    #[arg(long = "light", value_name = "HEX", help = "Background color, e.g. #ffffff")]
    pub light: Option<Color>,

    /// One of L, M, Q, H (or low, medium, quartile, high).
    #[arg(long = "ecc", value_name = "LEVEL", help = "Error correction level")]
    pub ecc: Option<ErrorCorrection>,

    /// File to write.  Without an extension, the format's extension is added.
    /// An existing directory receives `qrcode.png` / `qrcode.svg`.
    #[arg(short = 'o', long = "output", value_name = "PATH", help = "Output file")]
    pub output: Option<PathBuf>,

    #[arg(long = "format", value_enum, help = "Image format to write")]
    pub format: Option<ImageOutput>,

    /// Print the text that would be encoded and stop.
    #[arg(long = "payload-only", help = "Print the payload text only")]
    pub payload_only: bool,

    /// Print a `data:` URL.  No file is written unless `--output` is given.
    #[arg(long = "data-url", help = "Print the image as a data: URL")]
    pub data_url: bool,

    /// Draw the code in the terminal.  No file is written unless `--output`
    /// is given.
    #[arg(long = "terminal", help = "Preview the code in the terminal")]
    pub terminal: bool,

    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    #[arg(short = 'y', long = "yes", help = "Answer yes to prompts")]
    pub yes: bool,
}

// ── content types ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TextArgs {
    #[arg(value_name = "TEXT", help = "Text or URL to encode")]
    pub text: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct WifiArgs {
    #[arg(long = "ssid", help = "Network name")]
    pub ssid: Option<String>,

    #[arg(long = "password", help = "Network password")]
    pub password: Option<String>,

    /// Written as given: WPA, WEP, nopass, or anything else.
    #[arg(
        long = "security",
        value_name = "TYPE",
        default_value = "WPA",
        help = "Security type (WPA, WEP, nopass)"
    )]
    pub security: String,

    #[arg(long = "hidden", help = "The network does not broadcast its SSID")]
    pub hidden: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct EmailArgs {
    #[arg(long = "to", value_name = "ADDRESS", help = "Recipient address")]
    pub to: Option<String>,

    #[arg(long = "subject")]
    pub subject: Option<String>,

    #[arg(long = "body")]
    pub body: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct SmsArgs {
    #[arg(long = "phone", value_name = "NUMBER", help = "Recipient number")]
    pub phone: Option<String>,

    #[arg(long = "message")]
    pub message: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct VcardArgs {
    #[arg(long = "first-name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name")]
    pub last_name: Option<String>,

    #[arg(long = "phone")]
    pub phone: Option<String>,

    #[arg(long = "email")]
    pub email: Option<String>,

    #[arg(long = "org", help = "Organization")]
    pub organization: Option<String>,

    #[arg(long = "title", help = "Job title")]
    pub title: Option<String>,

    #[arg(long = "website")]
    pub website: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct BitcoinArgs {
    #[arg(long = "address", help = "Receiving address")]
    pub address: Option<String>,

    /// Passed through verbatim, e.g. `0.005`.
    #[arg(long = "amount", value_name = "BTC")]
    pub amount: Option<String>,

    #[arg(long = "label")]
    pub label: Option<String>,

    #[arg(long = "message")]
    pub message: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct TwitterArgs {
    #[arg(long = "username", help = "Profile handle or URL")]
    pub username: Option<String>,

    /// Takes precedence over `--username`.
    #[arg(long = "tweet", help = "Pre-filled tweet text")]
    pub tweet: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct SocialArgs {
    /// twitter (x), instagram (ig), linkedin, tiktok, youtube (yt),
    /// bluesky (bsky), snapchat, whatsapp (wa) or facebook (fb).
    #[arg(value_name = "PLATFORM")]
    pub platform: SocialPlatform,

    /// Handle, phone number (WhatsApp), page id, or a full `http…` URL.
    #[arg(value_name = "HANDLE")]
    pub handle: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct AppStoreArgs {
    #[arg(long = "ios", value_name = "URL", help = "App Store link (preferred)")]
    pub ios: Option<String>,

    #[arg(long = "android", value_name = "URL", help = "Google Play link")]
    pub android: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args)]
pub struct PhoneArgs {
    #[arg(value_name = "NUMBER")]
    pub number: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.width`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Which image files to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageOutput {
    #[default]
    Png,
    Svg,
    Both,
}

impl std::fmt::Display for ImageOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Svg => write!(f, "svg"),
            Self::Both => write!(f, "both"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
