//! Implementation of the content-type commands (`qrcraft text`, `qrcraft wifi`, ...).
//!
//! Responsibility: turn CLI arguments into a core `Payload`, call the QR
//! service, and deliver the result as files, a data URL or a terminal
//! preview. No formatting rules live here.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use qrcraft_adapters::{ImageRenderer, LocalFilesystem, QrcodeEncoder, terminal, to_data_url};
use qrcraft_core::{
    application::QrService,
    domain::{
        AppStoreLinks, BitcoinPayment, ContactCard, ContentType, EmailMessage, GeneratedQr,
        ImageFormat, Payload, SmsMessage, SocialProfile, TwitterTarget, WifiCredentials,
        WifiSecurity,
    },
};

use crate::{
    cli::{
        AppStoreArgs, BitcoinArgs, EmailArgs, ImageOutput, OutputFormat, PhoneArgs, RenderArgs,
        SmsArgs, SocialArgs, TextArgs, TwitterArgs, VcardArgs, WifiArgs, global::GlobalArgs,
    },
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

// ── Argument → payload ────────────────────────────────────────────────────────

/// Arguments of a command that produces a QR payload.
pub trait PayloadArgs {
    fn payload(&self) -> Payload;
    fn render_args(&self) -> &RenderArgs;
}

impl PayloadArgs for TextArgs {
    fn payload(&self) -> Payload {
        Payload::text(&self.text)
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for WifiArgs {
    fn payload(&self) -> Payload {
        Payload::Wifi(WifiCredentials {
            ssid: self.ssid.clone().unwrap_or_default(),
            password: self.password.clone(),
            security: WifiSecurity::from(self.security.as_str()),
            hidden: self.hidden,
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for EmailArgs {
    fn payload(&self) -> Payload {
        Payload::Email(EmailMessage {
            to: self.to.clone().unwrap_or_default(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for SmsArgs {
    fn payload(&self) -> Payload {
        Payload::Sms(SmsMessage {
            phone: self.phone.clone().unwrap_or_default(),
            message: self.message.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for VcardArgs {
    fn payload(&self) -> Payload {
        Payload::VCard(ContactCard {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            organization: self.organization.clone(),
            title: self.title.clone(),
            website: self.website.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for BitcoinArgs {
    fn payload(&self) -> Payload {
        Payload::Bitcoin(BitcoinPayment {
            address: self.address.clone().unwrap_or_default(),
            amount: self.amount.clone(),
            label: self.label.clone(),
            message: self.message.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for TwitterArgs {
    fn payload(&self) -> Payload {
        Payload::Twitter(TwitterTarget {
            username: self.username.clone(),
            tweet: self.tweet.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for SocialArgs {
    fn payload(&self) -> Payload {
        Payload::Social(SocialProfile {
            platform: self.platform,
            handle: self.handle.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for AppStoreArgs {
    fn payload(&self) -> Payload {
        Payload::AppStore(AppStoreLinks {
            ios_url: self.ios.clone(),
            android_url: self.android.clone(),
        })
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

impl PayloadArgs for PhoneArgs {
    fn payload(&self) -> Payload {
        Payload::phone(&self.number)
    }

    fn render_args(&self) -> &RenderArgs {
        &self.render
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// What a run produced, printed as-is with `--output-format json`.
#[derive(Debug, Default, Serialize)]
struct Report {
    content_type: Option<ContentType>,
    payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    modules: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    data_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

// ── Command ───────────────────────────────────────────────────────────────────

/// Execute a content-type command.
///
/// Dispatch sequence:
/// 1. Format the payload; nothing to encode is a user error
/// 2. Early-exit with the payload text if `--payload-only`
/// 3. Generate both renditions via `QrService`
/// 4. Print the terminal preview and data URLs if requested
/// 5. Write image files unless only previews were requested
#[instrument(skip_all)]
pub fn execute(
    args: &impl PayloadArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let payload = args.payload();
    let render = args.render_args();
    let content_type = payload.content_type();
    let json = output.format() == OutputFormat::Json;

    // 1. Format
    let text = payload.format();
    if text.trim().is_empty() {
        return Err(empty_payload(content_type));
    }
    debug!(content_type = %content_type, len = text.len(), "Payload formatted");

    let mut report = Report {
        content_type: Some(content_type),
        payload: text,
        ..Report::default()
    };

    // 2. Payload only
    if render.payload_only {
        if json {
            output.json(&report)?;
        } else {
            output.data(&report.payload)?;
        }
        return Ok(());
    }

    // 3. Generate
    let options = config.render_options(render);
    let service = QrService::new(
        Box::new(QrcodeEncoder::new()),
        Box::new(ImageRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let generated = service
        .generate(&payload, &options)
        .with_cli_context(|| "generating QR code")?
        .ok_or_else(|| empty_payload(content_type))?;
    report.modules = Some(generated.size);

    let formats = formats(config.image_output(render));

    // 4. Previews
    if render.terminal {
        let preview = terminal::to_unicode(&generated.matrix, options.margin);
        if json {
            report.preview = Some(preview);
        } else {
            output.data(&preview)?;
        }
    }

    if render.data_url {
        for format in formats {
            let url = to_data_url(generated.image(*format));
            if json {
                report.data_urls.push(url);
            } else {
                output.data(&url)?;
            }
        }
    }

    // 5. Files
    let write_files = render.output.is_some() || !(render.terminal || render.data_url);
    if write_files {
        for format in formats {
            let path = target_path(
                render.output.as_deref(),
                &config.output.directory,
                *format,
                formats.len() > 1,
            );
            let overwrite = may_overwrite(&path, render, global)?;
            let written = save(&service, &generated, *format, &path, overwrite)?;

            info!(path = %written.display(), format = %format, "Image written");
            if !json {
                let image = generated.image(*format);
                output.success(&format!(
                    "Saved {} ({}x{} px)",
                    written.display(),
                    image.width,
                    image.width
                ))?;
            }
            report.files.push(written);
        }
    }

    if json {
        output.json(&report)?;
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn empty_payload(content_type: ContentType) -> CliError {
    CliError::EmptyPayload {
        content_type,
        required: content_type.required_fields(),
    }
}

fn formats(output: ImageOutput) -> &'static [ImageFormat] {
    match output {
        ImageOutput::Png => &[ImageFormat::Png],
        ImageOutput::Svg => &[ImageFormat::Svg],
        ImageOutput::Both => &[ImageFormat::Png, ImageFormat::Svg],
    }
}

/// Where to write `format`.
///
/// - no `--output`: the configured directory plus the default file name
/// - an existing directory: that directory plus the default file name
/// - several formats: the given path with each format's extension
/// - otherwise: the given path, with an extension added when it has none
fn target_path(
    output: Option<&Path>,
    directory: &Path,
    format: ImageFormat,
    several: bool,
) -> PathBuf {
    match output {
        None => directory.join(format.default_file_name()),
        Some(path) if path.is_dir() => path.join(format.default_file_name()),
        Some(path) if several => path.with_extension(format.extension()),
        Some(path) => QrService::output_path(path, format),
    }
}

/// Whether an existing file at `path` may be replaced.
///
/// Prompts only on an interactive, non-quiet terminal; elsewhere the save
/// refuses and reports the conflict.
fn may_overwrite(path: &Path, render: &RenderArgs, global: &GlobalArgs) -> CliResult<bool> {
    if render.force || render.yes {
        return Ok(true);
    }
    if !path.exists() || global.quiet || !io::stdin().is_terminal() {
        return Ok(false);
    }

    if confirm(&format!("Overwrite {}?", path.display()))? {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

fn save(
    service: &QrService,
    generated: &GeneratedQr,
    format: ImageFormat,
    path: &Path,
    overwrite: bool,
) -> CliResult<PathBuf> {
    service
        .save(generated.image(format), path, overwrite)
        .with_cli_context(|| format!("saving {}", path.display()))
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: io::Error::from(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use qrcraft_core::domain::SocialPlatform;

    use super::*;

    fn wifi(ssid: Option<&str>, security: &str) -> WifiArgs {
        WifiArgs {
            ssid: ssid.map(str::to_string),
            password: Some("pw".into()),
            security: security.into(),
            hidden: false,
            render: RenderArgs::default(),
        }
    }

    // ── payload construction ──────────────────────────────────────────────────

    #[test]
    fn wifi_args_build_credentials() {
        assert_eq!(
            wifi(Some("Home"), "WEP").payload().format(),
            "WIFI:T:WEP;S:Home;P:pw;;"
        );
    }

    #[test]
    fn wifi_security_is_literal() {
        assert_eq!(
            wifi(Some("Home"), "wpa").payload().format(),
            "WIFI:T:wpa;S:Home;P:pw;;"
        );
    }

    #[test]
    fn missing_ssid_formats_to_nothing() {
        assert_eq!(wifi(None, "WPA").payload().format(), "");
    }

    #[test]
    fn social_args_map_platform() {
        let args = SocialArgs {
            platform: SocialPlatform::Instagram,
            handle: "@ferris".into(),
            render: RenderArgs::default(),
        };
        assert_eq!(args.payload().format(), "https://instagram.com/ferris");
    }

    #[test]
    fn phone_args_strip_spaces() {
        let args = PhoneArgs {
            number: "+1 555 0100".into(),
            render: RenderArgs::default(),
        };
        assert_eq!(args.payload().format(), "tel:+15550100");
    }

    // ── target_path ───────────────────────────────────────────────────────────

    #[test]
    fn default_path_uses_configured_directory() {
        let path = target_path(None, Path::new("out"), ImageFormat::Svg, false);
        assert_eq!(path, PathBuf::from("out/qrcode.svg"));
    }

    #[test]
    fn existing_directory_gets_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = target_path(Some(dir.path()), Path::new("."), ImageFormat::Png, false);
        assert_eq!(path, dir.path().join("qrcode.png"));
    }

    #[test]
    fn extension_is_added_when_missing() {
        let path = target_path(Some(Path::new("code")), Path::new("."), ImageFormat::Png, false);
        assert_eq!(path, PathBuf::from("code.png"));
    }

    #[test]
    fn several_formats_swap_extension() {
        let out = Some(Path::new("code.png"));
        assert_eq!(
            target_path(out, Path::new("."), ImageFormat::Svg, true),
            PathBuf::from("code.svg")
        );
        assert_eq!(
            target_path(out, Path::new("."), ImageFormat::Png, true),
            PathBuf::from("code.png")
        );
    }

    #[test]
    fn formats_for_both() {
        assert_eq!(formats(ImageOutput::Both), &[ImageFormat::Png, ImageFormat::Svg]);
        assert_eq!(formats(ImageOutput::Svg), &[ImageFormat::Svg]);
    }

    // ── overwrite policy ──────────────────────────────────────────────────────

    #[test]
    fn force_always_allows_overwrite() {
        let render = RenderArgs {
            force: true,
            ..RenderArgs::default()
        };
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            log_file: None,
            output_format: OutputFormat::Plain,
        };
        assert!(may_overwrite(Path::new("whatever.png"), &render, &global).unwrap());
    }

    #[test]
    fn missing_file_needs_no_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            log_file: None,
            output_format: OutputFormat::Plain,
        };
        let path = dir.path().join("new.png");
        assert!(!may_overwrite(&path, &RenderArgs::default(), &global).unwrap());
    }

    #[test]
    fn empty_payload_error_lists_required_fields() {
        match empty_payload(ContentType::Email) {
            CliError::EmptyPayload { required, .. } => assert_eq!(required, &["to"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
