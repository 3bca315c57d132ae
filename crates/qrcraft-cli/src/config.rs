//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, see [`AppConfig::render_options`])
//! 2. Environment variables: `QRCRAFT__RENDER__WIDTH=512`
//! 3. Config file: `--config FILE`, else `config.toml` in the platform
//!    config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use qrcraft_core::domain::{ErrorCorrection, RenderOptions};

use crate::cli::{ImageOutput, RenderArgs};

const ENV_PREFIX: &str = "QRCRAFT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for image rendering.
    pub render: RenderOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Image files written when `--format` is not given.
    pub format: ImageOutput,
    /// Directory for files when `--output` is not given.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: ImageOutput::Png,
            directory: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  The default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.qrcraft.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "qrcraft", "qrcraft")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".qrcraft.toml"))
    }

    /// Merge command-line render flags over the configured defaults.
    pub fn render_options(&self, args: &RenderArgs) -> RenderOptions {
        let base = self.render;
        RenderOptions {
            width: args.width.or(base.width),
            margin: args.margin.unwrap_or(base.margin),
            scale: args.scale.unwrap_or(base.scale),
            dark: args.dark.unwrap_or(base.dark),
            light: args.light.unwrap_or(base.light),
            error_correction: args.ecc.unwrap_or(base.error_correction),
        }
    }

    pub fn image_output(&self, args: &RenderArgs) -> ImageOutput {
        args.format.unwrap_or(self.output.format)
    }
}
