//! `qrcraft config` - inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&active_config_path(global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// `--config` if given, else the default location.
fn active_config_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let render = &config.render;
    match key {
        "render.width" => Ok(render
            .width
            .map(|w| w.to_string())
            .unwrap_or_else(|| "none".into())),
        "render.margin" => Ok(render.margin.to_string()),
        "render.scale" => Ok(render.scale.to_string()),
        "render.dark" => Ok(render.dark.to_string()),
        "render.light" => Ok(render.light.to_string()),
        "render.error_correction" => Ok(render.error_correction.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.to_string()),
        "output.directory" => Ok(config.output.directory.display().to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn get_render_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "render.width").unwrap(), "300");
        assert_eq!(get_config_value(&cfg, "render.margin").unwrap(), "2");
        assert_eq!(get_config_value(&cfg, "render.dark").unwrap(), "#000000");
    }

    #[test]
    fn unset_width_reads_as_none() {
        let mut cfg = AppConfig::default();
        cfg.render.width = None;
        assert_eq!(get_config_value(&cfg, "render.width").unwrap(), "none");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_output_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "png");
    }

    #[test]
    fn explicit_config_flag_wins() {
        let global = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: Some(PathBuf::from("/tmp/custom.toml")),
            log_file: None,
            output_format: OutputFormat::Plain,
        };
        assert_eq!(active_config_path(&global), PathBuf::from("/tmp/custom.toml"));
    }
}
