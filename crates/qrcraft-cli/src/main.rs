//! # qrcraft CLI
//!
//! Generate QR codes for text, WiFi, contacts, payments and social links.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    commands::generate,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // --help / --version arrive here as "errors" that belong on stdout with
    // exit 0; real argument-parse failures exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("qrcraft completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let global = &cli.global;
    match cli.command {
        Commands::Text(args) => generate::execute(&args, global, &config, &output),
        Commands::Wifi(args) => generate::execute(&args, global, &config, &output),
        Commands::Email(args) => generate::execute(&args, global, &config, &output),
        Commands::Sms(args) => generate::execute(&args, global, &config, &output),
        Commands::Vcard(args) => generate::execute(&args, global, &config, &output),
        Commands::Bitcoin(args) => generate::execute(&args, global, &config, &output),
        Commands::Twitter(args) => generate::execute(&args, global, &config, &output),
        Commands::Social(args) => generate::execute(&args, global, &config, &output),
        Commands::AppStore(args) => generate::execute(&args, global, &config, &output),
        Commands::Phone(args) => generate::execute(&args, global, &config, &output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Init(cmd) => commands::init::execute(cmd, &output),
        Commands::Config(cmd) => commands::config::execute(cmd, global, &config, &output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// The only place where structured errors become human-readable output and
/// OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message on stderr so it shows even when
    //    stdout is redirected.  No colour unless stderr is a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
