//! Stencil CLI
//!
//! Main entry point for the `stencil` binary.

use std::process::ExitCode;

use clap::Parser;
use stencil_cli::cli::Cli;
use stencil_cli::{CliError, Exit};
use stencil_common_config::{vars, Environment, LogSettings, StencilConfig};
use stencil_common_log::{LogConfig, LogLevel};
use tracing::{debug, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env = Environment::init();
    let config = cli.load_config();

    let log_settings = config.as_ref().ok().map(|c| &c.log);
    if let Err(e) = stencil_common_log::init(log_config(&cli, log_settings)) {
        eprintln!("warning: {e}");
    }
    if let Err(e) = env {
        warn!("{e}");
    }

    match config.and_then(|config| run(cli, config)) {
        Ok(()) => Exit::Success.into(),
        Err(e) => report(&e),
    }
}

fn run(cli: Cli, config: StencilConfig) -> Result<(), CliError> {
    cli.execute(config)
}

/// Layer logging settings: config file, then environment, then flags.
fn log_config(cli: &Cli, settings: Option<&LogSettings>) -> LogConfig {
    let mut config = LogConfig::from_env();

    if let Some(settings) = settings {
        if Environment::get(vars::STENCIL_LOG_LEVEL).is_none()
            && Environment::get(vars::RUST_LOG).is_none()
        {
            config.level = settings.level;
        }
        if Environment::get(vars::STENCIL_LOG_FORMAT).is_none() {
            config.format = settings.format;
        }
    }

    if cli.verbose > 0 || cli.quiet {
        config.level = LogLevel::from_verbosity(cli.verbose, cli.quiet);
    }
    config
}

fn report(e: &CliError) -> ExitCode {
    debug!(code = e.code(), error = ?e, "command failed");
    eprintln!("error[{}]: {e}", e.code());
    if let Some(hint) = e.hint() {
        eprintln!("  hint: {hint}");
    }
    for suggestion in e.suggestions() {
        eprintln!("    {suggestion}");
    }
    e.exit_code()
}
