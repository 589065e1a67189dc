//! Command execution and runtime logic.
//!
//! Contains logging initialization and the command dispatch.

use anyhow::Result;
use iconsmith_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;
use crate::commands::generate::GenerateOptions;

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored with an
/// `info` fallback. Logs go to stderr so stdout carries only command output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn execute_command(
    command: Commands,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            icons_dir,
            components_dir,
            index_path,
            concurrency,
            timeout_secs,
            size,
            fail_on_error,
        } => {
            let options = GenerateOptions {
                icons_dir,
                components_dir,
                index_path,
                concurrency,
                timeout_secs,
                size,
                fail_on_error,
            };
            commands::generate::run(options, config_path, output_format).await
        }
        Commands::Config { action } => {
            commands::config::run(action, config_path, output_format).await
        }
        Commands::Completions { shell } => commands::completions::run(shell).await,
    }
}
