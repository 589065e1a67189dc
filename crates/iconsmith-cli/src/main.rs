//! `iconsmith` binary entry point.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use iconsmith_cli::cli::Cli;
use iconsmith_cli::runner::{execute_command, init_logging};
use iconsmith_core::cli::{ExitCode, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(ExitCode::INVALID_INPUT.as_i32());
        }
    };

    let exit_code = execute_command(cli.command, cli.config, output_format).await?;

    std::process::exit(exit_code.as_i32());
}
