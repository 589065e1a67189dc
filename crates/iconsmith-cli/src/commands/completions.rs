//! Shell completion generation command.
//!
//! Writes completion scripts for bash, zsh, fish, elvish and `PowerShell`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use iconsmith_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::info;

use crate::cli::Cli;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap_complete::Shell;
/// use iconsmith_cli::commands::completions;
///
/// let mut script = Vec::new();
/// completions::write_completions(Shell::Bash, &mut script);
/// assert!(String::from_utf8(script).unwrap().contains("iconsmith"));
/// ```
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
pub async fn run(shell: Shell) -> Result<ExitCode> {
    info!("Generating {shell} completions");
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout);
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
