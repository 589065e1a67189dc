//! Generate command implementation.
//!
//! Resolves the effective configuration, runs the icon pipeline against
//! the local filesystem and prints the run report.

use super::config::{self, Config};
use anyhow::{Context, Result};
use colored::Colorize;
use iconsmith_codegen::{DefaultOptimizer, GenerationReport, IconPipeline};
use iconsmith_core::cli::{ExitCode, OutputFormat};
use iconsmith_files::LocalStore;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Command-line overrides for a generation run.
///
/// `None` keeps the value from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory containing the source SVG files
    pub icons_dir: Option<PathBuf>,
    /// Directory the generated components are written to
    pub components_dir: Option<PathBuf>,
    /// Path of the generated index
    pub index_path: Option<PathBuf>,
    /// Maximum number of icons processed at once
    pub concurrency: Option<usize>,
    /// Per-icon time limit in seconds
    pub timeout_secs: Option<u64>,
    /// Default `size` prop of generated components
    pub size: Option<u32>,
    /// Exit with [`ExitCode::PARTIAL_FAILURE`] when any icon fails
    pub fail_on_error: bool,
}

impl GenerateOptions {
    /// Applies the overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.icons_dir {
            config.paths.icons_dir.clone_from(dir);
        }
        if let Some(dir) = &self.components_dir {
            config.paths.components_dir.clone_from(dir);
        }
        if let Some(path) = &self.index_path {
            config.paths.index_path = Some(path.clone());
        }
        if let Some(limit) = self.concurrency {
            config.runtime.concurrency = limit;
        }
        if let Some(secs) = self.timeout_secs {
            config.runtime.timeout_seconds = secs;
        }
        if let Some(size) = self.size {
            config.runtime.default_size = size;
        }
    }
}

/// Loads the configuration, applies overrides and validates the result.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the merged
/// configuration is invalid.
pub fn resolve_config(options: &GenerateOptions, config_path: Option<&Path>) -> Result<Config> {
    let (mut config, source) = config::load_effective(config_path)?;
    if let Some(source) = source {
        info!("Using configuration from {}", source.display());
    }

    options.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Maps a finished run to the process exit code.
#[must_use]
pub const fn exit_code_for(report: &GenerationReport, fail_on_error: bool) -> ExitCode {
    if fail_on_error && !report.is_complete() {
        ExitCode::PARTIAL_FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Runs the generate command.
///
/// Configuration problems yield [`ExitCode::INVALID_INPUT`]. Per-icon
/// failures are reported and only change the exit code when
/// `fail_on_error` is set.
///
/// # Errors
///
/// Returns an error if the run itself fails, e.g. the icons directory is
/// missing or the index cannot be written.
pub async fn run(
    options: GenerateOptions,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = match resolve_config(&options, config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e:#}");
            eprintln!("{} {e:#}", "error:".red().bold());
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    let pipeline = IconPipeline::new(
        config.to_generator_config(),
        LocalStore::new(),
        DefaultOptimizer::new(),
    );
    let report = pipeline
        .run_with_report()
        .await
        .context("icon generation failed")?;

    let formatted = crate::formatters::format_report(&report, output_format)
        .context("failed to format generation report")?;
    println!("{formatted}");

    Ok(exit_code_for(&report, options.fail_on_error))
}
