//! CLI argument definitions.
//!
//! Contains the clap command tree for the `iconsmith` binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::actions::ConfigAction;

/// Iconsmith - turn a directory of SVG files into typed React icon components.
///
/// Reads every SVG in the icons directory, optimizes it, wraps it in a
/// `React.forwardRef` component and writes a barrel index re-exporting
/// each generated icon.
#[derive(Parser, Debug)]
#[command(name = "iconsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,

    /// Path to the configuration file (default: ./iconsmith.toml if present)
    #[arg(short, long, global = true, env = "ICONSMITH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate React components from SVG icons.
    ///
    /// Flags override values from the configuration file. Failed icons are
    /// reported but do not stop the run unless `--fail-on-error` is set.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Use ./iconsmith.toml or built-in defaults
    /// iconsmith generate
    ///
    /// # Custom layout
    /// iconsmith generate --icons-dir assets/svg --components-dir src/icons
    ///
    /// # CI: exit 3 when any icon fails
    /// iconsmith --format json generate --fail-on-error
    /// ```
    Generate {
        /// Directory containing the source SVG files
        #[arg(long)]
        icons_dir: Option<PathBuf>,

        /// Directory the generated components are written to
        #[arg(long)]
        components_dir: Option<PathBuf>,

        /// Path of the generated index (default: next to the components directory)
        #[arg(long)]
        index_path: Option<PathBuf>,

        /// Maximum number of icons processed at once
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,

        /// Per-icon time limit in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Default `size` prop of generated components
        #[arg(long)]
        size: Option<u32>,

        /// Exit with a non-zero code when any icon fails
        #[arg(long)]
        fail_on_error: bool,
    },

    /// Manage the iconsmith configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}
