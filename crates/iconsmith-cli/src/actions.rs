//! Nested subcommand actions.

use clap::Subcommand;

/// Configuration file actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a configuration file populated with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Check the configuration without generating anything
    Validate,
}
