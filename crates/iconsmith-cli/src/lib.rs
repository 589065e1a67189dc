//! Iconsmith CLI library.
//!
//! Exposes the argument definitions, command implementations and output
//! formatters behind the `iconsmith` binary so they can be tested and
//! embedded.
//!
//! # Architecture
//!
//! - `generate` - Run the SVG to React component pipeline
//! - `config` - Create, show and validate `iconsmith.toml`
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! iconsmith config init
//! iconsmith generate --icons-dir assets/svg
//! iconsmith --format json generate --fail-on-error
//! ```

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use actions::ConfigAction;
pub use cli::{Cli, Commands};
