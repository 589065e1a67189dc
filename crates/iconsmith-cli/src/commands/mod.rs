//! Command implementations for the iconsmith CLI.
//!
//! Each command module resolves its inputs, performs the operation and
//! formats output according to the requested format.

pub mod completions;
pub mod config;
pub mod generate;
