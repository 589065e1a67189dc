//! Core types, traits, and errors for iconsmith.
//!
//! This crate provides the foundational types and abstractions shared by the
//! icon generation workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`AssetName`, `ExportName`)
//! - Error hierarchy, including the structured per-asset `AssetError`
//! - Collaborator traits for storage and SVG optimization
//! - Generator configuration and CLI primitives

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;
pub mod traits;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, MAX_CONCURRENCY};
pub use error::{AssetError, Error, ErrorKind, Result, Stage};
pub use types::{AssetName, ExportName};
