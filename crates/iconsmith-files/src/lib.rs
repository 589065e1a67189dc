//! Asset storage backends for iconsmith.
//!
//! Provides two implementations of [`AssetStore`]:
//!
//! - [`LocalStore`]: the real filesystem through `tokio::fs`, with optional
//!   atomic writes (temp file + rename)
//! - [`MemoryStore`]: an in-memory tree for tests and dry runs
//!
//! # Examples
//!
//! ```
//! use iconsmith_core::traits::AssetStore;
//! use iconsmith_files::MemoryStore;
//! use std::path::Path;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> iconsmith_core::Result<()> {
//! let store = MemoryStore::builder()
//!     .add_file("icons/arrow-left.svg", "<svg viewBox=\"0 0 24 24\"/>")
//!     .build();
//!
//! let names = store.list_dir(Path::new("icons")).await?;
//! assert_eq!(names, vec!["arrow-left.svg".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! [`AssetStore`]: iconsmith_core::traits::AssetStore

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod local;
mod memory;

pub use local::{LocalStore, WriteOptions};
pub use memory::{MemoryStore, MemoryStoreBuilder};
