//! Asset storage trait.
//!
//! Models the four filesystem capabilities the generator needs: list a
//! directory, read a file, write a file, and create a directory tree.

use crate::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Storage backend for source assets and generated artifacts.
///
/// # Examples
///
/// ```no_run
/// # use iconsmith_core::traits::AssetStore;
/// # use iconsmith_core::Result;
/// # use std::path::Path;
/// # async fn example(store: &impl AssetStore) -> Result<()> {
/// store.create_dir_all(Path::new("src/components")).await?;
/// for name in store.list_dir(Path::new("icons")).await? {
///     println!("found {name}");
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Lists the names of the entries directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` if the directory does not exist,
    /// or `Error::Io` if it cannot be read.
    async fn list_dir(&self, dir: &Path) -> Result<Vec<String>>;

    /// Reads a UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes `content` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing or the write fails.
    async fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Creates `dir` and all missing parents. Succeeds if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    async fn create_dir_all(&self, dir: &Path) -> Result<()>;
}

#[async_trait]
impl<T: AssetStore + ?Sized> AssetStore for Arc<T> {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list_dir(dir).await
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path).await
    }

    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write(path, content).await
    }

    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        (**self).create_dir_all(dir).await
    }
}
