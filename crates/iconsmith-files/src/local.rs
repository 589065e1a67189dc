//! Local filesystem storage.
//!
//! Backs [`AssetStore`] with `tokio::fs`. Generated files are written
//! atomically by default: content goes to a sibling temp file which is
//! synced and then renamed over the destination on the blocking pool, so a
//! crashed or cancelled run never leaves a half-written component behind.

use async_trait::async_trait;
use iconsmith_core::traits::AssetStore;
use iconsmith_core::{Error, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Options for file writes.
///
/// # Examples
///
/// ```
/// use iconsmith_files::WriteOptions;
///
/// let options = WriteOptions::default().with_atomic_writes(false);
/// assert!(!options.atomic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename)
    pub atomic: bool,
}

impl WriteOptions {
    /// Creates write options with defaults.
    ///
    /// Defaults:
    /// - atomic: true
    #[must_use]
    pub const fn new() -> Self {
        Self { atomic: true }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Asset store over the local filesystem.
///
/// Relative paths resolve against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    options: WriteOptions,
}

impl LocalStore {
    /// Creates a store with default write options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: WriteOptions::new(),
        }
    }

    /// Creates a store with custom write options.
    #[must_use]
    pub const fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Returns the write options in effect.
    #[must_use]
    pub const fn options(&self) -> WriteOptions {
        self.options
    }
}

#[async_trait]
impl AssetStore for LocalStore {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(dir).await.map_err(|e| map_io(dir, e))?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(|e| map_io(dir, e))? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::warn!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display());
                }
            }
        }

        tracing::debug!("Listed {} entries in {}", names.len(), dir.display());
        Ok(names)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(|e| map_io(path, e))
    }

    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.options.atomic {
            write_atomic(path, content).await
        } else {
            fs::write(path, content).await.map_err(|e| map_io(path, e))
        }
    }

    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).await.map_err(|e| map_io(dir, e))
    }
}

/// Writes through a temp file in the same directory, then renames.
///
/// The whole sequence runs as one blocking task. Dropping the returned
/// future does not stop it, so the temp file is always either renamed or
/// removed.
async fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let path = path.to_path_buf();
    let content = content.to_owned();
    let target = path.clone();

    tokio::task::spawn_blocking(move || write_atomic_blocking(&path, content.as_bytes()))
        .await
        .map_err(|e| Error::io(target.display(), io::Error::other(e)))?
}

fn write_atomic_blocking(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);

    let written = std::fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(map_io(&temp_path, e));
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(map_io(path, e));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn map_io(path: &Path, error: io::Error) -> Error {
    if error.kind() == io::ErrorKind::NotFound {
        Error::ResourceNotFound {
            resource: path.display().to_string(),
        }
    } else {
        Error::io(path.display(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_and_read_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new();
        let path = temp.path().join("arrow.tsx");

        store.write(&path, "export {}").await.unwrap();

        assert_eq!(store.read_to_string(&path).await.unwrap(), "export {}");
        assert!(!temp.path().join("arrow.tsx.tmp").exists());
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("taken.tsx");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "").unwrap();

        let result = LocalStore::new().write(&path, "export {}").await;

        assert!(result.is_err());
        assert!(!temp.path().join("taken.tsx.tmp").exists());
    }

    #[tokio::test]
    async fn test_non_atomic_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::with_options(WriteOptions::default().with_atomic_writes(false));
        let path = temp.path().join("index.ts");

        store.write(&path, "first").await.unwrap();
        store.write(&path, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_list_dir_returns_file_names() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.svg"), "").unwrap();
        std::fs::write(temp.path().join("b.txt"), "").unwrap();

        let mut names = LocalStore::new().list_dir(temp.path()).await.unwrap();
        names.sort();

        assert_eq!(names, vec!["a.svg".to_string(), "b.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = LocalStore::new()
            .list_dir(&temp.path().join("missing"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_write_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let result = LocalStore::new()
            .write(&temp.path().join("nope/arrow.tsx"), "x")
            .await;

        assert!(result.unwrap_err().is_not_found());
        assert!(!temp.path().join("nope").exists());
    }

    #[tokio::test]
    async fn test_create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new();
        let dir = temp.path().join("src/components");

        store.create_dir_all(&dir).await.unwrap();
        store.create_dir_all(&dir).await.unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_temp_path_keeps_full_name() {
        assert_eq!(
            temp_path_for(Path::new("out/index.ts")),
            PathBuf::from("out/index.ts.tmp")
        );
    }
}
