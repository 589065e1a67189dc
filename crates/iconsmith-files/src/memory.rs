//! In-memory asset storage.
//!
//! Mirrors the local filesystem closely enough for pipeline tests: listing
//! a directory that was never created fails, and so does writing into one.
//! Paths are compared component-wise exactly as given; no normalization of
//! `..` or symlinks is attempted.

use async_trait::async_trait;
use iconsmith_core::traits::AssetStore;
use iconsmith_core::{Error, Result};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl Tree {
    fn add_dir(&mut self, dir: &Path) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if !self.dirs.insert(ancestor.to_path_buf()) {
                break;
            }
        }
    }

    fn has_dir(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty() || self.dirs.contains(dir)
    }
}

/// In-memory implementation of [`AssetStore`].
///
/// # Examples
///
/// ```
/// use iconsmith_core::traits::AssetStore;
/// use iconsmith_files::MemoryStore;
/// use std::path::Path;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> iconsmith_core::Result<()> {
/// let store = MemoryStore::new();
/// store.create_dir_all(Path::new("out")).await?;
/// store.write(Path::new("out/index.ts"), "export {};").await?;
///
/// assert_eq!(store.file(Path::new("out/index.ts")).await.as_deref(), Some("export {};"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tree: RwLock<Tree>,
    read_only: HashSet<PathBuf>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a pre-populated store.
    #[must_use]
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::new()
    }

    /// Returns the content of a file, if present.
    pub async fn file(&self, path: &Path) -> Option<String> {
        self.tree.read().await.files.get(path).cloned()
    }

    /// Returns `true` if a file exists at `path`.
    pub async fn contains_file(&self, path: &Path) -> bool {
        self.tree.read().await.files.contains_key(path)
    }

    /// Returns `true` if a directory exists at `path`.
    pub async fn contains_dir(&self, path: &Path) -> bool {
        self.tree.read().await.has_dir(path)
    }

    /// Returns all file paths under `dir`, recursively, in sorted order.
    pub async fn files_under(&self, dir: &Path) -> Vec<PathBuf> {
        self.tree
            .read()
            .await
            .files
            .keys()
            .filter(|path| path.starts_with(dir))
            .cloned()
            .collect()
    }

    /// Returns the number of stored files.
    pub async fn file_count(&self) -> usize {
        self.tree.read().await.files.len()
    }
}

#[async_trait]
impl AssetStore for MemoryStore {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<String>> {
        let tree = self.tree.read().await;
        if !tree.has_dir(dir) {
            return Err(Error::ResourceNotFound {
                resource: dir.display().to_string(),
            });
        }

        let children = tree
            .files
            .keys()
            .chain(tree.dirs.iter())
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect::<BTreeSet<_>>();

        Ok(children.into_iter().collect())
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        self.file(path).await.ok_or_else(|| Error::ResourceNotFound {
            resource: path.display().to_string(),
        })
    }

    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.contains(path) {
            return Err(Error::io(
                path.display(),
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }

        let mut tree = self.tree.write().await;
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !tree.has_dir(parent) {
            return Err(Error::ResourceNotFound {
                resource: parent.display().to_string(),
            });
        }
        if tree.dirs.contains(path) {
            return Err(Error::io(
                path.display(),
                io::Error::other("is a directory"),
            ));
        }

        tree.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        let mut tree = self.tree.write().await;
        if tree.files.contains_key(dir) {
            return Err(Error::io(
                dir.display(),
                io::Error::from(io::ErrorKind::AlreadyExists),
            ));
        }
        tree.add_dir(dir);
        Ok(())
    }
}

/// Builder for [`MemoryStore`].
///
/// # Examples
///
/// ```
/// use iconsmith_files::MemoryStore;
///
/// let store = MemoryStore::builder()
///     .add_file("icons/a.svg", "<svg viewBox=\"0 0 1 1\"/>")
///     .add_dir("src")
///     .read_only("src/components/a.tsx")
///     .build();
/// # let _ = store;
/// ```
#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    tree: Tree,
    read_only: HashSet<PathBuf>,
}

impl MemoryStoreBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, creating its parent directories.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.tree.add_dir(parent);
        }
        self.tree.files.insert(path.to_path_buf(), content.into());
        self
    }

    /// Adds an empty directory and its parents.
    #[must_use]
    pub fn add_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.tree.add_dir(dir.as_ref());
        self
    }

    /// Makes every write to `path` fail with a permission error.
    #[must_use]
    pub fn read_only(mut self, path: impl Into<PathBuf>) -> Self {
        self.read_only.insert(path.into());
        self
    }

    /// Builds the store.
    #[must_use]
    pub fn build(self) -> MemoryStore {
        MemoryStore {
            tree: RwLock::new(self.tree),
            read_only: self.read_only,
        }
    }
}
