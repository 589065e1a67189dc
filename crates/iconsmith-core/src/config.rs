//! Generator configuration.
//!
//! Controls where source assets are read from, where components and the
//! index are written, how exports are named, and how the concurrent batch
//! is bounded.
//!
//! # Examples
//!
//! ```
//! use iconsmith_core::GeneratorConfig;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.index_path(), PathBuf::from("src/index.ts"));
//!
//! let custom = GeneratorConfig::builder()
//!     .icons_dir("assets/svg")
//!     .concurrency(4)
//!     .asset_timeout(Duration::from_secs(5))
//!     .build();
//! assert_eq!(custom.concurrency, 4);
//! ```

use crate::{AssetName, Error, Result};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Upper bound accepted for [`GeneratorConfig::concurrency`].
pub const MAX_CONCURRENCY: usize = 1024;

/// Default directory holding source SVG files.
pub const DEFAULT_ICONS_DIR: &str = "icons";

/// Default directory receiving generated components.
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components";

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory containing source assets.
    ///
    /// Default: `icons`
    pub icons_dir: PathBuf,

    /// Directory receiving one component file per successful asset.
    ///
    /// Created (with parents) at the start of every run.
    /// Default: `src/components`
    pub components_dir: PathBuf,

    /// Path of the barrel index file.
    ///
    /// If `None`, the index is written next to the components directory
    /// (`<components_dir>/../index.ts`).
    /// Default: None
    pub index_path: Option<PathBuf>,

    /// Recognized source extension, without the leading dot.
    ///
    /// Matching is an exact, case-sensitive suffix match.
    /// Default: `svg`
    pub source_extension: String,

    /// Extension of generated component files, without the leading dot.
    ///
    /// Default: `tsx`
    pub output_extension: String,

    /// Suffix appended to every export identifier.
    ///
    /// Default: `Icon`
    pub component_suffix: String,

    /// Default value of the `size` prop in generated components.
    ///
    /// Default: 24
    pub default_size: u32,

    /// Maximum number of assets processed at the same time.
    ///
    /// Default: 16
    pub concurrency: usize,

    /// Upper bound on the time a single asset may take.
    ///
    /// An asset exceeding it is recorded as a timeout failure.
    /// Default: 30 seconds
    pub asset_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from(DEFAULT_ICONS_DIR),
            components_dir: PathBuf::from(DEFAULT_COMPONENTS_DIR),
            index_path: None,
            source_extension: "svg".to_string(),
            output_extension: "tsx".to_string(),
            component_suffix: "Icon".to_string(),
            default_size: 24,
            concurrency: 16,
            asset_timeout: Duration::from_secs(30),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Returns the effective index path.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::GeneratorConfig;
    /// use std::path::PathBuf;
    ///
    /// let config = GeneratorConfig::builder().components_dir("components").build();
    /// assert_eq!(config.index_path(), PathBuf::from("index.ts"));
    /// ```
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        if let Some(path) = &self.index_path {
            return path.clone();
        }

        self.components_dir
            .parent()
            .map_or_else(|| PathBuf::from("index.ts"), |parent| parent.join("index.ts"))
    }

    /// Returns the module path the index uses to import components.
    ///
    /// The path is relative to the directory holding the index, so a custom
    /// `index_path` still resolves to the generated files.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::GeneratorConfig;
    ///
    /// assert_eq!(GeneratorConfig::default().components_module(), "./components");
    ///
    /// let config = GeneratorConfig::builder().index_path("dist/index.ts").build();
    /// assert_eq!(config.components_module(), "../src/components");
    /// ```
    #[must_use]
    pub fn components_module(&self) -> String {
        let index_path = self.index_path();
        let index_dir = index_path.parent().unwrap_or_else(|| Path::new(""));
        relative_module(index_dir, &self.components_dir)
    }

    /// Returns the file name suffix of source assets, e.g. `.svg`.
    #[must_use]
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.source_extension)
    }

    /// Returns the path of a source asset by file name.
    #[must_use]
    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.icons_dir.join(file_name)
    }

    /// Returns the output path of a generated component.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::{AssetName, GeneratorConfig};
    /// use std::path::PathBuf;
    ///
    /// let config = GeneratorConfig::default();
    /// let name = AssetName::new("arrow-left").unwrap();
    /// assert_eq!(
    ///     config.component_path(&name),
    ///     PathBuf::from("src/components/arrow-left.tsx")
    /// );
    /// ```
    #[must_use]
    pub fn component_path(&self, name: &AssetName) -> PathBuf {
        self.components_dir
            .join(format!("{}.{}", name, self.output_extension))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if:
    /// - Concurrency or the asset timeout is zero
    /// - Concurrency exceeds [`MAX_CONCURRENCY`]
    /// - An extension is empty or starts with a dot
    /// - The component suffix is not an identifier fragment
    /// - The default size is zero
    /// - A directory path is empty
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(config_error("concurrency must be greater than zero"));
        }

        if self.concurrency > MAX_CONCURRENCY {
            return Err(config_error(format!(
                "concurrency cannot exceed {MAX_CONCURRENCY}, got {}",
                self.concurrency
            )));
        }

        if self.asset_timeout.is_zero() {
            return Err(config_error("asset timeout must be greater than zero"));
        }

        for (label, ext) in [
            ("source extension", &self.source_extension),
            ("output extension", &self.output_extension),
        ] {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(config_error(format!(
                    "{label} must be non-empty and given without a leading dot, got '{ext}'"
                )));
            }
        }

        if !self
            .component_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(config_error(format!(
                "component suffix '{}' must contain only ASCII letters, digits, or underscores",
                self.component_suffix
            )));
        }

        if self.default_size == 0 {
            return Err(config_error("default size must be greater than zero"));
        }

        check_dir("icons_dir", &self.icons_dir)?;
        check_dir("components_dir", &self.components_dir)?;

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::ConfigError {
        message: message.into(),
    }
}

/// Builds a `/`-separated import specifier for `to`, relative to `from`.
fn relative_module(from: &Path, to: &Path) -> String {
    let (from, to) = if from.is_absolute() == to.is_absolute() {
        (from.to_path_buf(), to.to_path_buf())
    } else {
        match (std::path::absolute(from), std::path::absolute(to)) {
            (Ok(from), Ok(to)) => (from, to),
            _ => (from.to_path_buf(), to.to_path_buf()),
        }
    };

    let from: Vec<Component<'_>> = from
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let to: Vec<Component<'_>> = to
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let shared = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let segments: Vec<String> = std::iter::repeat_n("..".to_string(), from.len() - shared)
        .chain(
            to[shared..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect();

    match segments.first().map(String::as_str) {
        None => ".".to_string(),
        Some("..") => segments.join("/"),
        Some(_) => format!("./{}", segments.join("/")),
    }
}

fn check_dir(label: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(config_error(format!("{label} cannot be empty")));
    }
    Ok(())
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder seeded with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the source asset directory.
    #[must_use]
    pub fn icons_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.icons_dir = path.into();
        self
    }

    /// Sets the component output directory.
    #[must_use]
    pub fn components_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.components_dir = path.into();
        self
    }

    /// Sets an explicit index file path.
    #[must_use]
    pub fn index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.index_path = Some(path.into());
        self
    }

    /// Sets the recognized source extension.
    #[must_use]
    pub fn source_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.source_extension = ext.into();
        self
    }

    /// Sets the generated file extension.
    #[must_use]
    pub fn output_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.output_extension = ext.into();
        self
    }

    /// Sets the export identifier suffix.
    #[must_use]
    pub fn component_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.component_suffix = suffix.into();
        self
    }

    /// Sets the default `size` prop.
    #[must_use]
    pub const fn default_size(mut self, size: u32) -> Self {
        self.config.default_size = size;
        self
    }

    /// Sets the concurrency limit.
    #[must_use]
    pub const fn concurrency(mut self, limit: usize) -> Self {
        self.config.concurrency = limit;
        self
    }

    /// Sets the per-asset timeout.
    #[must_use]
    pub const fn asset_timeout(mut self, timeout: Duration) -> Self {
        self.config.asset_timeout = timeout;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
