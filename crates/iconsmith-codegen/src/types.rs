//! Types for icon generation.
//!
//! Defines the discovered source asset, the per-asset outcome, the
//! synthesized artifact, the run report, and the template contexts.
//!
//! # Examples
//!
//! ```
//! use iconsmith_codegen::GenerationOutcome;
//! use iconsmith_core::{AssetError, ErrorKind, ExportName, Stage};
//!
//! let ok = GenerationOutcome::succeeded("arrow-left", ExportName::from_base("arrow-left", "Icon"));
//! assert!(ok.success());
//!
//! let failed = GenerationOutcome::failed(
//!     "circle",
//!     ExportName::from_base("circle", "Icon"),
//!     AssetError::new(Stage::Validate, ErrorKind::MissingViewBox, "Missing viewBox in circle"),
//! );
//! assert_eq!(failed.error_message(), Some("Missing viewBox in circle"));
//! ```

use chrono::{DateTime, Utc};
use iconsmith_core::{AssetError, ExportName};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A discovered source file.
///
/// Content is not read at discovery; the pipeline reads it lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    index: usize,
    file_name: String,
}

impl SourceAsset {
    /// Creates an asset at the given discovery position.
    #[must_use]
    pub fn new(index: usize, file_name: impl Into<String>) -> Self {
        Self {
            index,
            file_name: file_name.into(),
        }
    }

    /// Returns the discovery position.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the file name including extension.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Result of processing one asset.
///
/// Either a success without error or a failure with one; the two
/// constructors are the only way to build a value.
///
/// Serializes as `{ "fileName", "componentName", "success", "error"? }`
/// where `error` is the failure message and is omitted on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    file_name: String,
    component_name: ExportName,
    success: bool,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error_message"
    )]
    error: Option<AssetError>,
}

impl GenerationOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn succeeded(file_name: impl Into<String>, component_name: ExportName) -> Self {
        Self {
            file_name: file_name.into(),
            component_name,
            success: true,
            error: None,
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub fn failed(
        file_name: impl Into<String>,
        component_name: ExportName,
        error: AssetError,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            component_name,
            success: false,
            error: Some(error),
        }
    }

    /// Returns the asset base name (file name without extension).
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the export name of the component.
    #[inline]
    #[must_use]
    pub const fn component_name(&self) -> &ExportName {
        &self.component_name
    }

    /// Returns `true` if the component was generated.
    #[inline]
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Returns the structured failure, if any.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<&AssetError> {
        self.error.as_ref()
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(AssetError::message)
    }
}

#[allow(clippy::ref_option)]
fn serialize_error_message<S: Serializer>(
    error: &Option<AssetError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.serialize_str(error.message()),
        None => serializer.serialize_none(),
    }
}

/// A synthesized output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Destination path
    pub path: PathBuf,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the destination path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Summary of a full run, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    /// Wall time of the run in milliseconds
    pub duration_ms: u64,
    /// Path the index was written to
    pub index_path: PathBuf,
    /// Number of discovered assets
    pub total: usize,
    /// Number of generated components
    pub succeeded: usize,
    /// Number of failed assets
    pub failed: usize,
    /// Outcomes in discovery order
    pub outcomes: Vec<GenerationOutcome>,
}

impl GenerationReport {
    /// Builds a report from ordered outcomes.
    #[must_use]
    pub fn new(outcomes: Vec<GenerationOutcome>, index_path: PathBuf, elapsed: Duration) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success()).count();
        Self {
            generated_at: Utc::now(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            index_path,
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            outcomes,
        }
    }

    /// Returns `true` if every asset succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed == 0
    }

    /// Returns the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &GenerationOutcome> {
        self.outcomes.iter().filter(|o| !o.success())
    }

    /// Consumes the report, returning the outcomes.
    #[must_use]
    pub fn into_outcomes(self) -> Vec<GenerationOutcome> {
        self.outcomes
    }
}

/// Context for the component template.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentContext<'a> {
    /// Exported component identifier
    pub export_name: &'a str,
    /// Default value of the `size` prop
    pub default_size: u32,
    /// Optimized markup returned by the component
    pub svg: &'a str,
}

/// Context for the index template.
#[derive(Debug, Clone, Serialize)]
pub struct IndexContext<'a> {
    /// Module path components are imported from, e.g. `./components`
    pub components_module: &'a str,
    /// One entry per generated component
    pub exports: Vec<IndexEntry<'a>>,
}

/// A single re-export in the index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry<'a> {
    /// Exported component identifier
    pub export_name: &'a str,
    /// Component file name without extension
    pub base_name: &'a str,
}
