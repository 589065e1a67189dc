//! Error types for iconsmith.
//!
//! Two layers of errors exist:
//!
//! - [`Error`] is the workspace-wide error enum. Run-level failures (missing
//!   input directory, uncreatable output directory, index write failure)
//!   surface to the caller as `Error`.
//! - [`AssetError`] is the structured record of a single asset's failure. It
//!   never escapes the pipeline as an `Err`; it is stored on the asset's
//!   outcome instead.
//!
//! # Examples
//!
//! ```
//! use iconsmith_core::{AssetError, Error, ErrorKind, Stage};
//!
//! let err = Error::MissingViewBox {
//!     name: "circle".to_string(),
//! };
//! assert!(err.is_validation_error());
//!
//! let asset_err = AssetError::from_error(Stage::Validate, &err);
//! assert_eq!(asset_err.kind(), ErrorKind::MissingViewBox);
//! assert_eq!(asset_err.to_string(), "Missing viewBox in circle");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for iconsmith.
///
/// All fallible operations in the workspace return this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation was applied to
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Resource not found error.
    ///
    /// Occurs when a file or directory that must exist does not.
    #[error("Resource not found: {resource}")]
    ResourceNotFound {
        /// Identifier of the missing resource
        resource: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Timeout error.
    ///
    /// Occurs when an operation exceeds its configured timeout limit.
    #[error("Operation timed out after {duration_ms}ms: {operation}")]
    Timeout {
        /// Name of the operation that timed out
        operation: String,
        /// Duration in milliseconds before the timeout fired
        duration_ms: u64,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Asset base name is not kebab-case.
    #[error("Invalid file name: {name}. File names must be in kebab-case (e.g., my-icon)")]
    InvalidName {
        /// The offending base name
        name: String,
    },

    /// Asset content lacks the `viewBox` declaration.
    #[error("Missing viewBox in {name}")]
    MissingViewBox {
        /// Base name of the asset
        name: String,
    },

    /// Two assets resolve to the same export identifier.
    #[error("Export name {export_name} of {name} is already used by {existing}")]
    NameCollision {
        /// Base name of the asset that lost the collision
        name: String,
        /// Base name of the asset that claimed the identifier first
        existing: String,
        /// The contested export identifier
        export_name: String,
    },

    /// SVG optimization failed.
    #[error("SVG optimization failed: {message}")]
    OptimizationError {
        /// Description of the optimization failure
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Template '{template}' failed: {message}")]
    TemplateError {
        /// Name of the template
        template: String,
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Creates an I/O error tagged with the path it concerns.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::Error;
    /// use std::io;
    ///
    /// let err = Error::io("icons/a.svg", io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.is_io_error());
    /// ```
    #[must_use]
    pub fn io(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a resource not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::Error;
    ///
    /// let err = Error::ResourceNotFound {
    ///     resource: "icons".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if this error rejects an asset's name or content.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::Error;
    ///
    /// let err = Error::InvalidName {
    ///     name: "My_Icon".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidName { .. } | Self::MissingViewBox { .. } | Self::NameCollision { .. }
        )
    }

    /// Returns `true` if this is an optimization error.
    #[must_use]
    pub const fn is_optimization_error(&self) -> bool {
        matches!(self, Self::OptimizationError { .. })
    }

    /// Returns the per-asset error classification for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::ResourceNotFound { .. } => ErrorKind::Io,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::MissingViewBox { .. } => ErrorKind::MissingViewBox,
            Self::NameCollision { .. } => ErrorKind::NameCollision,
            Self::OptimizationError { .. } => ErrorKind::Optimization,
            Self::TemplateError { .. } | Self::SerializationError { .. } => ErrorKind::Template,
            Self::ConfigError { .. } | Self::InvalidArgument(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for iconsmith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline step an asset was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Name resolution and collision checks
    Resolve,
    /// Reading the raw source file
    Read,
    /// Content shape validation
    Validate,
    /// SVG optimization
    Optimize,
    /// Component template rendering
    Render,
    /// Persisting the generated component
    Write,
    /// The asset task as a whole (timeouts, panics)
    Execute,
}

impl Stage {
    /// Returns the stage name as used in logs and serialized reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::Read => "read",
            Self::Validate => "validate",
            Self::Optimize => "optimize",
            Self::Render => "render",
            Self::Write => "write",
            Self::Execute => "execute",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a per-asset failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Base name is not kebab-case
    InvalidName,
    /// Export identifier already claimed by another asset
    NameCollision,
    /// Content has no `viewBox`
    MissingViewBox,
    /// Read or write failure
    Io,
    /// Optimizer rejected the content
    Optimization,
    /// Template rendering failed
    Template,
    /// The asset did not settle within the configured timeout
    Timeout,
    /// Unexpected failure (task panic, misconfiguration)
    Internal,
}

/// Structured failure of a single asset.
///
/// Keeps the stage and classification alongside the message so the outcome
/// stays diagnosable after the original error value is dropped. Displays as
/// the bare message.
///
/// # Examples
///
/// ```
/// use iconsmith_core::{AssetError, ErrorKind, Stage};
///
/// let err = AssetError::new(Stage::Optimize, ErrorKind::Optimization, "bad path data");
/// assert_eq!(err.stage(), Stage::Optimize);
/// assert_eq!(err.to_string(), "bad path data");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AssetError {
    stage: Stage,
    kind: ErrorKind,
    message: String,
}

impl AssetError {
    /// Creates a new asset error.
    #[must_use]
    pub fn new(stage: Stage, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            stage,
            kind,
            message: message.into(),
        }
    }

    /// Converts a workspace error raised at `stage` into an asset error.
    #[must_use]
    pub fn from_error(stage: Stage, error: &Error) -> Self {
        Self::new(stage, error.kind(), error.to_string())
    }

    /// Returns the stage the asset failed in.
    #[inline]
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the failure classification.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_message() {
        let err = Error::InvalidName {
            name: "My_Icon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid file name: My_Icon. File names must be in kebab-case (e.g., my-icon)"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidName);
    }

    #[test]
    fn test_missing_view_box_message() {
        let err = Error::MissingViewBox {
            name: "circle".to_string(),
        };
        assert_eq!(err.to_string(), "Missing viewBox in circle");
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_io_error_detection() {
        let err = Error::io(
            "icons",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.is_io_error());
        assert!(!err.is_timeout());
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("icons"));
    }

    #[test]
    fn test_kind_mapping() {
        let timeout = Error::Timeout {
            operation: "arrow".to_string(),
            duration_ms: 10,
        };
        assert_eq!(timeout.kind(), ErrorKind::Timeout);

        let template = Error::TemplateError {
            template: "component".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(template.kind(), ErrorKind::Template);

        let optimize = Error::OptimizationError {
            message: "no root".to_string(),
        };
        assert!(optimize.is_optimization_error());
        assert_eq!(optimize.kind(), ErrorKind::Optimization);
    }

    #[test]
    fn test_asset_error_from_error_keeps_message() {
        let err = Error::NameCollision {
            name: "a1b".to_string(),
            existing: "a-1b".to_string(),
            export_name: "A1bIcon".to_string(),
        };
        let asset_err = AssetError::from_error(Stage::Resolve, &err);

        assert_eq!(asset_err.stage(), Stage::Resolve);
        assert_eq!(asset_err.kind(), ErrorKind::NameCollision);
        assert_eq!(asset_err.message(), err.to_string());
    }

    #[test]
    fn test_asset_error_serialization() {
        let err = AssetError::new(Stage::Write, ErrorKind::Io, "disk full");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["stage"], "write");
        assert_eq!(json["kind"], "io");
        assert_eq!(json["message"], "disk full");
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Optimize.to_string(), "optimize");
        assert_eq!(Stage::Execute.as_str(), "execute");
    }
}
