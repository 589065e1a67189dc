//! Strong domain types for iconsmith.
//!
//! Newtypes keep validated asset names apart from arbitrary strings and make
//! the derived export identifier impossible to confuse with its source.
//!
//! # Examples
//!
//! ```
//! use iconsmith_core::{AssetName, ExportName};
//!
//! let name = AssetName::new("arrow-left").unwrap();
//! let export = ExportName::for_asset(&name, "Icon");
//! assert_eq!(export.as_str(), "ArrowLeftIcon");
//! ```

use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Validated kebab-case asset base name.
///
/// One or more lowercase alphanumeric segments joined by single hyphens,
/// with no leading, trailing, or doubled hyphens.
///
/// # Examples
///
/// ```
/// use iconsmith_core::AssetName;
///
/// assert!(AssetName::new("my-icon").is_ok());
/// assert!(AssetName::new("a").is_ok());
/// assert!(AssetName::new("My_Icon").is_err());
/// assert!(AssetName::new("double--hyphen").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetName(String);

impl AssetName {
    /// Creates a validated asset name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidName` carrying the offending name if it is not
    /// kebab-case.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if KEBAB_CASE.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidName { name })
        }
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the hyphen-delimited segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::AssetName;
    ///
    /// let name = AssetName::new("chevron-down-2").unwrap();
    /// assert_eq!(name.segments().collect::<Vec<_>>(), ["chevron", "down", "2"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('-')
    }

    /// Consumes the name and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AssetName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AssetName> for String {
    fn from(name: AssetName) -> Self {
        name.0
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Public symbol name of a generated component.
///
/// Derived from a base name by uppercasing the first character of every
/// hyphen segment, concatenating the segments, and appending a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportName(String);

impl ExportName {
    /// Derives the export name of a validated asset.
    #[must_use]
    pub fn for_asset(name: &AssetName, suffix: &str) -> Self {
        Self::from_base(name.as_str(), suffix)
    }

    /// Derives an export name from any base name.
    ///
    /// Total over arbitrary input so failed assets still report the name
    /// they would have been exported under.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_core::ExportName;
    ///
    /// assert_eq!(ExportName::from_base("my-icon", "Icon").as_str(), "MyIconIcon");
    /// assert_eq!(ExportName::from_base("a", "Icon").as_str(), "AIcon");
    /// assert_eq!(ExportName::from_base("BadName", "Icon").as_str(), "BadNameIcon");
    /// ```
    #[must_use]
    pub fn from_base(base_name: &str, suffix: &str) -> Self {
        let mut result = String::with_capacity(base_name.len() + suffix.len());

        for segment in base_name.split('-') {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.push_str(chars.as_str());
            }
        }

        result.push_str(suffix);
        Self(result)
    }

    /// Returns the export name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExportName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
