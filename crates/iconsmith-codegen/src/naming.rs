//! Asset name resolution.
//!
//! Turns a discovered file name into the pair of identifiers the rest of
//! the pipeline works with: the validated kebab-case base name and the
//! derived export name. Also detects export names claimed twice, which
//! happens when segments start with a digit (`a-1b` and `a1b` both become
//! `A1bIcon`).

use iconsmith_core::{AssetName, Error, ExportName, GeneratorConfig, Result};
use std::collections::HashMap;

/// Validated identifier pair of one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    base_name: AssetName,
    export_name: ExportName,
}

impl ResolvedName {
    /// Returns the kebab-case base name.
    #[inline]
    #[must_use]
    pub const fn base_name(&self) -> &AssetName {
        &self.base_name
    }

    /// Returns the export identifier.
    #[inline]
    #[must_use]
    pub const fn export_name(&self) -> &ExportName {
        &self.export_name
    }
}

/// Resolves file names into [`ResolvedName`]s.
///
/// # Examples
///
/// ```
/// use iconsmith_codegen::NameResolver;
/// use iconsmith_core::GeneratorConfig;
///
/// let resolver = NameResolver::from_config(&GeneratorConfig::default());
/// let name = resolver.resolve("arrow-left.svg").unwrap();
///
/// assert_eq!(name.base_name().as_str(), "arrow-left");
/// assert_eq!(name.export_name().as_str(), "ArrowLeftIcon");
/// assert!(resolver.resolve("My_Icon.svg").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NameResolver {
    source_suffix: String,
    component_suffix: String,
}

impl NameResolver {
    /// Creates a resolver for the given source suffix (e.g. `.svg`) and
    /// export suffix (e.g. `Icon`).
    #[must_use]
    pub fn new(source_suffix: impl Into<String>, component_suffix: impl Into<String>) -> Self {
        Self {
            source_suffix: source_suffix.into(),
            component_suffix: component_suffix.into(),
        }
    }

    /// Creates a resolver matching a generator configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.source_suffix(), config.component_suffix.clone())
    }

    /// Returns `true` if `file_name` carries the recognized extension.
    ///
    /// The match is exact and case-sensitive: `a.SVG` is not a source asset.
    #[must_use]
    pub fn is_source(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.source_suffix)
    }

    /// Strips the recognized extension from a file name.
    #[must_use]
    pub fn base_name<'n>(&self, file_name: &'n str) -> &'n str {
        file_name
            .strip_suffix(&self.source_suffix)
            .unwrap_or(file_name)
    }

    /// Derives the export name of an arbitrary base name.
    ///
    /// Used for failed assets so their outcome still names a component.
    #[must_use]
    pub fn export_name(&self, base_name: &str) -> ExportName {
        ExportName::from_base(base_name, &self.component_suffix)
    }

    /// Resolves a file name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidName` if the base name is not kebab-case.
    pub fn resolve(&self, file_name: &str) -> Result<ResolvedName> {
        let base_name = AssetName::new(self.base_name(file_name))?;
        let export_name = ExportName::for_asset(&base_name, &self.component_suffix);

        Ok(ResolvedName {
            base_name,
            export_name,
        })
    }
}

/// Tracks which asset claimed each export name.
///
/// The first claimant in discovery order keeps the name.
#[derive(Debug, Default)]
pub struct ExportRegistry {
    claimed: HashMap<ExportName, AssetName>,
}

impl ExportRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the export name of `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NameCollision` if another asset claimed the same
    /// export name first.
    pub fn claim(&mut self, name: &ResolvedName) -> Result<()> {
        if let Some(existing) = self.claimed.get(name.export_name()) {
            return Err(Error::NameCollision {
                name: name.base_name().to_string(),
                existing: existing.to_string(),
                export_name: name.export_name().to_string(),
            });
        }

        self.claimed
            .insert(name.export_name().clone(), name.base_name().clone());
        Ok(())
    }

    /// Returns the number of claimed names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Returns `true` if nothing has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconsmith_core::ErrorKind;

    fn resolver() -> NameResolver {
        NameResolver::new(".svg", "Icon")
    }

    #[test]
    fn test_resolve_boundaries() {
        let r = resolver();
        assert_eq!(r.resolve("my-icon.svg").unwrap().export_name().as_str(), "MyIconIcon");
        assert_eq!(r.resolve("a.svg").unwrap().export_name().as_str(), "AIcon");
        assert_eq!(r.resolve("2x-grid.svg").unwrap().export_name().as_str(), "2xGridIcon");
    }

    #[test]
    fn test_resolve_rejects_non_kebab() {
        let err = resolver().resolve("My_Icon.svg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert_eq!(
            err.to_string(),
            "Invalid file name: My_Icon. File names must be in kebab-case (e.g., my-icon)"
        );
    }

    #[test]
    fn test_base_name_strips_only_suffix() {
        let r = resolver();
        assert_eq!(r.base_name("arrow-left.svg"), "arrow-left");
        assert_eq!(r.base_name("archive.svg.svg"), "archive.svg");
        assert_eq!(r.base_name("readme"), "readme");
    }

    #[test]
    fn test_is_source_is_case_sensitive() {
        let r = resolver();
        assert!(r.is_source("a.svg"));
        assert!(!r.is_source("a.SVG"));
        assert!(!r.is_source("a.svgz"));
        assert!(!r.is_source("svg"));
    }

    #[test]
    fn test_export_name_for_invalid_base() {
        assert_eq!(resolver().export_name("BadName").as_str(), "BadNameIcon");
    }

    #[test]
    fn test_registry_detects_digit_segment_collision() {
        let r = resolver();
        let mut registry = ExportRegistry::new();

        registry.claim(&r.resolve("a-1b.svg").unwrap()).unwrap();
        let err = registry.claim(&r.resolve("a1b.svg").unwrap()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NameCollision);
        assert!(err.to_string().contains("A1bIcon"));
        assert!(err.to_string().contains("a-1b"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_accepts_distinct_names() {
        let r = resolver();
        let mut registry = ExportRegistry::new();
        assert!(registry.is_empty());

        registry.claim(&r.resolve("arrow-left.svg").unwrap()).unwrap();
        registry.claim(&r.resolve("arrow-right.svg").unwrap()).unwrap();

        assert_eq!(registry.len(), 2);
    }
}
