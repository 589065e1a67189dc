//! Component and index synthesis.
//!
//! Renders the `component` template once per asset and the `index`
//! template once per run.
//!
//! # Examples
//!
//! ```
//! use iconsmith_codegen::ComponentGenerator;
//! use iconsmith_core::ExportName;
//!
//! let generator = ComponentGenerator::new(24).unwrap();
//! let name = ExportName::from_base("arrow-left", "Icon");
//! let code = generator.render_component(&name, "<svg {...props}/>").unwrap();
//!
//! assert!(code.contains("export const ArrowLeftIcon = React.forwardRef"));
//! assert!(code.contains("ArrowLeftIcon.displayName = 'ArrowLeftIcon';"));
//! ```

use crate::template_engine::TemplateEngine;
use crate::types::{ComponentContext, GenerationOutcome, IndexContext, IndexEntry};
use iconsmith_core::{ExportName, Result};

/// Generator for icon component sources.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; the pipeline shares one instance across
/// all asset tasks.
#[derive(Debug)]
pub struct ComponentGenerator<'a> {
    engine: TemplateEngine<'a>,
    default_size: u32,
}

impl ComponentGenerator<'_> {
    /// Creates a generator whose components default `size` to
    /// `default_size`.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new(default_size: u32) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self {
            engine,
            default_size,
        })
    }

    /// Renders the source of one component around optimized markup.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if rendering fails.
    pub fn render_component(&self, export_name: &ExportName, svg: &str) -> Result<String> {
        let context = ComponentContext {
            export_name: export_name.as_str(),
            default_size: self.default_size,
            svg,
        };

        let code = self.engine.render(TemplateEngine::COMPONENT, &context)?;
        tracing::debug!("Rendered component {}", export_name);
        Ok(code)
    }

    /// Renders the index re-exporting every successful outcome.
    ///
    /// Failed outcomes are skipped. Entries keep the order of `outcomes`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if rendering fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_codegen::{ComponentGenerator, GenerationOutcome};
    /// use iconsmith_core::ExportName;
    ///
    /// let generator = ComponentGenerator::new(24).unwrap();
    /// let outcomes = vec![GenerationOutcome::succeeded(
    ///     "arrow-left",
    ///     ExportName::from_base("arrow-left", "Icon"),
    /// )];
    ///
    /// let index = generator.render_index(&outcomes, "./components").unwrap();
    /// assert_eq!(
    ///     index,
    ///     "export type { IconProps } from './types';\n\nexport { ArrowLeftIcon } from './components/arrow-left';\n"
    /// );
    /// ```
    pub fn render_index(
        &self,
        outcomes: &[GenerationOutcome],
        components_module: &str,
    ) -> Result<String> {
        let exports: Vec<IndexEntry<'_>> = outcomes
            .iter()
            .filter(|outcome| outcome.success())
            .map(|outcome| IndexEntry {
                export_name: outcome.component_name().as_str(),
                base_name: outcome.file_name(),
            })
            .collect();

        let export_count = exports.len();
        let context = IndexContext {
            components_module,
            exports,
        };

        let code = self.engine.render(TemplateEngine::INDEX, &context)?;
        tracing::debug!("Rendered index with {} exports", export_count);
        Ok(code)
    }

    /// Returns the default `size` baked into components.
    #[must_use]
    pub const fn default_size(&self) -> u32 {
        self.default_size
    }
}
