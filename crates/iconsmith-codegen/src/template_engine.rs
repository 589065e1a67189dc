//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in component and
//! index templates pre-registered.
//!
//! # Examples
//!
//! ```
//! use iconsmith_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"exports": [], "components_module": "./components"});
//! let index = engine.render(TemplateEngine::INDEX, &context).unwrap();
//! assert!(index.starts_with("export type { IconProps } from './types';"));
//! ```

use handlebars::Handlebars;
use iconsmith_core::{Error, Result};
use serde::Serialize;

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode with HTML escaping disabled: the output
/// is TypeScript, and markup inserted into components must survive
/// verbatim.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, so one engine can serve every
/// concurrently running asset task.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the per-asset component template.
    pub const COMPONENT: &'static str = "component";

    /// Name of the barrel index template.
    pub const INDEX: &'static str = "index";

    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        engine.register_template_string(
            Self::COMPONENT,
            include_str!("../templates/component.tsx.hbs"),
        )?;
        engine.register_template_string(Self::INDEX, include_str!("../templates/index.ts.hbs"))?;

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if:
    /// - Template name is not registered
    /// - Context is missing a referenced variable
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: e.to_string(),
            })
    }

    /// Registers a custom template, replacing any template of that name.
    ///
    /// Lets callers override the built-in component or index layout.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconsmith_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string(
    ///     "custom",
    ///     "// Custom template: {{name}}"
    /// ).unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("registration failed: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
