//! Built-in SVG optimizer.
//!
//! Prepares raw SVG documents for embedding as JSX: editor cruft is
//! removed, whitespace between tags is collapsed, attributes are renamed to
//! their React spelling, and the root element is wired to the component's
//! `size`, `color`, `ref`, and spread props.
//!
//! The rewriting is regex based and deliberately shallow. It assumes
//! well-formed input as produced by design tools and does not parse XML.

use async_trait::async_trait;
use iconsmith_core::traits::SvgOptimizer;
use iconsmith_core::{Error, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static XML_PROLOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\?xml.*?\?>").expect("valid regex"));

static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE[^>]*>").expect("valid regex"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

static METADATA_ELEMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["metadata", "title", "desc"]
        .iter()
        .map(|tag| {
            Regex::new(&format!(
                r"(?s)<{tag}\b[^>]*/>|<{tag}\b[^>]*>.*?</{tag}\s*>"
            ))
            .expect("valid regex")
        })
        .collect()
});

static EDITOR_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<(?:sodipodi|inkscape):[\w-]+\b[^>]*/>|<(?:sodipodi|inkscape):[\w-]+\b[^>]*>.*?</(?:sodipodi|inkscape):[\w-]+\s*>",
    )
    .expect("valid regex")
});

static EDITOR_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\s+(?:xmlns:(?:sodipodi|inkscape|sketch|serif|dc|cc|rdf)|(?:sodipodi|inkscape|sketch|serif):[\w.-]+)\s*=\s*(?:"[^"]*"|'[^']*')"#,
    )
    .expect("valid regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static INTER_TAG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("valid regex"));

static ATTRIBUTE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)([A-Za-z][\w]*(?:[-:][A-Za-z][\w]*)*)(\s*=\s*["'])"#).expect("valid regex")
});

static ROOT_SVG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b([^>]*?)\s*(/?)>").expect("valid regex"));

static SIZE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(?:width|height)\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("valid regex")
});

/// Regex-based [`SvgOptimizer`] producing JSX-ready markup.
///
/// # Examples
///
/// ```
/// use iconsmith_codegen::DefaultOptimizer;
///
/// let optimizer = DefaultOptimizer::new();
/// let jsx = optimizer
///     .optimize_markup(r#"<svg width="24" height="24" viewBox="0 0 24 24"><path stroke-width="2" d="M0 0"/></svg>"#)
///     .unwrap();
///
/// assert_eq!(
///     jsx,
///     r#"<svg viewBox="0 0 24 24" width={size} height={size} color={color} ref={ref} {...props}><path strokeWidth="2" d="M0 0"/></svg>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptimizer;

impl DefaultOptimizer {
    /// Creates the optimizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Optimizes markup synchronously.
    ///
    /// # Errors
    ///
    /// Returns `Error::OptimizationError` if the input is blank or has no
    /// root `<svg>` element.
    pub fn optimize_markup(&self, content: &str) -> Result<String> {
        if content.trim().is_empty() {
            return Err(optimization_error("empty document"));
        }

        let mut markup = XML_PROLOG.replace_all(content, "").into_owned();
        markup = DOCTYPE.replace_all(&markup, "").into_owned();
        markup = COMMENT.replace_all(&markup, "").into_owned();
        for element in METADATA_ELEMENTS.iter() {
            markup = element.replace_all(&markup, "").into_owned();
        }
        markup = EDITOR_ELEMENT.replace_all(&markup, "").into_owned();
        markup = EDITOR_ATTRIBUTE.replace_all(&markup, "").into_owned();

        markup = WHITESPACE.replace_all(&markup, " ").into_owned();
        markup = INTER_TAG_WHITESPACE.replace_all(&markup, "><").into_owned();
        let markup = markup.trim();

        let renamed = ATTRIBUTE_NAME.replace_all(markup, |caps: &Captures<'_>| {
            format!("{}{}{}", &caps[1], jsx_attribute_name(&caps[2]), &caps[3])
        });

        let Some(root) = ROOT_SVG.captures(&renamed) else {
            return Err(optimization_error("no root <svg> element"));
        };
        let whole = root.get(0).map_or(0..0, |m| m.range());
        let attributes = SIZE_ATTRIBUTE.replace_all(&root[1], "");
        let closing = if root[2].is_empty() { ">" } else { " />" };

        let mut output = String::with_capacity(renamed.len() + 64);
        output.push_str(&renamed[..whole.start]);
        output.push_str("<svg");
        output.push_str(&attributes);
        output.push_str(" width={size} height={size} color={color} ref={ref} {...props}");
        output.push_str(closing);
        output.push_str(&renamed[whole.end..]);

        Ok(output)
    }
}

#[async_trait]
impl SvgOptimizer for DefaultOptimizer {
    async fn optimize(&self, content: &str) -> Result<String> {
        self.optimize_markup(content)
    }
}

/// Maps an SVG attribute name to its JSX spelling.
fn jsx_attribute_name(name: &str) -> String {
    match name {
        "class" => return "className".to_string(),
        "for" => return "htmlFor".to_string(),
        _ => {}
    }

    // JSX keeps these hyphenated
    if name.starts_with("data-") || name.starts_with("aria-") {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' || c == ':' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

fn optimization_error(message: &str) -> Error {
    Error::OptimizationError {
        message: message.to_string(),
    }
}
