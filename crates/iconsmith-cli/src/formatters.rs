//! Output formatters for CLI commands.
//!
//! Every command renders through these helpers so that `--format json`,
//! `--format text` and `--format pretty` behave the same everywhere.

use anyhow::Result;
use colored::Colorize;
use iconsmith_codegen::GenerationReport;
use iconsmith_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use iconsmith_cli::formatters::format_output;
/// use iconsmith_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Paths {
///     icons_dir: String,
/// }
///
/// let paths = Paths { icons_dir: "icons".to_string() };
///
/// let output = format_output(&paths, OutputFormat::Text)?;
/// assert_eq!(output, "icons_dir: icons");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// Format a generation report.
///
/// JSON keeps the full report. Text prints one tab-separated line per asset
/// followed by a summary line. Pretty prints a colored checklist.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_report(report: &GenerationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(report),
        OutputFormat::Text => Ok(text::report(report)),
        OutputFormat::Pretty => Ok(pretty::report(report)),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{GenerationReport, Result, Serialize};
    use serde_json::Value;

    /// Format data as `key: value` lines.
    ///
    /// Nested keys are joined with dots and array elements by index, so
    /// every line can be matched with `grep`.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, String::new(), &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, prefix: String, lines: &mut Vec<String>) {
        let join = |key: &str| {
            if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            }
        };

        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    flatten(val, join(key), lines);
                }
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    flatten(item, join(&i.to_string()), lines);
                }
            }
            Value::String(s) => lines.push(format!("{prefix}: {s}")),
            Value::Null => lines.push(format!("{prefix}:")),
            other => lines.push(format!("{prefix}: {other}")),
        }
    }

    /// Format a report as `status<TAB>file<TAB>component[<TAB>stage<TAB>message]`
    /// lines and a closing summary.
    pub fn report(report: &GenerationReport) -> String {
        let mut lines: Vec<String> = report
            .outcomes
            .iter()
            .map(|outcome| match outcome.error() {
                None => format!("ok\t{}\t{}", outcome.file_name(), outcome.component_name()),
                Some(error) => format!(
                    "failed\t{}\t{}\t{}\t{}",
                    outcome.file_name(),
                    outcome.component_name(),
                    error.stage(),
                    error.message()
                ),
            })
            .collect();

        lines.push(format!(
            "total={} succeeded={} failed={} index={}",
            report.total,
            report.succeeded,
            report.failed,
            report.index_path.display()
        ));
        lines.join("\n")
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, GenerationReport, Result, Serialize};
    use std::fmt::Write;

    /// Format data as colorized, indented output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        Ok(out.trim_end().to_string())
    }

    fn write_value(out: &mut String, value: &serde_json::Value, indent: usize) {
        use serde_json::Value;

        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    if val.is_object() || val.is_array() {
                        let _ = writeln!(out, "{pad}{}:", key.blue().bold());
                        write_value(out, val, indent + 1);
                    } else {
                        let _ = writeln!(out, "{pad}{}: {}", key.blue().bold(), scalar(val));
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if item.is_object() || item.is_array() {
                        let _ = writeln!(out, "{pad}-");
                        write_value(out, item, indent + 1);
                    } else {
                        let _ = writeln!(out, "{pad}- {}", scalar(item));
                    }
                }
            }
            scalar_value => {
                let _ = writeln!(out, "{pad}{}", scalar(scalar_value));
            }
        }
    }

    fn scalar(value: &serde_json::Value) -> String {
        use serde_json::Value;

        match value {
            Value::Null => "none".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) | Value::Object(_) => value.to_string(),
        }
    }

    /// Format a report as a checklist with a colored summary.
    pub fn report(report: &GenerationReport) -> String {
        let mut out = String::new();

        for outcome in &report.outcomes {
            match outcome.error() {
                None => {
                    let _ = writeln!(
                        out,
                        "  {} {} {}",
                        "✓".green(),
                        outcome.component_name().as_str().bold(),
                        format!("({})", outcome.file_name()).dimmed()
                    );
                }
                Some(error) => {
                    let _ = writeln!(
                        out,
                        "  {} {} {}",
                        "✗".red(),
                        outcome.file_name().bold(),
                        format!("[{}] {}", error.stage(), error.message()).red()
                    );
                }
            }
        }

        if report.outcomes.is_empty() {
            let _ = writeln!(out, "  {}", "no icons found".dimmed());
        }

        let failed = if report.failed == 0 {
            report.failed.to_string().normal()
        } else {
            report.failed.to_string().red().bold()
        };
        let _ = write!(
            out,
            "\n{} {} generated, {} failed in {}ms\n{} {}",
            "Summary:".bold(),
            report.succeeded.to_string().green().bold(),
            failed,
            report.duration_ms,
            "Index:".bold(),
            report.index_path.display()
        );

        out
    }
}
