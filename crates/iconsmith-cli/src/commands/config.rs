//! Config command implementation.
//!
//! Manages the `iconsmith.toml` project file. When no file is given with
//! `--config`, `./iconsmith.toml` is used if present and built-in defaults
//! otherwise.

use crate::actions::ConfigAction;
use anyhow::{Context, Result};
use iconsmith_core::GeneratorConfig;
use iconsmith_core::cli::{ExitCode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "iconsmith.toml";

pub use iconsmith_core::MAX_CONCURRENCY;

/// Upper bound for `runtime.timeout_seconds`.
pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Project configuration.
///
/// Every section and key is optional; missing values take the generator
/// defaults.
///
/// # Examples
///
/// ```toml
/// [paths]
/// icons_dir = "icons"
/// components_dir = "src/components"
/// index_path = "src/index.ts"
///
/// [naming]
/// source_extension = "svg"
/// output_extension = "tsx"
/// component_suffix = "Icon"
///
/// [runtime]
/// concurrency = 16
/// timeout_seconds = 30
/// default_size = 24
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// File naming rules
    #[serde(default)]
    pub naming: NamingConfig,

    /// Execution limits and component defaults
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory scanned for source SVG files
    pub icons_dir: PathBuf,

    /// Directory receiving one component per icon
    pub components_dir: PathBuf,

    /// Index location; defaults to `index.ts` beside the components directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,
}

/// File naming rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamingConfig {
    /// Extension of source files, without the dot
    pub source_extension: String,

    /// Extension of generated components, without the dot
    pub output_extension: String,

    /// Suffix appended to every export name
    pub component_suffix: String,
}

/// Execution limits and component defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Maximum number of icons processed at once
    pub concurrency: usize,

    /// Per-icon time limit in seconds
    pub timeout_seconds: u64,

    /// Default `size` prop of generated components
    pub default_size: u32,
}

impl From<&GeneratorConfig> for Config {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            paths: PathsConfig {
                icons_dir: config.icons_dir.clone(),
                components_dir: config.components_dir.clone(),
                index_path: config.index_path.clone(),
            },
            naming: NamingConfig {
                source_extension: config.source_extension.clone(),
                output_extension: config.output_extension.clone(),
                component_suffix: config.component_suffix.clone(),
            },
            runtime: RuntimeConfig {
                concurrency: config.concurrency,
                timeout_seconds: config.asset_timeout.as_secs(),
                default_size: config.default_size,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Config::default().paths
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Config::default().naming
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Config::default().runtime
    }
}

impl Config {
    /// Converts the file representation into a generator configuration.
    #[must_use]
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            icons_dir: self.paths.icons_dir.clone(),
            components_dir: self.paths.components_dir.clone(),
            index_path: self.paths.index_path.clone(),
            source_extension: self.naming.source_extension.clone(),
            output_extension: self.naming.output_extension.clone(),
            component_suffix: self.naming.component_suffix.clone(),
            default_size: self.runtime.default_size,
            concurrency: self.runtime.concurrency,
            asset_timeout: Duration::from_secs(self.runtime.timeout_seconds),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a runtime limit is out of range or the derived
    /// generator configuration is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.runtime.concurrency > MAX_CONCURRENCY {
            anyhow::bail!("runtime.concurrency cannot exceed {MAX_CONCURRENCY}");
        }

        if self.runtime.timeout_seconds > MAX_TIMEOUT_SECONDS {
            anyhow::bail!("runtime.timeout_seconds cannot exceed {MAX_TIMEOUT_SECONDS} seconds");
        }

        self.to_generator_config()
            .validate()
            .context("invalid generator configuration")?;

        Ok(())
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;

        debug!("Saved configuration to {}", path.display());
        Ok(())
    }
}

/// Returns the file `init` writes to.
#[must_use]
pub fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
}

/// Returns the configuration file in effect, if any.
///
/// An explicit path is always returned. Without one, `./iconsmith.toml` is
/// selected when it exists.
#[must_use]
pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        default_path.is_file().then_some(default_path)
    })
}

/// Loads the effective configuration and the file it came from.
///
/// Falls back to the defaults with no source when [`locate`] finds nothing.
///
/// # Errors
///
/// Returns an error if the selected file cannot be read or parsed.
pub fn load_effective(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    match locate(explicit) {
        Some(path) => Ok((Config::load(&path)?, Some(path))),
        None => {
            debug!("No config file found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

/// Initialization result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a file was written
    pub success: bool,
    /// Status message
    pub message: String,
    /// Path of the configuration file
    pub path: String,
}

/// Effective configuration with its origin.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShowResult {
    /// File the values came from, or `defaults`
    pub source: String,
    /// Effective values
    #[serde(flatten)]
    pub config: Config,
}

/// Validation result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidateResult {
    /// Whether the configuration is usable
    pub valid: bool,
    /// File that was checked, or `defaults`
    pub source: String,
    /// Status message
    pub message: String,
}

/// Runs the config command.
///
/// # Arguments
///
/// * `action` - Configuration action to perform
/// * `config_path` - Explicit configuration file from `--config`
/// * `output_format` - Output format (json, text, pretty)
///
/// # Errors
///
/// Returns an error if the file cannot be written or the result cannot be
/// formatted.
///
/// # Examples
///
/// ```no_run
/// use iconsmith_cli::ConfigAction;
/// use iconsmith_cli::commands::config;
/// use iconsmith_core::cli::OutputFormat;
///
/// # #[tokio::main]
/// # async fn main() {
/// let result = config::run(ConfigAction::Show, None, OutputFormat::Json).await;
/// assert!(result.is_ok());
/// # }
/// ```
pub async fn run(
    action: ConfigAction,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Config action: {:?}", action);

    match action {
        ConfigAction::Init { force } => init_config(config_path.as_deref(), force, output_format),
        ConfigAction::Show => show_config(config_path.as_deref(), output_format),
        ConfigAction::Validate => validate_config(config_path.as_deref(), output_format),
    }
}

fn init_config(explicit: Option<&Path>, force: bool, output_format: OutputFormat) -> Result<ExitCode> {
    let path = target_path(explicit);

    let result = if path.exists() && !force {
        InitResult {
            success: false,
            message: "configuration file already exists (use --force to overwrite)".to_string(),
            path: path.display().to_string(),
        }
    } else {
        Config::default().save(&path)?;
        info!("Wrote default configuration to {}", path.display());
        InitResult {
            success: true,
            message: "configuration file created with default values".to_string(),
            path: path.display().to_string(),
        }
    };

    print_result(&result, output_format)?;
    Ok(ExitCode::SUCCESS)
}

fn show_config(explicit: Option<&Path>, output_format: OutputFormat) -> Result<ExitCode> {
    let (config, source) = load_effective(explicit)?;

    let result = ShowResult {
        source: describe_source(source.as_deref()),
        config,
    };

    print_result(&result, output_format)?;
    Ok(ExitCode::SUCCESS)
}

fn validate_config(explicit: Option<&Path>, output_format: OutputFormat) -> Result<ExitCode> {
    let source = locate(explicit);
    let checked = source
        .as_deref()
        .map_or_else(|| Ok(Config::default()), Config::load)
        .and_then(|config| config.validate());

    let (result, exit_code) = match checked {
        Ok(()) => (
            ValidateResult {
                valid: true,
                source: describe_source(source.as_deref()),
                message: "configuration is valid".to_string(),
            },
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            ValidateResult {
                valid: false,
                source: describe_source(source.as_deref()),
                message: format!("{e:#}"),
            },
            ExitCode::INVALID_INPUT,
        ),
    };

    print_result(&result, output_format)?;
    Ok(exit_code)
}

fn describe_source(source: Option<&Path>) -> String {
    source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
}

fn print_result<T: Serialize>(result: &T, output_format: OutputFormat) -> Result<()> {
    let formatted = crate::formatters::format_output(result, output_format)
        .context("failed to format config result")?;
    println!("{formatted}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_generator_defaults() {
        let config = Config::default();
        assert_eq!(config.to_generator_config(), GeneratorConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            icons_dir = "assets/svg"

            [runtime]
            default_size = 16
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.icons_dir, PathBuf::from("assets/svg"));
        assert_eq!(config.paths.components_dir, PathBuf::from("src/components"));
        assert_eq!(config.naming.component_suffix, "Icon");
        assert_eq!(config.runtime.default_size, 16);
        assert_eq!(config.runtime.concurrency, 16);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [runtime]
            concurrency = "many"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_limits() {
        let mut config = Config::default();
        config.runtime.concurrency = MAX_CONCURRENCY + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.runtime.timeout_seconds = MAX_TIMEOUT_SECONDS + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.runtime.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.naming.source_extension = ".svg".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("source extension"));
    }

    #[test]
    fn test_to_generator_config() {
        let mut config = Config::default();
        config.paths.index_path = Some(PathBuf::from("lib/index.ts"));
        config.runtime.timeout_seconds = 5;
        config.naming.component_suffix = "Glyph".to_string();

        let generator = config.to_generator_config();
        assert_eq!(generator.index_path, Some(PathBuf::from("lib/index.ts")));
        assert_eq!(generator.asset_timeout, Duration::from_secs(5));
        assert_eq!(generator.component_suffix, "Glyph");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        let mut config = Config::default();
        config.paths.index_path = Some(PathBuf::from("src/index.ts"));
        config.runtime.concurrency = 4;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_file_omits_unset_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        Config::default().save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[paths]"));
        assert!(content.contains("[runtime]"));
        assert!(!content.contains("index_path"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_load_effective_explicit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[naming]\ncomponent_suffix = \"Svg\"\n").unwrap();

        let (config, source) = load_effective(Some(&path)).unwrap();
        assert_eq!(config.naming.component_suffix, "Svg");
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_load_effective_explicit_must_exist() {
        let dir = TempDir::new().unwrap();
        assert!(load_effective(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_target_path() {
        assert_eq!(target_path(None), PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(
            target_path(Some(Path::new("cfg/icons.toml"))),
            PathBuf::from("cfg/icons.toml")
        );
    }

    #[tokio::test]
    async fn test_run_init_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[runtime]\nconcurrency = 2\n").unwrap();

        let code = run(
            ConfigAction::Init { force: false },
            Some(path.clone()),
            OutputFormat::Json,
        )
        .await
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(Config::load(&path).unwrap().runtime.concurrency, 2);
    }

    #[tokio::test]
    async fn test_run_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[runtime]\nconcurrency = 2\n").unwrap();

        run(
            ConfigAction::Init { force: true },
            Some(path.clone()),
            OutputFormat::Json,
        )
        .await
        .unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[tokio::test]
    async fn test_run_validate_reports_invalid_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[runtime]\nconcurrency = 0\n").unwrap();

        let code = run(ConfigAction::Validate, Some(path), OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(code, ExitCode::INVALID_INPUT);
    }

    #[tokio::test]
    async fn test_run_validate_accepts_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        Config::default().save(&path).unwrap();

        let code = run(ConfigAction::Validate, Some(path), OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_run_show_explicit_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = run(
            ConfigAction::Show,
            Some(dir.path().join("absent.toml")),
            OutputFormat::Json,
        )
        .await;
        assert!(result.is_err());
    }
}
