//! Integration tests for the iconsmith CLI.
//!
//! Exercise argument parsing and full command runs against temporary
//! project directories.

use clap::Parser;
use clap_complete::Shell;
use iconsmith_cli::commands::config::{Config, DEFAULT_CONFIG_FILE};
use iconsmith_cli::runner::execute_command;
use iconsmith_cli::{Cli, Commands, ConfigAction};
use iconsmith_core::cli::{ExitCode, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ARROW: &str = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <path stroke-width="2" d="M19 12H5M12 19l-7-7 7-7"/>
</svg>"#;

fn project(dir: &Path) -> PathBuf {
    let mut config = Config::default();
    config.paths.icons_dir = dir.join("icons");
    config.paths.components_dir = dir.join("src/components");
    config.runtime.concurrency = 2;

    let path = dir.join(DEFAULT_CONFIG_FILE);
    config.save(&path).unwrap();
    fs::create_dir_all(dir.join("icons")).unwrap();
    path
}

#[test]
fn test_parse_generate_defaults() {
    let cli = Cli::parse_from(["iconsmith", "generate"]);

    assert!(!cli.verbose);
    assert_eq!(cli.format, "pretty");
    assert_eq!(cli.config, None);
    match cli.command {
        Commands::Generate {
            icons_dir,
            concurrency,
            fail_on_error,
            ..
        } => {
            assert_eq!(icons_dir, None);
            assert_eq!(concurrency, None);
            assert!(!fail_on_error);
        }
        other => panic!("expected Generate, got {other:?}"),
    }
}

#[test]
fn test_parse_generate_overrides() {
    let cli = Cli::parse_from([
        "iconsmith",
        "--format",
        "json",
        "generate",
        "--icons-dir",
        "assets/svg",
        "--components-dir",
        "src/icons",
        "--index-path",
        "src/icons.ts",
        "-j",
        "4",
        "--timeout-secs",
        "10",
        "--size",
        "16",
        "--fail-on-error",
    ]);

    assert_eq!(cli.format, "json");
    match cli.command {
        Commands::Generate {
            icons_dir,
            components_dir,
            index_path,
            concurrency,
            timeout_secs,
            size,
            fail_on_error,
        } => {
            assert_eq!(icons_dir, Some(PathBuf::from("assets/svg")));
            assert_eq!(components_dir, Some(PathBuf::from("src/icons")));
            assert_eq!(index_path, Some(PathBuf::from("src/icons.ts")));
            assert_eq!(concurrency, Some(4));
            assert_eq!(timeout_secs, Some(10));
            assert_eq!(size, Some(16));
            assert!(fail_on_error);
        }
        other => panic!("expected Generate, got {other:?}"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "iconsmith",
        "generate",
        "--verbose",
        "--config",
        "cfg/iconsmith.toml",
    ]);

    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("cfg/iconsmith.toml")));
}

#[test]
fn test_parse_config_actions() {
    let cli = Cli::parse_from(["iconsmith", "config", "init", "--force"]);
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Init { force: true }
        }
    ));

    let cli = Cli::parse_from(["iconsmith", "config", "show"]);
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Show
        }
    ));

    let cli = Cli::parse_from(["iconsmith", "config", "validate"]);
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Validate
        }
    ));
}

#[test]
fn test_parse_completions() {
    let cli = Cli::parse_from(["iconsmith", "completions", "fish"]);
    match cli.command {
        Commands::Completions { shell } => assert_eq!(shell, Shell::Fish),
        other => panic!("expected Completions, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_non_numeric_concurrency() {
    let result = Cli::try_parse_from(["iconsmith", "generate", "-j", "many"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["iconsmith"]).is_err());
}

#[tokio::test]
async fn test_generate_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config_path = project(dir.path());
    fs::write(dir.path().join("icons/arrow-left.svg"), ARROW).unwrap();
    fs::write(dir.path().join("icons/BadName.svg"), ARROW).unwrap();
    fs::write(dir.path().join("icons/notes.txt"), "ignored").unwrap();

    let cli = Cli::parse_from([
        "iconsmith",
        "--format",
        "json",
        "generate",
        "--size",
        "20",
    ]);
    let code = execute_command(cli.command, Some(config_path), OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let component =
        fs::read_to_string(dir.path().join("src/components/arrow-left.tsx")).unwrap();
    assert!(component.contains("export const ArrowLeftIcon = React.forwardRef"));
    assert!(component.contains("size = 20"));
    assert!(component.contains("strokeWidth=\"2\""));
    assert!(!component.contains("<?xml"));

    let index = fs::read_to_string(dir.path().join("src/index.ts")).unwrap();
    assert_eq!(
        index,
        "export type { IconProps } from './types';\n\n\
         export { ArrowLeftIcon } from './components/arrow-left';\n"
    );

    let entries: Vec<_> = fs::read_dir(dir.path().join("src/components"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_generate_fail_on_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let config_path = project(dir.path());
    fs::write(dir.path().join("icons/arrow-left.svg"), ARROW).unwrap();
    fs::write(dir.path().join("icons/circle.svg"), "<svg><circle r=\"4\"/></svg>").unwrap();

    let cli = Cli::parse_from(["iconsmith", "generate", "--fail-on-error"]);
    let code = execute_command(cli.command, Some(config_path), OutputFormat::Text)
        .await
        .unwrap();

    assert_eq!(code, ExitCode::PARTIAL_FAILURE);
    assert!(dir.path().join("src/components/arrow-left.tsx").exists());
    assert!(!dir.path().join("src/components/circle.tsx").exists());
}

#[tokio::test]
async fn test_generate_invalid_override_exit_code() {
    let dir = TempDir::new().unwrap();
    let config_path = project(dir.path());

    let cli = Cli::parse_from(["iconsmith", "generate", "--timeout-secs", "0"]);
    let code = execute_command(cli.command, Some(config_path), OutputFormat::Json)
        .await
        .unwrap();

    assert_eq!(code, ExitCode::INVALID_INPUT);
}

#[tokio::test]
async fn test_config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("conf").join(DEFAULT_CONFIG_FILE);

    let cli = Cli::parse_from(["iconsmith", "config", "init"]);
    let code = execute_command(cli.command, Some(config_path.clone()), OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(Config::load(&config_path).unwrap(), Config::default());

    let cli = Cli::parse_from(["iconsmith", "config", "validate"]);
    let code = execute_command(cli.command, Some(config_path), OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[tokio::test]
async fn test_config_validate_malformed_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&config_path, "[paths\nicons_dir = ").unwrap();

    let cli = Cli::parse_from(["iconsmith", "config", "validate"]);
    let code = execute_command(cli.command, Some(config_path), OutputFormat::Pretty)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::INVALID_INPUT);
}
