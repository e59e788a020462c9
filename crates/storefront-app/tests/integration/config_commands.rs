//! `storefront config` subcommands against real files.

use storefront_app::cli::ConfigAction;
use storefront_app::config_handlers::handle_config_command;
use storefront_app::AppConfig;
use tempfile::TempDir;

fn run(config: Option<&str>, action: ConfigAction) -> storefront_app::Result<String> {
    let mut out = Vec::new();
    handle_config_command(config, action, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_init_then_get_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path = path.to_str().unwrap();

    let output = run(
        None,
        ConfigAction::Init {
            file: Some(path.to_string()),
            force: false,
        },
    )
    .unwrap();
    assert!(output.contains("Config file created"));

    let loaded = AppConfig::from_file(std::path::Path::new(path)).unwrap();
    assert_eq!(loaded, AppConfig::default());

    let value = run(
        Some(path),
        ConfigAction::Get {
            key: "catalog.timeout_secs".to_string(),
        },
    )
    .unwrap();
    assert_eq!(value.trim(), "10");

    let shown = run(Some(path), ConfigAction::Show).unwrap();
    assert!(shown.contains("[catalog]"));
    assert!(shown.contains("[logging]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

    let err = run(
        None,
        ConfigAction::Init {
            file: Some(path.to_str().unwrap().to_string()),
            force: false,
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("--force"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("debug"));
}

#[test]
fn test_path_reports_explicit_file() {
    let output = run(Some("/nonexistent/storefront.toml"), ConfigAction::Path).unwrap();
    assert!(output.starts_with("/nonexistent/storefront.toml"));
    assert!(output.contains("file does not exist"));
}

#[test]
fn test_show_with_missing_explicit_file_fails() {
    let err = run(Some("/nonexistent/storefront.toml"), ConfigAction::Show).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}
