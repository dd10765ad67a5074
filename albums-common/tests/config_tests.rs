//! Configuration file resolution and loading
//!
//! Tests that touch ALBUMS_CONFIG are marked #[serial] so they never
//! observe each other's environment changes.

use albums_common::config::{resolve_config_path, ConfigSource, ServiceConfig, CONFIG_ENV_VAR};
use albums_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Should write config file");
    path
}

#[test]
#[serial]
fn test_env_var_used_when_no_cli_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = 5050\n");
    env::set_var(CONFIG_ENV_VAR, &path);

    assert_eq!(resolve_config_path(None), ConfigSource::Explicit(path.clone()));
    let config = ServiceConfig::load(None).unwrap();
    assert_eq!(config.port, 5050);

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_cli_path_beats_env_var() {
    let dir = TempDir::new().unwrap();
    let cli_path = write_config(&dir, "port = 6060\n");
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/albums.toml");

    let config = ServiceConfig::load(Some(&cli_path)).unwrap();
    assert_eq!(config.port, 6060);

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");

    let err = ServiceConfig::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
#[serial]
fn test_malformed_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = [1, 2]\n");

    let err = ServiceConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
#[serial]
fn test_full_file_round_trips_all_fields() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "host = \"0.0.0.0\"\nport = 8081\nlog_level = \"debug\"\n",
    );

    let config = ServiceConfig::load(Some(&path)).unwrap();
    assert_eq!(
        config,
        ServiceConfig {
            host: "0.0.0.0".to_string(),
            port: 8081,
            log_level: "debug".to_string(),
        }
    );
}

#[test]
#[serial]
fn test_empty_env_var_falls_back_to_default_location() {
    env::set_var(CONFIG_ENV_VAR, "");
    let source = resolve_config_path(None);
    assert!(matches!(source, ConfigSource::Default(_) | ConfigSource::None));
    env::remove_var(CONFIG_ENV_VAR);
}
