//! Integration tests for foundation-config

use foundation_config::*;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "reconcile_policy: strict\nprefix:\n  separator: \" > \"\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_file(&path).unwrap();

    assert_eq!(manager.get::<String>("reconcile_policy").unwrap(), "strict");
    assert!(manager.has("prefix"));
}

#[test]
fn test_load_malformed_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "prefix: [unclosed\n").unwrap();

    let manager = ConfigManager::new();
    let err = manager.load_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { format: FileFormat::Yaml, .. }));
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "greeting = \"from file\"\n").unwrap();

    unsafe {
        env::set_var("FOUNDATION_ITEST_GREETING", "from env");
    }

    let manager = ConfigManager::with_prefix("FOUNDATION_ITEST");
    manager.load_file(&path).unwrap();
    manager.load_env();

    assert_eq!(manager.get::<String>("greeting").unwrap(), "from env");

    unsafe {
        env::remove_var("FOUNDATION_ITEST_GREETING");
    }
}

#[test]
fn test_env_loader_with_prefix() {
    let loader = EnvLoader::new(Some("FOUNDATION_ITEST2".to_string()));

    unsafe {
        env::set_var("FOUNDATION_ITEST2_LOG_LEVEL", "debug");
    }

    let vars = loader.load();
    assert_eq!(vars.get("log_level").map(String::as_str), Some("debug"));

    unsafe {
        env::remove_var("FOUNDATION_ITEST2_LOG_LEVEL");
    }
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::KeyNotFound("reconcile_policy".to_string());
    assert!(err.to_string().contains("reconcile_policy"));
}
