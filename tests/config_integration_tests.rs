//! Integration tests for ConfigManager and configuration file handling
//!
//! These tests verify:
//! - Configuration loading with defaults for a missing file
//! - Partial files falling back to defaults per field
//! - Loaded configuration feeding FilterState and the custom allow list

use camino::Utf8PathBuf;
use easy_unnote::{ConfigManager, FilterState, UnnoteConfig};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
}

#[test]
fn test_creates_missing_config_directory() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let nested = config_path.join("Easy Unnote Data");

    let manager = ConfigManager::new(&nested).unwrap();

    assert!(nested.exists());
    assert_eq!(manager.load_config().unwrap(), UnnoteConfig::default());
}

#[test]
fn test_load_full_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(
        manager.config_path(),
        r#"
enable_ge_booths: true
enable_tables: true
custom_unnote_list: "Magic sack, Deposit box"
"#,
    )
    .unwrap();

    let config = manager.load_config().unwrap();

    assert!(config.enable_ge_booths);
    assert!(config.enable_tables);
    assert_eq!(config.custom_unnote_list, "Magic sack, Deposit box");
}

#[test]
fn test_partial_config_uses_field_defaults() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(manager.config_path(), "enable_tables: true\n").unwrap();

    let config = manager.load_config().unwrap();

    assert!(config.enable_tables);
    assert!(!config.enable_ge_booths);
    assert!(config.custom_unnote_list.is_empty());
}

#[test]
fn test_invalid_config_is_an_error() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(manager.config_path(), "enable_tables: [not, a, bool]\n").unwrap();

    assert!(manager.load_config().is_err());
}

#[test]
fn test_loaded_config_builds_allow_list() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(
        manager.config_path(),
        "custom_unnote_list: |\n  Magic Sack\n\n  Deposit Box,\n",
    )
    .unwrap();

    let state = FilterState::new(manager.load_config().unwrap());

    assert!(state.allow_list_contains("magic sack"));
    assert!(state.allow_list_contains("DEPOSIT BOX"));
    assert_eq!(state.read(|s| s.allow_list.len()), 2);
}

#[test]
fn test_cleared_custom_list_loads_as_empty() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(
        manager.config_path(),
        "enable_tables: true\ncustom_unnote_list:\n",
    )
    .unwrap();

    let config = manager.load_config().unwrap();

    assert!(config.enable_tables);
    assert!(config.custom_unnote_list.is_empty());
    assert_eq!(FilterState::new(config).read(|s| s.allow_list.len()), 0);
}
