//! Integration tests for environment overrides of the plugin configuration
//!
//! Kept in their own test binary with a single test: the process environment is
//! shared, so setting `EASY_UNNOTE_*` here must not leak into other config tests.

use camino::Utf8PathBuf;
use easy_unnote::ConfigManager;
use std::fs;
use tempfile::TempDir;

const ENABLE_TABLES: &str = "EASY_UNNOTE_ENABLE_TABLES";
const CUSTOM_UNNOTE_LIST: &str = "EASY_UNNOTE_CUSTOM_UNNOTE_LIST";

fn set_env(key: &str, value: &str) {
    // SAFETY: this binary runs a single test, so no other thread reads the environment
    unsafe { std::env::set_var(key, value) };
}

fn remove_env(key: &str) {
    // SAFETY: see set_env
    unsafe { std::env::remove_var(key) };
}

#[test]
fn test_environment_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let manager = ConfigManager::new(&config_path).unwrap();

    // Overrides apply without any file
    set_env(ENABLE_TABLES, "true");
    set_env(CUSTOM_UNNOTE_LIST, "Magic sack,Deposit box");

    let config = manager.load_config();

    remove_env(ENABLE_TABLES);
    remove_env(CUSTOM_UNNOTE_LIST);

    let config = config.unwrap();
    assert!(config.enable_tables);
    assert!(!config.enable_ge_booths);
    assert_eq!(config.custom_unnote_list, "Magic sack,Deposit box");

    // Overrides beat values from the file
    fs::write(
        manager.config_path(),
        "enable_ge_booths: true\nenable_tables: false\ncustom_unnote_list: Bank chest\n",
    )
    .unwrap();

    set_env(ENABLE_TABLES, "true");
    let config = manager.load_config();
    remove_env(ENABLE_TABLES);

    let config = config.unwrap();
    assert!(config.enable_tables);
    assert!(config.enable_ge_booths);
    assert_eq!(config.custom_unnote_list, "Bank chest");

    // Without overrides the file values come back
    let config = manager.load_config().unwrap();
    assert!(!config.enable_tables);
}
