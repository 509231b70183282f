use crate::models::UnnoteConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the plugin configuration inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "EasyUnnote.yaml";

/// Prefix for environment variable overrides, e.g. `EASY_UNNOTE_ENABLE_TABLES=true`.
pub const ENV_PREFIX: &str = "EASY_UNNOTE";

/// Configuration manager for reading the plugin settings.
///
/// Settings are layered: defaults, then `EasyUnnote.yaml` (optional), then environment
/// overrides. Writing settings back is left to the host.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing `EasyUnnote.yaml`
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
        })
    }

    /// Load the plugin configuration.
    ///
    /// # Returns
    /// The merged UnnoteConfig; defaults if neither the file nor overrides exist
    pub fn load_config(&self) -> Result<UnnoteConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
        }

        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::new(self.config_path.as_str(), ::config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let config: UnnoteConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!(
            "Loaded config: ge_booths={}, tables={}",
            config.enable_ge_booths,
            config.enable_tables
        );
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_create_config_manager() {
        let (manager, _temp_dir) = create_test_config_manager();
        assert!(manager.config_path().ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();
        let config = manager.load_config().unwrap();
        assert_eq!(config, UnnoteConfig::default());
    }

    #[test]
    fn test_load_multiline_custom_list() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(
            manager.config_path(),
            "enable_ge_booths: true\ncustom_unnote_list: |\n  Magic sack\n  Deposit box\n",
        )
        .unwrap();

        let config = manager.load_config().unwrap();
        assert!(config.enable_ge_booths);
        assert!(!config.enable_tables);
        assert_eq!(config.custom_unnote_list, "Magic sack\nDeposit box\n");
    }
}
