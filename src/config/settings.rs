use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::data::{FileSlot, RecordStore};
use crate::util::paths::{config_path, data_dir};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default storage slot name
pub const DEFAULT_SLOT: &str = "savedData";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the slot file, config and logs
    pub data_dir: PathBuf,
    /// Storage slot name
    pub slot: String,
    /// Pretty-print persisted JSON
    pub pretty: bool,
    /// Input poll interval for the terminal UI
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: data_dir(),
            slot: DEFAULT_SLOT.to_string(),
            pretty: false,
            tick_rate: Duration::from_millis(250),
        }
    }
}

/// TOML representation of the [storage] section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub slot: Option<String>,
    pub pretty: Option<bool>,
}

/// TOML representation of the [ui] section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlUiConfig {
    pub tick_rate_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<TomlStorageConfig>,
    pub ui: Option<TomlUiConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file. A missing or unparsable file
    /// leaves the defaults in place.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let Ok(contents) = fs::read_to_string(path) else {
            return config;
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => config.merge(toml_config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unparsable config file"
                );
            }
        }

        config
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(storage) = toml_config.storage {
            if let Some(slot) = storage.slot.filter(|s| !s.trim().is_empty()) {
                self.slot = slot;
            }
            if let Some(pretty) = storage.pretty {
                self.pretty = pretty;
            }
        }

        if let Some(ui) = toml_config.ui {
            if let Some(ms) = ui.tick_rate_ms {
                self.tick_rate = Duration::from_millis(ms.max(10));
            }
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    /// Slot backing the record store
    pub fn slot(&self) -> FileSlot {
        FileSlot::new(&self.data_dir, self.slot.clone())
    }

    /// Open and load the record store described by this config
    pub fn open_store(&self) -> RecordStore {
        RecordStore::new(self.slot())
            .with_pretty(self.pretty)
            .loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.slot, DEFAULT_SLOT);
        assert!(!config.pretty);
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let parsed: TomlConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        let mut config = Config::default();
        config.merge(parsed);
        assert_eq!(config.slot, DEFAULT_SLOT);
        assert_eq!(config.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_overrides_are_merged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[storage]\nslot = \"staff\"\npretty = true\n\n[ui]\ntick_rate_ms = 100\n",
        )
        .unwrap();

        let config = Config::load_from(&path).with_data_dir(dir.path().to_path_buf());
        assert_eq!(config.slot, "staff");
        assert!(config.pretty);
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert_eq!(config.slot().path(), dir.path().join("staff.json"));
    }

    #[test]
    fn test_garbage_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage\nslot=").unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.slot, DEFAULT_SLOT);
    }
}
