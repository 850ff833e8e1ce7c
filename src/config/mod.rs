//! Configuration management.

use crate::scoring::ScoreMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for prio.
#[derive(Debug, Clone)]
pub struct PrioConfig {
    /// Path to the data directory holding the persisted entries.
    pub data_dir: PathBuf,
    /// Scoring mode used when no `--mode` flag is given.
    pub default_mode: ScoreMode,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// Default scoring mode.
    pub default_mode: Option<String>,
}

impl Default for PrioConfig {
    fn default() -> Self {
        let data_dir = directories::ProjectDirs::from("", "", "prio")
            .map_or_else(|| PathBuf::from(".prio"), |dirs| dirs.data_dir().to_path_buf());

        Self {
            data_dir,
            default_mode: ScoreMode::Rice,
        }
    }
}

impl PrioConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::default().merged(file))
    }

    /// Loads configuration from the default location with environment
    /// overrides applied.
    ///
    /// Reads `config.toml` from the data directory when present; a missing
    /// or malformed file leaves the defaults in place. `PRIO_DATA_DIR`
    /// overrides the data directory last.
    #[must_use]
    pub fn load_default() -> Self {
        let mut config = Self::default();

        let config_path = config.data_dir.join("config.toml");
        if let Ok(contents) = std::fs::read_to_string(&config_path) {
            match toml::from_str::<ConfigFile>(&contents) {
                Ok(file) => config = config.merged(file),
                Err(e) => {
                    tracing::warn!(path = %config_path.display(), error = %e, "ignoring malformed config file");
                }
            }
        }

        if let Ok(dir) = std::env::var("PRIO_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }

        config
    }

    fn merged(mut self, file: ConfigFile) -> Self {
        if let Some(dir) = file.data_dir {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(mode) = file.default_mode {
            if let Ok(mode) = mode.parse() {
                self.default_mode = mode;
            }
        }
        self
    }

    /// Returns the path of the persisted record list entry.
    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join("records.json")
    }

    /// Returns the path of the persisted PRD entry.
    #[must_use]
    pub fn prd_path(&self) -> PathBuf {
        self.data_dir.join("prd.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_rice() {
        let config = PrioConfig::default();
        assert_eq!(config.default_mode, ScoreMode::Rice);
    }

    #[test]
    fn test_merged_overrides() {
        let file = ConfigFile {
            data_dir: Some("/tmp/prio-test".to_string()),
            default_mode: Some("ice".to_string()),
        };

        let config = PrioConfig::default().merged(file);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/prio-test"));
        assert_eq!(config.default_mode, ScoreMode::Ice);
    }

    #[test]
    fn test_merged_ignores_bad_mode() {
        let file = ConfigFile {
            data_dir: None,
            default_mode: Some("wsjf".to_string()),
        };

        let config = PrioConfig::default().merged(file);
        assert_eq!(config.default_mode, ScoreMode::Rice);
    }

    #[test]
    fn test_entry_paths() {
        let config = PrioConfig {
            data_dir: PathBuf::from("/data"),
            default_mode: ScoreMode::Rice,
        };
        assert_eq!(config.records_path(), PathBuf::from("/data/records.json"));
        assert_eq!(config.prd_path(), PathBuf::from("/data/prd.json"));
    }
}
