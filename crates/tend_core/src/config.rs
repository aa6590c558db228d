//! Storage location resolution.
//!
//! Config file: ~/.config/tend/config.toml (optional). The config is
//! ambience, never load-bearing: any failure falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Environment override for the data directory, mainly for tests and
/// throwaway profiles.
pub const DATA_DIR_ENV: &str = "TEND_DATA_DIR";

/// Optional user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TendConfig {
    /// Where the state blob lives. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl TendConfig {
    /// Default user config path: ~/.config/tend/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tend").join("config.toml"))
    }

    /// Load the config file if present; defaults otherwise. A file
    /// that fails to parse is reported and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::user_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring unparseable {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Resolve the data directory: env override, then config file, then
/// the platform default (~/.local/share/tend on Linux).
pub fn data_dir(config: &TendConfig) -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Some(dir) = &config.data_dir {
        return dir.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tend")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_data_dir_override() {
        let config = TendConfig {
            data_dir: Some(PathBuf::from("/tmp/tend-test")),
        };
        // Env wins over config only when set; don't touch the process
        // env here, just check the config branch.
        if std::env::var(DATA_DIR_ENV).is_err() {
            assert_eq!(data_dir(&config), PathBuf::from("/tmp/tend-test"));
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config: TendConfig = toml::from_str("").unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let config = TendConfig {
            data_dir: Some(PathBuf::from("/var/lib/tend")),
        };
        let toml_string = toml::to_string(&config).unwrap();
        let parsed: TendConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
    }
}
