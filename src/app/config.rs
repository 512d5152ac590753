//! Configuration for the decoder

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum payload bytes kept for one gathered sequence. Further bytes
    /// are discarded until the sequence ends.
    pub max_gather_len: usize,
    /// Accept BEL as an OSC terminator (xterm extension)
    pub osc_bell_terminates: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_gather_len: 65536,
            osc_bell_terminates: true,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: DecoderConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/ansi-decoder/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Reject settings the decoder cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_gather_len == 0 {
            return Err(ConfigError::Invalid(
                "max_gather_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("ansi-decoder"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_gather_len, 65536);
        assert!(config.osc_bell_terminates);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = DecoderConfig {
            max_gather_len: 128,
            osc_bell_terminates: false,
        };
        config.save(&path).unwrap();

        let restored = DecoderConfig::load(&path).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: DecoderConfig = serde_json::from_str(r#"{"max_gather_len": 10}"#).unwrap();
        assert_eq!(config.max_gather_len, 10);
        assert!(config.osc_bell_terminates);
    }

    #[test]
    fn test_config_rejects_zero_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_gather_len": 0}"#).unwrap();

        assert!(matches!(
            DecoderConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_config_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(DecoderConfig::load(&path), Err(ConfigError::Json(_))));
        assert!(matches!(
            DecoderConfig::load(&dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
