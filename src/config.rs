// File: src/config.rs
use crate::core::recognition::RecognizerSettings;
use crate::core::types::DifficultyMode;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PRONOUNCE_TRAINER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub mode: DifficultyMode,
    /// Locale used for speech synthesis.
    pub language: String,
    /// Fixed seed for word selection; entropy when absent.
    pub seed: Option<u64>,
    /// Extra words added to the bank at start-up, in order.
    pub custom_words: Vec<String>,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub recognition: RecognizerSettings,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            mode: DifficultyMode::Tolerant,
            language: "en-US".to_string(),
            seed: None,
            custom_words: Vec::new(),
            log_level: "info".to_string(),
            recognition: RecognizerSettings::default(),
        }
    }
}

impl TrainerConfig {
    /// Reads a JSON config; fields not present keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads from `$PRONOUNCE_TRAINER_CONFIG`, else the per-user config dir.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::from_file_or_default(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Resolved config location, if one can be determined.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    let mut path = dirs::config_dir()?;
    path.push("pronounce-trainer");
    path.push("config.json");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "mode": "strict", "custom_words": ["Jalapeño"], "seed": 42 }}"#
        )
        .unwrap();

        let config = TrainerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mode, DifficultyMode::Strict);
        assert_eq!(config.custom_words, vec!["Jalapeño".to_string()]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.language, "en-US");
        assert_eq!(config.recognition, RecognizerSettings::default());
    }

    #[test]
    fn nested_recognition_settings() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "recognition": {{ "language": "en-GB" }} }}"#).unwrap();

        let config = TrainerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.recognition.language, "en-GB");
        assert!(config.recognition.interim_results);
        assert!(!config.recognition.continuous);
        assert_eq!(config.recognition.max_alternatives, 1);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrainerConfig::from_file_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, TrainerConfig::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mode": "lenient" }}"#).unwrap();
        let err = TrainerConfig::from_file_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
