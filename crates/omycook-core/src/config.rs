//! Application configuration.
//!
//! Every field has a serde default, so an empty (or absent) file yields the
//! stock timings: 1.5 s for a chat reply, 2.5 s for a receipt scan.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{OmycookError, Result};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NavigationSettings {
    /// Cancel deferred chat replies and scans when their screen is left.
    #[serde(default = "default_true")]
    pub cancel_pending_on_leave: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            cancel_pending_on_leave: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_processing_delay_ms() -> u64 {
    2500
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl AppConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds an empty log level.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat.reply_delay_ms)
    }

    pub fn scan_processing_delay(&self) -> Duration {
        Duration::from_millis(self.scan.processing_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(OmycookError::config("logging.level must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.chat_reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.scan_processing_delay(), Duration::from_millis(2500));
        assert!(config.navigation.cancel_pending_on_leave);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_toml_str(
            r#"
            [chat]
            reply_delay_ms = 10

            [navigation]
            cancel_pending_on_leave = false
            "#,
        )
        .unwrap();
        assert_eq!(config.chat.reply_delay_ms, 10);
        assert_eq!(config.scan.processing_delay_ms, 2500);
        assert!(!config.navigation.cancel_pending_on_leave);
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let err = AppConfig::from_toml_str("[logging]\nlevel = \"  \"").unwrap_err();
        assert!(matches!(err, OmycookError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nprocessing_delay_ms = 5").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.scan_processing_delay(), Duration::from_millis(5));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_io());
    }
}
