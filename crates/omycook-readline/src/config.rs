//! Config file lookup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use omycook_core::config::AppConfig;

/// `<config dir>/omycook/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("omycook").join("config.toml"))
}

/// Loads the configuration.
///
/// An explicit path must exist. Otherwise the default location is used when
/// a file is there, and built-in defaults when not.
pub fn resolve(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    match fallback {
        Some(path) if path.is_file() => AppConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        _ => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_path_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chat]\nreply_delay_ms = 1").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let config = resolve(Some(file.path()), Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 1);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve(Some(&dir.path().join("absent.toml")), None).is_err());
    }

    #[test]
    fn test_fallback_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = resolve(None, Some(path)).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_defaults_without_any_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve(None, Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
