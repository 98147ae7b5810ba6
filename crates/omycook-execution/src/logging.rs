//! Tracing subscriber setup.

use omycook_core::{OmycookError, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_level` when set.
///
/// # Errors
///
/// Returns `Config` if `default_level` is not a valid filter directive and
/// `Internal` if a global subscriber is already installed.
pub fn init(default_level: &str) -> Result<()> {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| OmycookError::internal(format!("failed to install subscriber: {}", e)))?;

    tracing::debug!(level = default_level, "Logging initialised");
    Ok(())
}

fn build_filter(env_directive: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    match env_directive {
        Some(directive) if !directive.trim().is_empty() => Ok(EnvFilter::new(directive)),
        _ => EnvFilter::try_new(default_level).map_err(|e| {
            OmycookError::config(format!("invalid log level '{}': {}", default_level, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_used_without_env() {
        let filter = build_filter(None, "debug").unwrap();
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("omycook_core=trace"), "warn").unwrap();
        assert!(filter.to_string().contains("omycook_core"));
    }

    #[test]
    fn test_invalid_default_level() {
        let err = build_filter(None, "omycook=loud").unwrap_err();
        assert!(matches!(err, OmycookError::Config(_)));
    }
}
