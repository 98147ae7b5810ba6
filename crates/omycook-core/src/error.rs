//! Error types for the omycook application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole omycook workspace.
///
/// Precondition failures (empty input, a blocked wizard step, saving a scan
/// with nothing confirmed) are not errors; they surface as outcome enums.
/// This type covers what is left: bad values, unreadable files and failing
/// capabilities.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum OmycookError {
    /// A value outside its allowed range or vocabulary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An uploaded file that is not an image
    #[error("Unsupported image type: {mime}")]
    UnsupportedImage { mime: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// A response generator or receipt recognizer failed
    #[error("Capability error: {0}")]
    Capability(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OmycookError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an UnsupportedImage error
    pub fn unsupported_image(mime: impl Into<String>) -> Self {
        Self::UnsupportedImage { mime: mime.into() }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Capability error
    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for OmycookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for OmycookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OmycookError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, OmycookError>`.
pub type Result<T> = std::result::Result<T, OmycookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: OmycookError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_toml_conversion() {
        let err: OmycookError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }

    #[test]
    fn test_unsupported_image_message() {
        let err = OmycookError::unsupported_image("text/plain");
        assert_eq!(err.to_string(), "Unsupported image type: text/plain");
    }
}
