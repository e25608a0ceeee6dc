//! Error types for the Sentibot application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Sentibot application.
///
/// Classifier failures, configuration problems and storage errors all funnel
/// into this enum so the presentation shell only has one type to report.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SentibotError {
    /// The message was empty (or whitespace only) and cannot be classified.
    #[error("Cannot classify an empty message")]
    EmptyInput,

    /// The sentiment classifier failed to produce a result.
    #[error("Classifier error ({backend}): {message}")]
    Classifier { backend: String, message: String },

    /// The classifier reported a score that is not a finite number.
    #[error("Classifier returned an invalid score: {0}")]
    InvalidScore(f64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SentibotError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Classifier error for the named backend
    pub fn classifier(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Classifier {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an EmptyInput error
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Check if this error came from the classifier (including bad scores)
    pub fn is_classifier(&self) -> bool {
        matches!(
            self,
            Self::Classifier { .. } | Self::InvalidScore(_) | Self::EmptyInput
        )
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SentibotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SentibotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SentibotError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SentibotError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SentibotError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<String> for SentibotError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, SentibotError>`.
pub type Result<T> = std::result::Result<T, SentibotError>;
