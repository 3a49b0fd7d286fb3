//! Error types for the quizbank admin panel

use thiserror::Error;

/// Main error type for the admin panel
///
/// Backend failures come in two flavours: application-level failures, where the
/// backend answered `{"success": false, "error": ...}` and the message is shown
/// verbatim, and transport-level failures (connection problems, non-JSON bodies).
#[derive(Debug, Error)]
pub enum Error {
    /// The backend could not be reached or answered with an unexpected status
    #[error("{0}")]
    Transport(String),

    /// The backend rejected the request with a human-readable message
    #[error("{0}")]
    Api(String),

    /// The backend answered with a body that is not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Input rejected before anything was sent to the backend
    #[error("{message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Not found error
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Resource that was not found
        resource: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the failure happened below the application protocol
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
