//! Result and error types for Prevuelo.

use thiserror::Error;

/// Result type for Prevuelo operations
pub type PrevueloResult<T> = Result<T, PrevueloError>;

/// Errors that can occur in Prevuelo
#[derive(Debug, Error)]
pub enum PrevueloError {
    /// A reported status string did not name a known test status
    #[error("Unknown test status: {value}")]
    UnknownStatus {
        /// The rejected status string
        value: String,
    },

    /// Preference persistence failed
    #[error("Preference store error: {message}")]
    Preference {
        /// Error message
        message: String,
    },

    /// Log export failed
    #[error("Log export failed: {message}")]
    Export {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrevueloError {
    /// Create a preference store error
    #[must_use]
    pub fn preference(message: impl Into<String>) -> Self {
        Self::Preference {
            message: message.into(),
        }
    }

    /// Create an export error
    #[must_use]
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}
