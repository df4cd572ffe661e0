//! Error types for Voxform.

use thiserror::Error;

/// Primary error type for all Voxform operations.
#[derive(Error, Debug)]
pub enum VoxformError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend answered with `success: false`, optionally carrying a
    /// user-facing message.
    #[error("Generation failed: {}", message.as_deref().unwrap_or("no error message"))]
    Backend { message: Option<String> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl VoxformError {
    /// Create an API error for a non-success HTTP status.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this failure was caught before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The server-supplied message for an application-level failure, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VoxformError>;
