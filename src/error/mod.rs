//! Error types for the Clawsino client.

pub mod category;

pub use category::ErrorCategory;

use thiserror::Error;

/// Uniform error returned by every client operation.
///
/// Server-side failures keep the HTTP status and the response body verbatim
/// in `message`.
#[derive(Error, Debug)]
pub enum ClawsinoError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication failed (status {status}): {message}. Run the device flow again to obtain a new session token")]
    Authentication { status: u16, message: String },

    #[error("Request rejected (status {status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response (status {status}): {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("A session token is required for {operation}")]
    MissingToken { operation: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClawsinoError {
    /// Build the error for a non-2xx response.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        match status {
            401 => Self::Authentication { status, message },
            400..=499 => Self::Validation { status, message },
            500..=599 => Self::Server { status, message },
            _ => Self::UnexpectedStatus { status, message },
        }
    }

    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication { .. } | Self::MissingToken { .. } => {
                ErrorCategory::Authentication
            }
            Self::Validation { .. } | Self::InvalidArgument(_) => ErrorCategory::Validation,
            Self::Network(_) => ErrorCategory::Network,
            Self::Server { .. } => ErrorCategory::Server,
            Self::Serialization(_) | Self::InvalidResponse(_) => ErrorCategory::Serialization,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::UnexpectedStatus { .. } => ErrorCategory::Unknown,
        }
    }

    /// Whether the caller should re-run the device flow.
    pub fn needs_reauthentication(&self) -> bool {
        self.category() == ErrorCategory::Authentication
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ClawsinoError>;
