//! Error types
//!
//! Storage and API failures are the only real error sources in the console.
//! `ConsoleError` covers the handful of local validation paths.

/// Message shown when the server gives no usable error text
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors raised by a key-value store backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Errors raised while talking to the remote API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Text for the user: the server-provided message when there is one,
    /// the generic fallback otherwise
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Local validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    #[error("Please select at least one application to create a publish task")]
    EmptySelection,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Task not found: {0}")]
    TaskNotFound(String),
}

impl ConsoleError {
    /// Toast title for this error; the description is the display text
    pub fn title(&self) -> &'static str {
        match self {
            ConsoleError::EmptySelection => "No applications selected",
            ConsoleError::PasswordMismatch => "Signup failed",
            ConsoleError::TaskNotFound(_) => "Task not found",
        }
    }
}
