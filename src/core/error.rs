use std::time::Duration;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Transport failure or non-2xx response without an error body
    #[error("Network error: {0}")]
    Network(String),

    /// Backend did not answer within the configured timeout
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Backend rejected the upload (`{success: false, error}` or `{error}`)
    #[error("{0}")]
    Backend(String),

    /// Local input rejected before reaching the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system errors (reading the upload)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used by presentation consumers to pick an error panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Fetch failed, timed out, or returned a non-2xx status
    Network,
    /// Backend answered with an explicit error message
    BackendValidation,
    /// Anything raised locally (bad input, config, IO)
    Local,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        AppError::Network(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        AppError::Backend(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) | AppError::Timeout(_) | AppError::HttpClient(_) => {
                ErrorKind::Network
            }
            AppError::Backend(_) | AppError::Json(_) => ErrorKind::BackendValidation,
            AppError::Validation(_)
            | AppError::Configuration(_)
            | AppError::Io(_)
            | AppError::Internal(_) => ErrorKind::Local,
        }
    }

    /// Text shown in the inline error panel.
    ///
    /// Backend messages are surfaced verbatim; every transport failure collapses
    /// into the same connection message since retrying means re-uploading.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend(msg) => msg.clone(),
            AppError::Timeout(_) => {
                "Connection error: the analytics server took too long to respond".to_string()
            }
            AppError::Network(_) | AppError::HttpClient(_) => {
                "Connection error with the analytics server".to_string()
            }
            AppError::Json(_) => "The analytics server returned an unreadable response".to_string(),
            other => other.to_string(),
        }
    }
}
