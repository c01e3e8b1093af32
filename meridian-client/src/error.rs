//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token rejected
    #[error("Authentication required")]
    Unauthorized,

    /// The user's role does not allow this operation
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the request payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend-side failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
