//! Error types for userdex
//!
//! All fetch-cycle failures funnel through one enum so the UI can
//! collapse them into a single displayed message.

use thiserror::Error;

/// Main error type for userdex operations
#[derive(Error, Debug)]
pub enum UserdexError {
    #[error("Request to '{0}' failed: {1}")]
    Transport(String, #[source] reqwest::Error),

    #[error("Server responded with status {0}")]
    HttpStatus(u16),

    #[error("Response body is not a user list: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Invalid endpoint URL '{0}'")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for userdex operations
pub type Result<T> = std::result::Result<T, UserdexError>;

impl UserdexError {
    /// The one-line message shown in the error banner.
    ///
    /// The cause taxonomy (transport / status / parse) stays internal;
    /// the user sees a single string either way.
    pub fn display_message(&self) -> String {
        format!("Failed to fetch data: {}", self)
    }
}
