// src/error.rs

//! Unified error handling for the watcher application.

use std::fmt;

use thiserror::Error;

/// Result type alias for watcher operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Propagation policy:
/// - `Upstream` and `Storage` abort the whole run (no partial delta can be
///   trusted without the full filing list and the full archive inventory).
/// - `Fetch` and `StorageWrite` are scoped to a single filing; the run skips
///   that filing and continues.
/// - `Delivery` is logged and swallowed per recipient.
#[derive(Error, Debug)]
pub enum AppError {
    /// Filing API unreachable or returned a malformed response
    #[error("filing API error: {0}")]
    Upstream(String),

    /// Archive inventory listing failed
    #[error("archive listing error: {0}")]
    Storage(String),

    /// Source document download failed
    #[error("document fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    /// Archive write failed
    #[error("archive write error for {key}: {message}")]
    StorageWrite { key: String, message: String },

    /// Email provider rejected a send
    #[error("email delivery error: {0}")]
    Delivery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create an upstream (filing API) error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Create an archive listing error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a document fetch error for a source URL.
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create an archive write error for a key.
    pub fn storage_write(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::StorageWrite {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create an email delivery error.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_carries_url() {
        let err = AppError::fetch("https://x/a.pdf", "timed out");
        assert!(err.to_string().contains("https://x/a.pdf"));
        assert!(err.to_string().contains("timed out"));
    }
}
