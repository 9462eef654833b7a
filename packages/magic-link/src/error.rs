//! Error types for the magic link handler.
//!
//! The `Display` text of each variant is what the user sees: it is appended to
//! the current page URL as the `error` query parameter.

use thiserror::Error;

/// Result type for magic link operations.
pub type Result<T> = std::result::Result<T, MagicLinkError>;

/// Magic link errors.
#[derive(Debug, Error)]
pub enum MagicLinkError {
    /// One or more required values were absent; raised before any request is sent.
    /// `missing` holds the wire names (`email`, `provider`, `callbackUrl`, `challenge`).
    #[error("Missing required parameters: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },

    /// Network failure (`status` is `None`) or non-2xx response.
    #[error("{message}")]
    Transport {
        message: &'static str,
        status: Option<u16>,
        detail: String,
    },

    /// 2xx response whose body is not JSON
    #[error("Failed to parse magic link response")]
    Parse { detail: String },

    /// The page URL cannot anchor the relative endpoints
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MagicLinkError {
    /// HTTP status carried by a transport error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            MagicLinkError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
