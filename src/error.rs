//! Error kinds surfaced by the relay.

use thiserror::Error;

/// Result type used throughout the relay.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Failures the relay distinguishes between when talking upstream.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The authorization server rejected the exchange or was unreachable.
    /// By the time this error is observed the stored credential has already
    /// been cleared.
    #[error("Access token refresh failed: {0}")]
    AuthRefresh(String),

    /// A specific upstream read or write failed (network error or non-2xx).
    #[error("Upstream {operation} call failed: {cause}")]
    Upstream {
        operation: &'static str,
        cause: String,
    },

    /// Downloading, decoding or resizing cover art failed.
    #[error("Cover art processing failed: {0}")]
    Image(String),
}

impl RelayError {
    /// Tags a failure with the upstream operation it belongs to.
    pub fn upstream(operation: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Upstream {
            operation,
            cause: cause.to_string(),
        }
    }

    pub fn image(cause: impl std::fmt::Display) -> Self {
        Self::Image(cause.to_string())
    }
}
