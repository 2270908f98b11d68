// Error types for the script-shelf data layer.
// A closed taxonomy: the presentation layer matches on these kinds (or their
// stable codes) and nothing else.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    /// Credential failed the client-side shape check. Never sent upstream.
    #[error("invalid GitHub token format")]
    InvalidTokenFormat,

    /// GitHub rejected the credential (HTTP 401).
    #[error("invalid or expired GitHub token")]
    InvalidToken,

    /// HTTP 403, or the quota probe reported zero remaining requests.
    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded { reset_at: Option<DateTime<Utc>> },

    /// Any other non-2xx response, carrying the status text.
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Transport-level failure (DNS, connection refused, timeout, bad body).
    #[error("failed to reach GitHub: {0}")]
    Network(#[from] reqwest::Error),

    /// No usable fetch configuration (missing username or repository names).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ShelfError {
    /// Stable machine-readable code surfaced to the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            ShelfError::InvalidTokenFormat => "invalid_token_format",
            ShelfError::InvalidToken => "invalid_token",
            ShelfError::RateLimitExceeded { .. } => "rate_limit_exceeded",
            ShelfError::Api(_) => "api_error",
            ShelfError::Network(_) => "network_error",
            ShelfError::Configuration(_) => "configuration_error",
        }
    }

    /// Whether this failure invalidates an entire batch operation, as opposed
    /// to a single item within it.
    pub fn is_systemic(&self) -> bool {
        matches!(
            self,
            ShelfError::InvalidTokenFormat
                | ShelfError::InvalidToken
                | ShelfError::RateLimitExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
