//! Tracker client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Tracker API.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// HTTP transport or body decode error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API token cannot be sent as a header value.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// Pagination headers were missing or malformed.
    #[error("pagination error: {0}")]
    Pagination(String),

    /// A page did not move the offset forward before the reported total.
    #[error("pagination stalled for project {project_id} at offset {offset} of {total}")]
    PaginationStalled {
        project_id: u64,
        offset: u32,
        total: u32,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
