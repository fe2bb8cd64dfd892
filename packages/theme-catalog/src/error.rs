//! Typed errors for the scraping layer.
//!
//! Uses `thiserror` so the aggregator can catch source failures at the
//! call site without caring which kind they are.

use thiserror::Error;

/// Errors that can occur while fetching a marketplace page.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (DNS, connect, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
