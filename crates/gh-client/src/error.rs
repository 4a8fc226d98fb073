//! Error types for fetching and decoding activity

use thiserror::Error;

/// Errors raised while talking to the remote service
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, TLS failure or an unusable request URI
    #[error("request failed: {0}")]
    Transport(#[source] octocrab::Error),

    /// The service answered with a non-success status
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The response body stream failed
    #[error("failed to read response body: {0}")]
    Body(#[source] octocrab::Error),
}

/// Any failure of a `fetch_public_events` call
#[derive(Error, Debug)]
pub enum ActivityError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Malformed JSON or a schema mismatch
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
