//! Feed client error types.

/// Errors from the vehicle-position feed clients.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("feed HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// The snapshot document was not valid JSON of the expected shape.
    #[error("failed to parse feed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the mock feed file failed.
    #[error("failed to read mock feed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
