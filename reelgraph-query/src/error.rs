//! Error types for the reelgraph-query crate.
//!
//! Messages are stable strings suitable for display to users. Query text
//! never appears in an error message.

/// Errors that can occur while building or running a graph query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The remote endpoint could not be reached, answered with a non-2xx
    /// status, or returned an unreadable body.
    #[error("remote query failed: {0}")]
    RemoteQueryFailed(String),

    /// The remote endpoint did not answer within the configured timeout.
    #[error("remote query timed out: {0}")]
    Timeout(String),

    /// A user-supplied value cannot be bound into a query.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid endpoint configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl QueryError {
    /// Map a transport error from the HTTP client, separating timeouts from
    /// every other failure.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::RemoteQueryFailed(err.to_string())
        }
    }
}

/// Convenience type alias for reelgraph-query results.
pub type Result<T> = std::result::Result<T, QueryError>;
