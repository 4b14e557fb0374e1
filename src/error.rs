//! Error types for the reelgraph web front end.

use axum::http::StatusCode;
use reelgraph_query::QueryError;

/// Top-level error type for page requests and server startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A graph lookup failed or was given an unusable parameter.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request is missing input or carries input that cannot be used.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status shown for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Query(QueryError::InvalidParameter(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Query(QueryError::Timeout(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Query(QueryError::RemoteQueryFailed(_)) => StatusCode::BAD_GATEWAY,
            Self::Query(QueryError::Config(_)) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error type for JSON replies.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::BadRequest(_) | Self::Query(QueryError::InvalidParameter(_)) => {
                "invalid_request_error"
            }
            Self::Query(QueryError::Timeout(_)) => "service_unavailable",
            Self::Query(QueryError::RemoteQueryFailed(_)) => "upstream_error",
            Self::Query(QueryError::Config(_)) | Self::Config(_) | Self::Io(_) => "server_error",
        }
    }

    /// Message safe to show to the person using the site.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Query(QueryError::InvalidParameter(msg)) => format!("Invalid input: {msg}."),
            Self::Query(QueryError::Timeout(_)) => {
                "The knowledge graph did not answer in time. Please try again later.".to_owned()
            }
            Self::Query(QueryError::RemoteQueryFailed(_)) => {
                "The knowledge graph could not be queried right now. Please try again later."
                    .to_owned()
            }
            Self::Query(QueryError::Config(_)) | Self::Config(_) | Self::Io(_) => {
                "Internal server error.".to_owned()
            }
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_service_unavailable() {
        let err = AppError::from(QueryError::Timeout("10s".into()));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_type(), "service_unavailable");
        assert!(err.user_message().contains("did not answer in time"));
    }

    #[test]
    fn remote_failure_maps_to_bad_gateway() {
        let err = AppError::from(QueryError::RemoteQueryFailed("HTTP 500".into()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_type(), "upstream_error");
        assert!(!err.user_message().contains("HTTP 500"));
    }

    #[test]
    fn invalid_parameter_maps_to_bad_request() {
        let err = AppError::from(QueryError::InvalidParameter("identifier is empty".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Invalid input: identifier is empty.");
    }

    #[test]
    fn bad_request_message_is_shown_verbatim() {
        let err = AppError::BadRequest("Please enter a movie title.".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Please enter a movie title.");
        assert_eq!(err.to_string(), "bad request: Please enter a movie title.");
    }

    #[test]
    fn config_error_hides_details() {
        let err = AppError::Config("missing port".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Internal server error.");
    }

    #[test]
    fn query_error_display_is_transparent() {
        let err = AppError::from(QueryError::Timeout("10s".into()));
        assert_eq!(err.to_string(), "remote query timed out: 10s");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppError>();
    }
}
