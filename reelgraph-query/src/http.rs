//! Shared HTTP client for SPARQL endpoint requests.
//!
//! One [`reqwest::Client`] is built per endpoint and reused for every
//! query, so connection pooling and the timeout apply across requests.

use crate::config::EndpointConfig;
use crate::error::QueryError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("reelgraph-query/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the endpoint for SELECT results.
pub const TURTLE_MEDIA_TYPE: &str = "text/turtle";

/// Build a [`reqwest::Client`] configured for SPARQL requests.
///
/// The client has:
/// - Timeout from config
/// - Custom User-Agent if configured, otherwise [`DEFAULT_USER_AGENT`]
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`QueryError::Config`] if the client cannot be constructed.
pub fn build_client(config: &EndpointConfig) -> Result<reqwest::Client, QueryError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| QueryError::Config(format!("failed to build HTTP client: {e}")))
}
