//! SPARQL-over-HTTP endpoint, queried with GET and answered in Turtle.

use crate::config::EndpointConfig;
use crate::endpoint::GraphEndpoint;
use crate::error::QueryError;
use crate::http::{build_client, TURTLE_MEDIA_TYPE};

/// A remote SPARQL endpoint reached over HTTP.
///
/// Holds one [`reqwest::Client`] for its whole lifetime; clone the
/// endpoint (or share it behind an `Arc`) rather than building a new one
/// per request.
#[derive(Debug, Clone)]
pub struct SparqlEndpoint {
    client: reqwest::Client,
    url: String,
}

impl SparqlEndpoint {
    /// Validate `config` and build an endpoint with its own client.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Config`] if the config is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &EndpointConfig) -> Result<Self, QueryError> {
        config.validate()?;
        let client = build_client(config)?;
        Ok(Self::with_client(client, config.url.clone()))
    }

    /// Build an endpoint around an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl GraphEndpoint for SparqlEndpoint {
    async fn select(&self, sparql: &str) -> Result<String, QueryError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("query", sparql), ("format", TURTLE_MEDIA_TYPE)])
            .header(reqwest::header::ACCEPT, TURTLE_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.url, error = %e, "SPARQL request failed");
                QueryError::from_transport(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.url, %status, "SPARQL endpoint returned error status");
            return Err(QueryError::RemoteQueryFailed(format!(
                "endpoint returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::from_transport(&e))?;
        tracing::debug!(endpoint = %self.url, bytes = body.len(), "SPARQL response received");
        Ok(body)
    }

    fn describe(&self) -> &str {
        &self.url
    }
}
