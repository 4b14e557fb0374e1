//! Endpoint configuration with sensible defaults.
//!
//! [`EndpointConfig`] names the remote SPARQL endpoint and bounds every
//! request made against it.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Public endpoint the lookups run against when nothing else is configured.
pub const DEFAULT_ENDPOINT_URL: &str = "http://lod.openlinksw.com/sparql/";

/// Configuration for the remote SPARQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL of the SPARQL endpoint (`http` or `https`).
    pub url: String,
    /// Per-request timeout in seconds. Expiry surfaces as
    /// [`QueryError::Timeout`].
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the crate name and version are
    /// sent.
    pub user_agent: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_owned(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl EndpointConfig {
    /// Create a config for `url` with default timeout and User-Agent.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `url` must parse as an absolute `http`/`https` URL
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.timeout_seconds == 0 {
            return Err(QueryError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.url.trim().is_empty() {
            return Err(QueryError::Config("endpoint url must not be empty".into()));
        }
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| QueryError::Config(format!("endpoint url is invalid: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(QueryError::Config(format!(
                "endpoint url scheme must be http or https, got {}",
                parsed.scheme()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = EndpointConfig::default();
        assert_eq!(config.url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(EndpointConfig::default().validate().is_ok());
    }

    #[test]
    fn with_url_keeps_defaults() {
        let config = EndpointConfig::with_url("https://dbpedia.org/sparql");
        assert_eq!(config.url, "https://dbpedia.org/sparql");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = EndpointConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn empty_url_rejected() {
        let config = EndpointConfig::with_url("  ");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn relative_url_rejected() {
        let config = EndpointConfig::with_url("/sparql");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn non_http_scheme_rejected() {
        let config = EndpointConfig::with_url("ftp://example.org/sparql");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EndpointConfig =
            serde_json::from_str(r#"{"timeout_seconds": 3}"#).expect("deserialize");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.url, DEFAULT_ENDPOINT_URL);
    }
}
