//! Configuration types for the reelgraph web front end.

use reelgraph_query::EndpointConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "REELGRAPH_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Remote SPARQL endpoint settings.
    pub endpoint: EndpointConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind (`0` picks a free port).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Returns the default config file path: `~/.config/reelgraph/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("reelgraph").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("reelgraph")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/reelgraph-config/config.toml")
        }
    }

    /// Resolve the config the server should run with.
    ///
    /// Uses the file named by [`CONFIG_ENV_VAR`] if set, else the default
    /// path if it exists, else built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        let default_path = Self::default_config_path();
        if default_path.is_file() {
            return Self::from_file(&default_path);
        }
        Ok(Self::default())
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for an empty host or an invalid
    /// endpoint section.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::Config("server.host must not be empty".into()));
        }
        self.endpoint
            .validate()
            .map_err(|e| AppError::Config(format!("endpoint: {e}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.endpoint.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_file_reads_every_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[endpoint]
url = "https://dbpedia.org/sparql"
timeout_seconds = 20
user_agent = "reelgraph-test"
"#,
        )
        .unwrap();

        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded.server.host, "0.0.0.0");
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(loaded.endpoint.url, "https://dbpedia.org/sparql");
        assert_eq!(loaded.endpoint.timeout_seconds, 20);
        assert_eq!(loaded.endpoint.user_agent.as_deref(), Some("reelgraph-test"));
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let toml_str = r#"
[endpoint]
timeout_seconds = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.timeout_seconds, 3);
        assert_eq!(config.endpoint.url, reelgraph_query::config::DEFAULT_ENDPOINT_URL);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.endpoint.timeout_seconds = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn validate_rejects_empty_host() {
        let mut config = AppConfig::default();
        config.server.host = " ".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn default_config_path_ends_with_reelgraph_config() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with("reelgraph/config.toml"));
    }
}
