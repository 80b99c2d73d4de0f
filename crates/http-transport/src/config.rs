//! Connection settings for [`HttpTransport`](crate::HttpTransport).
//!
//! Loaded from the `[transport]` table of a TOML file or built in code. Every
//! field has a default, so an empty table is a valid configuration pointing at
//! a local node.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected shape.
    #[error("Failed to parse transport config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `base_url` is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client rejected the settings (e.g. a malformed header).
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Settings for one cluster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpTransportConfig {
    /// Scheme, host, port and optional path prefix of the cluster.
    pub base_url: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: u64,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Headers sent with every request. Headers set on a request win.
    pub default_headers: BTreeMap<String, String>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_owned(),
            timeout_secs: 30,
            user_agent: concat!("osq/", env!("CARGO_PKG_VERSION")).to_owned(),
            default_headers: BTreeMap::new(),
        }
    }
}

impl HttpTransportConfig {
    /// Parses a configuration from a TOML document containing the fields at
    /// top level.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the TOML file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The request timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Parses and checks `base_url`.
    pub fn parsed_base_url(&self) -> Result<reqwest::Url, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.to_owned(),
        };
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(invalid("scheme must be http or https")),
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }
        Ok(url)
    }
}
