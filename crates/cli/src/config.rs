//! `osq.toml` loading and environment overrides.
//!
//! Precedence, lowest first: built-in defaults, the config file, `OSQ_*`
//! environment variables, command-line flags. Command-line flags are applied
//! by `main`.

use std::path::Path;

use anyhow::{Context, Result};
use http_transport::HttpTransportConfig;
use serde::{Deserialize, Serialize};

/// Everything `osq` reads from its config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Cluster connection.
    pub transport: HttpTransportConfig,

    /// Logging and trace export.
    pub observability: ObservabilityConfig,
}

/// Logging and trace export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,

    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,

    /// OTLP collector endpoint. Trace export is off when unset.
    pub otlp_endpoint: Option<String>,

    /// `service.name` reported with exported spans.
    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            default_filter: "info".to_owned(),
            otlp_endpoint: None,
            service_name: "osq".to_owned(),
        }
    }
}

impl CliConfig {
    /// Loads `path`. A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses a config document.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Applies `OSQ_URL`, `OSQ_TIMEOUT_SECS` and `OTEL_EXPORTER_OTLP_ENDPOINT`
    /// as read through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = var("OSQ_URL") {
            self.transport.base_url = url;
        }
        if let Some(secs) = var("OSQ_TIMEOUT_SECS") {
            self.transport.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("OSQ_TIMEOUT_SECS is not a number of seconds: '{secs}'"))?;
        }
        if let Some(endpoint) = var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            self.observability.otlp_endpoint = Some(endpoint);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        assert_eq!(CliConfig::parse("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        assert_eq!(
            CliConfig::load("/nonexistent/osq.toml").unwrap(),
            CliConfig::default()
        );
    }

    #[test]
    fn test_sections_are_read() {
        let config = CliConfig::parse(
            r#"
            [transport]
            base_url = "https://search.internal:9200"
            timeout_secs = 10

            [transport.default_headers]
            authorization = "Bearer t"

            [observability]
            json_logs = true
            otlp_endpoint = "http://collector:4317"
            "#,
        )
        .unwrap();

        assert_eq!(config.transport.base_url, "https://search.internal:9200");
        assert_eq!(config.transport.timeout_secs, 10);
        assert_eq!(
            config.transport.default_headers.get("authorization").map(String::as_str),
            Some("Bearer t")
        );
        assert!(config.observability.json_logs);
        assert_eq!(
            config.observability.otlp_endpoint.as_deref(),
            Some("http://collector:4317")
        );
        assert_eq!(config.observability.service_name, "osq");
    }

    #[test]
    fn test_unknown_shape_is_an_error() {
        assert!(CliConfig::parse("transport = 3").is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut config = CliConfig::parse("[transport]\nbase_url = \"http://file:9200\"").unwrap();

        config
            .apply_env(env(&[("OSQ_URL", "http://env:9200"), ("OSQ_TIMEOUT_SECS", " 5 ")]))
            .unwrap();

        assert_eq!(config.transport.base_url, "http://env:9200");
        assert_eq!(config.transport.timeout_secs, 5);
    }

    #[test]
    fn test_unset_environment_changes_nothing() {
        let mut config = CliConfig::default();

        config.apply_env(env(&[])).unwrap();

        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_bad_timeout_is_reported() {
        let mut config = CliConfig::default();

        let err = config
            .apply_env(env(&[("OSQ_TIMEOUT_SECS", "soon")]))
            .unwrap_err();

        assert!(err.to_string().contains("OSQ_TIMEOUT_SECS"));
    }
}
