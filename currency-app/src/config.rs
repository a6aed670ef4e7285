//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;
use secrecy::SecretString;
use url::Url;

use currency_apilayer::DEFAULT_BASE_URL;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub api_key: SecretString,
    pub upstream_url: Url,
    pub upstream_timeout: Duration,
    /// OTLP collector, when trace export is wanted
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow::anyhow!("API_KEY environment variable is required"))?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .context("PORT must be a port number")?;

        let upstream_url = lookup("UPSTREAM_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let upstream_url = Url::parse(&upstream_url)
            .with_context(|| format!("UPSTREAM_URL is not a valid URL: {upstream_url}"))?;

        let timeout_secs: u64 = lookup("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.is_empty());

        Ok(Self {
            port,
            api_key: SecretString::from(api_key),
            upstream_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            otlp_endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("API_KEY", "secret")]).unwrap();

        assert_eq!(config.api_key.expose_secret(), "secret");
        assert_eq!(config.port, 0);
        assert_eq!(config.upstream_url.as_str(), "https://api.apilayer.com/");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = load(&[]).err().unwrap();
        assert!(err.to_string().contains("API_KEY"));

        assert!(load(&[("API_KEY", "")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("API_KEY", "secret"),
            ("PORT", "8080"),
            ("UPSTREAM_URL", "http://localhost:9000"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url.as_str(), "http://localhost:9000/");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(
            config.otlp_endpoint.as_deref(),
            Some("http://localhost:4317")
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("API_KEY", "k"), ("PORT", "http")]).is_err());
        assert!(load(&[("API_KEY", "k"), ("UPSTREAM_URL", "not a url")]).is_err());
        assert!(load(&[("API_KEY", "k"), ("UPSTREAM_TIMEOUT_SECS", "-1")]).is_err());
    }
}
