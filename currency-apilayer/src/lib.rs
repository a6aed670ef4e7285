//! # Currency APILayer
//!
//! Outbound adapter for the gateway.
//! This crate provides the HTTP client that implements the `Converter` port
//! against the APILayer exchange-rates service.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

mod apilayer;
mod types;


pub use apilayer::ApiLayerConverter;

/// Default public endpoint of the APILayer service.
pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com";

/// Build a converter from the upstream base URL and API key.
///
/// The returned converter owns a single pooled HTTP client and is meant to
/// live for the whole process.
///
/// # Examples
///
/// ```ignore
/// let base_url = Url::parse(DEFAULT_BASE_URL)?;
/// let converter = build_converter(&base_url, api_key, Duration::from_secs(10))?;
/// ```
pub fn build_converter(
    base_url: &Url,
    api_key: SecretString,
    timeout: Duration,
) -> anyhow::Result<ApiLayerConverter> {
    ApiLayerConverter::new(base_url, api_key, timeout)
}
