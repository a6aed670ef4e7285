//! APILayer conversion client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    StatusCode,
    header::{ACCEPT, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use url::Url;

use currency_types::{
    Amount, ConversionError, ConversionResult, ConvertError, Converter, Currency, TransportError,
};

use crate::types::{ConvertResponse, ErrorResponse};

const CONVERT_PATH: &str = "exchangerates_data/convert";
const API_KEY_HEADER: &str = "apikey";

/// Conversion client backed by the APILayer exchange-rates API.
///
/// Holds one long-lived `reqwest::Client`; clone the converter or wrap it in
/// an `Arc` rather than building a new one per request.
#[derive(Debug, Clone)]
pub struct ApiLayerConverter {
    http: reqwest::Client,
    endpoint: Url,
    api_key: SecretString,
}

impl ApiLayerConverter {
    /// Creates a converter for the service rooted at `base_url`.
    pub fn new(base_url: &Url, api_key: SecretString, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/{}",
            base_url.as_str().trim_end_matches('/'),
            CONVERT_PATH
        ))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    /// Returns the conversion endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn conversion_request(
        &self,
        amount: &Amount,
        target: &Currency,
    ) -> Result<reqwest::Request, TransportError> {
        let mut api_key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        api_key.set_sensitive(true);

        let quantity = amount.quantity().to_string();
        self.http
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, api_key)
            .query(&[
                ("from", amount.currency().as_str()),
                ("amount", quantity.as_str()),
                ("to", target.as_str()),
            ])
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))
    }
}

#[async_trait]
impl Converter for ApiLayerConverter {
    #[instrument(skip(self, amount, target), fields(from = %amount.currency(), to = %target))]
    async fn convert(
        &self,
        amount: Amount,
        target: Currency,
    ) -> Result<ConversionResult, ConvertError> {
        let request = self.conversion_request(&amount, &target)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "upstream responded");

        match status {
            StatusCode::OK => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| TransportError::Read(e.to_string()))?;
                let converted: ConvertResponse = serde_json::from_slice(&body)
                    .map_err(|e| TransportError::MalformedResult(e.to_string()))?;

                Ok(Amount::new(converted.result, target))
            }
            StatusCode::BAD_REQUEST => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| TransportError::Read(e.to_string()))?;
                let rejection: ErrorResponse = serde_json::from_slice(&body)
                    .map_err(|e| TransportError::MalformedError(e.to_string()))?;

                debug!(code = %rejection.error.code, "upstream rejected conversion");
                Err(ConversionError::from_upstream(
                    &rejection.error.code,
                    &rejection.error.message,
                )
                .into())
            }
            other => {
                // Raw passthrough, the body is not assumed to be JSON here
                let body = response.text().await.unwrap_or_default();
                warn!(status = other.as_u16(), "unexpected upstream status");

                Err(TransportError::UnexpectedStatus {
                    status: other.as_u16(),
                    body,
                }
                .into())
            }
        }
    }
}
