//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, ConversionRequest, ConversionResult, Currency, Quantity};

/// Inbound conversion payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPayload {
    pub source_currency: Currency,
    /// JSON number or numeric string, kept verbatim
    pub source_value: Quantity,
    pub target_currency: Currency,
}

impl From<ConversionPayload> for ConversionRequest {
    fn from(payload: ConversionPayload) -> Self {
        ConversionRequest::new(
            Amount::new(payload.source_value, payload.source_currency),
            payload.target_currency,
        )
    }
}

/// Response after a successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResponse {
    pub currency: Currency,
    pub value: Quantity,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(result: ConversionResult) -> Self {
        let (value, currency) = result.into_parts();
        Self { currency, value }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accepts_string_and_number_values() {
        let from_string: ConversionPayload = serde_json::from_str(
            r#"{"sourceCurrency":"EUR","sourceValue":"10.10","targetCurrency":"USD"}"#,
        )
        .unwrap();
        let from_number: ConversionPayload = serde_json::from_str(
            r#"{"sourceCurrency":"EUR","sourceValue":10.10,"targetCurrency":"USD"}"#,
        )
        .unwrap();

        assert_eq!(from_string.source_value.to_string(), "10.10");
        assert_eq!(from_number.source_value.to_string(), "10.10");
    }

    #[test]
    fn test_payload_requires_all_fields() {
        let result = serde_json::from_str::<ConversionPayload>(
            r#"{"sourceCurrency":"EUR","sourceValue":"10"}"#,
        );
        assert!(result.unwrap_err().to_string().contains("targetCurrency"));
    }

    #[test]
    fn test_payload_into_request() {
        let payload: ConversionPayload = serde_json::from_str(
            r#"{"sourceCurrency":"EUR","sourceValue":"10","targetCurrency":"USD"}"#,
        )
        .unwrap();
        let request = ConversionRequest::from(payload);

        assert_eq!(request.source().currency().as_str(), "EUR");
        assert_eq!(request.source().quantity().to_string(), "10");
        assert_eq!(request.target_currency().as_str(), "USD");
    }

    #[test]
    fn test_response_shape() {
        let result = Amount::new("9.5".parse().unwrap(), Currency::from("USD"));
        let body = serde_json::to_string(&ConversionResponse::from(result)).unwrap();
        assert_eq!(body, r#"{"currency":"USD","value":9.5}"#);
    }
}
