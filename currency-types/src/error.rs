//! Error types for the conversion gateway.

/// Domain-level errors: the upstream rejected the conversion as invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid source currency")]
    InvalidSourceCurrency,

    #[error("invalid target currency")]
    InvalidTargetCurrency,

    #[error("invalid conversion amount")]
    InvalidConversionAmount,

    #[error("{0}")]
    Unclassified(String),
}

impl ConversionError {
    /// Classifies an upstream `{error: {code, message}}` body.
    ///
    /// Codes outside the table keep both code and message for diagnosis.
    pub fn from_upstream(code: &str, message: &str) -> Self {
        match code {
            "invalid_from_currency" => Self::InvalidSourceCurrency,
            "invalid_to_currency" => Self::InvalidTargetCurrency,
            "invalid_conversion_amount" => Self::InvalidConversionAmount,
            other => Self::Unclassified(format!("error {other:?}: {message}")),
        }
    }
}

/// Infrastructure failures talking to the upstream service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not create conversion request: {0}")]
    InvalidRequest(String),

    #[error("failed to perform conversion: {0}")]
    Request(String),

    #[error("failed to read conversion response: {0}")]
    Read(String),

    #[error("could not read conversion response: {0}")]
    MalformedResult(String),

    #[error("failed to parse conversion error response: {0}")]
    MalformedError(String),

    #[error("unexpected error (upstream status {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Error returned by a [`Converter`](crate::ports::Converter).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("only POST requests are supported")]
    MethodNotAllowed,

    #[error("only JSON requests are supported")]
    UnsupportedMediaType,

    #[error("only JSON responses are supported")]
    NotAcceptable,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_upstream_codes() {
        assert_eq!(
            ConversionError::from_upstream("invalid_from_currency", "oopsie"),
            ConversionError::InvalidSourceCurrency
        );
        assert_eq!(
            ConversionError::from_upstream("invalid_to_currency", "oopsie"),
            ConversionError::InvalidTargetCurrency
        );
        assert_eq!(
            ConversionError::from_upstream("invalid_conversion_amount", "oopsie"),
            ConversionError::InvalidConversionAmount
        );
    }

    #[test]
    fn test_unknown_upstream_code_is_unclassified() {
        let err = ConversionError::from_upstream("something_else", "oopsie");
        assert_eq!(
            err,
            ConversionError::Unclassified(r#"error "something_else": oopsie"#.into())
        );
        assert_eq!(err.to_string(), r#"error "something_else": oopsie"#);
    }

    #[test]
    fn test_unknown_upstream_code_is_escaped() {
        let err = ConversionError::from_upstream(r#"a"b"#, "m");
        assert_eq!(err.to_string(), r#"error "a\"b": m"#);
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = TransportError::UnexpectedStatus {
            status: 503,
            body: "nope".into(),
        };
        assert_eq!(err.to_string(), "unexpected error (upstream status 503): nope");
    }

    #[test]
    fn test_convert_error_is_transparent() {
        let err: ConvertError = TransportError::Request("connection refused".into()).into();
        assert_eq!(
            err.to_string(),
            "failed to perform conversion: connection refused"
        );
    }
}
