//! Conversion Application Service
//!
//! Invokes the converter port and turns its outcome into client-facing errors.
//! Contains NO infrastructure logic.

use currency_types::{
    AppError, ConversionError, ConversionRequest, ConversionResult, ConvertError, Converter,
};

/// Application service for conversions.
///
/// Generic over `C: Converter` - the upstream client is injected at construction
/// and shared read-only by every request.
pub struct ConversionService<C: Converter> {
    converter: C,
}

impl<C: Converter> ConversionService<C> {
    /// Creates a new conversion service with the given converter.
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Returns a reference to the underlying converter.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Converts the request's source amount into its target currency.
    ///
    /// Domain rejections become `BadRequest` naming the offending input,
    /// everything else becomes `Internal`.
    #[tracing::instrument(skip(self, req), fields(
        from = %req.source().currency(),
        to = %req.target_currency(),
        amount = %req.source().quantity(),
    ))]
    pub async fn convert(&self, req: ConversionRequest) -> Result<ConversionResult, AppError> {
        match self
            .converter
            .convert(req.source().clone(), req.target_currency().clone())
            .await
        {
            Ok(result) => {
                tracing::debug!(value = %result.quantity(), "conversion succeeded");
                Ok(result)
            }
            Err(err) => {
                match &err {
                    ConvertError::Conversion(e) => tracing::info!("conversion rejected: {}", e),
                    ConvertError::Transport(e) => tracing::warn!("conversion failed: {}", e),
                }
                Err(client_error(err, &req))
            }
        }
    }
}

fn client_error(err: ConvertError, req: &ConversionRequest) -> AppError {
    match err {
        ConvertError::Conversion(ConversionError::InvalidSourceCurrency) => AppError::BadRequest(
            format!("invalid source currency {}", req.source().currency()),
        ),
        ConvertError::Conversion(ConversionError::InvalidTargetCurrency) => AppError::BadRequest(
            format!("invalid target currency {}", req.target_currency()),
        ),
        ConvertError::Conversion(ConversionError::InvalidConversionAmount) => AppError::BadRequest(
            format!("invalid conversion amount {}", req.source().quantity()),
        ),
        ConvertError::Conversion(ConversionError::Unclassified(msg)) => AppError::Internal(msg),
        ConvertError::Transport(e) => AppError::Internal(e.to_string()),
    }
}
