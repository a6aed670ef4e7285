//! Conversion request and result.

use super::amount::{Amount, Currency};

/// Validated input to a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    source: Amount,
    target_currency: Currency,
}

impl ConversionRequest {
    /// Creates a request to convert `source` into `target_currency`.
    pub fn new(source: Amount, target_currency: Currency) -> Self {
        Self {
            source,
            target_currency,
        }
    }

    /// Returns the amount to convert.
    pub fn source(&self) -> &Amount {
        &self.source
    }

    /// Returns the currency to convert into.
    pub fn target_currency(&self) -> &Currency {
        &self.target_currency
    }
}

/// Converted amount, expressed in the target currency.
pub type ConversionResult = Amount;
