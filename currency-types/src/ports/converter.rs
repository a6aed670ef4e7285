//! Conversion provider port.
//!
//! This trait defines the interface for upstream conversion services.
//! Implementations can be HTTP clients, test doubles, etc.

use crate::domain::{Amount, ConversionResult, Currency};
use crate::error::ConvertError;

/// Port trait for currency converters.
#[async_trait::async_trait]
pub trait Converter: Send + Sync + 'static {
    /// Converts `amount` into `target`.
    ///
    /// Performs exactly one upstream call. A rejection by the upstream is a
    /// [`ConvertError::Conversion`]; anything else is a [`ConvertError::Transport`].
    async fn convert(
        &self,
        amount: Amount,
        target: Currency,
    ) -> Result<ConversionResult, ConvertError>;
}
