//! Domain models for the conversion gateway.

pub mod amount;
pub mod conversion;

pub use amount::{Amount, Currency, InvalidQuantity, Quantity};
pub use conversion::{ConversionRequest, ConversionResult};
