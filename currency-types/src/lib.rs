//! # Currency Types
//!
//! Domain types and port traits for the currency conversion gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! the upstream error-code table, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, Quantity, Amount, ConversionRequest)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Domain, transport and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Amount, ConversionRequest, ConversionResult, Currency, Quantity};
pub use dto::*;
pub use error::{AppError, ConversionError, ConvertError, TransportError};
pub use ports::Converter;
