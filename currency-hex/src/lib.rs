//! # Currency Hex
//!
//! Application service layer and HTTP adapter for the conversion gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (calls the converter, maps its errors)
//! - `inbound/` - HTTP adapter (Axum server, content negotiation)
//!
//! The service is generic over `C: Converter`, allowing
//! different upstream clients to be injected.

pub mod inbound;
pub mod service;


pub use service::ConversionService;
