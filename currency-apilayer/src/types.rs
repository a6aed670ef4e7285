//! Wire types for the APILayer `exchangerates_data/convert` endpoint.

use currency_types::Quantity;
use serde::Deserialize;

/// Successful conversion body. Only `result` is read; `query`, `info`,
/// `date` and `success` are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ConvertResponse {
    pub result: Quantity,
}

/// Rejection body: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
