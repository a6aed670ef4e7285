//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};

use currency_types::{AppError, ConversionPayload, ConversionResponse, Converter, ErrorResponse};

use super::negotiation::{APPLICATION_JSON, accepts};
use crate::ConversionService;

/// Largest request body read into memory.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across handlers.
pub struct AppState<C: Converter> {
    pub service: ConversionService<C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert an amount between currencies.
///
/// Mounted as the router fallback: every path and method lands here. Checks
/// run in order and the first failure answers, so the body is not even read
/// for a request with the wrong method or media types.
#[tracing::instrument(skip_all, fields(method = %method))]
pub async fn convert<C: Converter>(
    State(state): State<Arc<AppState<C>>>,
    method: Method,
    headers: HeaderMap,
    body: Body,
) -> Result<impl IntoResponse, ApiError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed.into());
    }
    if !accepts(&headers, header::CONTENT_TYPE, APPLICATION_JSON) {
        return Err(AppError::UnsupportedMediaType.into());
    }
    if !accepts(&headers, header::ACCEPT, APPLICATION_JSON) {
        return Err(AppError::NotAcceptable.into());
    }

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to read request body: {e}")))?;
    let payload: ConversionPayload =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = state.service.convert(payload.into()).await?;
    Ok(Json(ConversionResponse::from(result)))
}
