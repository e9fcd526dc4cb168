//! Request extractors shared by the resource handlers

use crate::core::error::{ApiError, ApiResult};
use axum::extract::FromRequest;
use validator::Validate;

/// JSON body extractor whose rejections use the API error format.
///
/// Bodies that fail to parse become [`ApiError::BadRequest`] instead of
/// axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Validate> ApiJson<T> {
    /// Run the payload's validation rules and hand back the payload
    pub fn validated(self) -> ApiResult<T> {
        self.0.validate()?;
        Ok(self.0)
    }
}

/// Parse an invoice id path segment.
///
/// A segment that is not an integer cannot name an invoice, so it is
/// reported as not found rather than as a malformed request.
pub fn parse_invoice_id(raw: &str) -> ApiResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::not_found(format!("No such invoice: {raw}")))
}

/// Reject empty company codes before touching storage.
///
/// The code is otherwise used exactly as received, so a code stored with
/// surrounding whitespace is addressed by the same (percent-encoded) text.
pub fn require_code(raw: &str) -> ApiResult<&str> {
    if raw.is_empty() {
        return Err(ApiError::not_found("No such company"));
    }
    Ok(raw)
}
