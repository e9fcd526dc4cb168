//! Typed error handling for the BizTime API
//!
//! Every handler returns [`ApiResult`]. Failures are raised as an [`ApiError`]
//! and converted exactly once into an HTTP response with the uniform body:
//!
//! ```json
//! { "error": { "message": "No such company: nope", "status": 404 } }
//! ```
//!
//! # Error Categories
//!
//! - [`ApiError::BadRequest`]: missing or invalid client input (400)
//! - [`ApiError::NotFound`]: the requested entity or route does not exist (404)
//! - [`ApiError::Unhandled`]: storage or programming faults (500)
//!
//! # Example
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! async fn get_company(code: &str) -> ApiResult<Company> {
//!     service
//!         .get(code)
//!         .await?
//!         .ok_or_else(|| ApiError::not_found(format!("No such company: {code}")))
//! }
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// The error type returned by every request handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input is missing or malformed
    #[error("{0}")]
    BadRequest(String),

    /// The referenced entity (or route) does not exist
    #[error("{0}")]
    NotFound(String),

    /// Anything else: storage failures, broken invariants
    #[error("{0}")]
    Unhandled(anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the serializable error body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                message: self.to_string(),
                status: self.status_code().as_u16(),
            },
        }
    }

    /// Full diagnostic rendering, including the cause chain of unhandled errors
    fn detail(&self) -> String {
        match self {
            ApiError::Unhandled(err) => format!("{err:?}"),
            other => other.to_string(),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Inner `error` object of an [`ErrorResponse`]
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
}

/// Diagnostic detail attached to error responses as an extension.
///
/// The dispatcher middleware decides whether to emit it, based on the
/// configured environment.
#[derive(Debug, Clone)]
pub struct ErrorDiagnostics {
    pub status: StatusCode,
    pub detail: Arc<str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let diagnostics = ErrorDiagnostics {
            status,
            detail: self.detail().into(),
        };
        let mut response = (status, Json(self.to_response())).into_response();
        response.extensions_mut().insert(diagnostics);
        response
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unhandled(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ApiError::BadRequest(format!(
            "Missing or invalid field(s): {}",
            fields.join(", ")
        ))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================
