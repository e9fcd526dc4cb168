//! Central error dispatch
//!
//! - [`not_found`] answers every unmatched path and every unsupported method
//!   on a known path.
//! - [`report_errors`] inspects outgoing responses and, outside production,
//!   logs the diagnostic detail that [`ApiError`] attached to them.

use crate::config::Environment;
use crate::core::error::{ApiError, ErrorDiagnostics};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Fallback handler for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Middleware emitting error diagnostics according to the environment
pub async fn report_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    if environment.emits_diagnostics() {
        if let Some(diagnostics) = response.extensions().get::<ErrorDiagnostics>() {
            tracing::error!(
                %method,
                %path,
                status = diagnostics.status.as_u16(),
                detail = %diagnostics.detail,
                "request failed"
            );
        }
    }

    response
}
