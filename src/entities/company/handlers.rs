//! Company HTTP handlers

use super::model::{CompanyChanges, CompanyDetail, NewCompany};
use crate::core::CompanyService;
use crate::core::error::{ApiError, ApiResult};
use crate::core::extractors::{ApiJson, require_code};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Company-specific AppState
#[derive(Clone)]
pub struct CompanyAppState {
    pub service: Arc<dyn CompanyService>,
}

fn no_such_company(code: &str) -> ApiError {
    ApiError::not_found(format!("No such company: {code}"))
}

/// GET /companies
///
/// Returns `{companies: [{code, name}, ...]}`
pub async fn list_companies(State(state): State<CompanyAppState>) -> ApiResult<Json<Value>> {
    let companies = state.service.list().await?;
    Ok(Json(json!({ "companies": companies })))
}

/// GET /companies/{code}
///
/// Returns `{company: {code, name, description, invoices: [...]}}`
pub async fn get_company(
    State(state): State<CompanyAppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Value>> {
    let code = require_code(&code)?;

    let (company, invoices) =
        tokio::try_join!(state.service.get(code), state.service.invoices(code))?;
    let company = company.ok_or_else(|| no_such_company(code))?;

    tracing::debug!(code = %company.code, invoices = invoices.len(), "company fetched");

    let company = CompanyDetail { company, invoices };
    Ok(Json(json!({ "company": company })))
}

/// POST /companies
///
/// Needs `{code, name, description}`; returns 201 `{company: {...}}`
pub async fn create_company(
    State(state): State<CompanyAppState>,
    payload: ApiJson<NewCompany>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let payload = payload.validated()?;

    let company = state.service.create(payload).await?;
    tracing::info!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

/// PUT /companies/{code}
///
/// Accepts `{name?, description?}`; returns `{company: {...}}`
pub async fn update_company(
    State(state): State<CompanyAppState>,
    Path(code): Path<String>,
    payload: ApiJson<CompanyChanges>,
) -> ApiResult<Json<Value>> {
    let code = require_code(&code)?;
    let changes = payload.validated()?;

    let company = state
        .service
        .update(code, changes)
        .await?
        .ok_or_else(|| no_such_company(code))?;
    tracing::info!(code = %company.code, "company updated");

    Ok(Json(json!({ "company": company })))
}

/// DELETE /companies/{code}
///
/// Returns `{status: "deleted"}`
pub async fn delete_company(
    State(state): State<CompanyAppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Value>> {
    let code = require_code(&code)?;

    if !state.service.delete(code).await? {
        return Err(no_such_company(code));
    }
    tracing::info!(code, "company deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
