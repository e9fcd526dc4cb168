//! Invoice HTTP handlers

use super::model::{CompanyInvoice, InvoiceChanges, InvoiceDetail, NewInvoice};
use crate::core::InvoiceService;
use crate::core::error::{ApiError, ApiResult};
use crate::core::extractors::{ApiJson, parse_invoice_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Invoice-specific AppState
#[derive(Clone)]
pub struct InvoiceAppState {
    pub service: Arc<dyn InvoiceService>,
}

fn no_such_invoice(id: i32) -> ApiError {
    ApiError::not_found(format!("No such invoice: {id}"))
}

/// GET /invoices
///
/// Returns `{invoices: [{id, comp_code}, ...]}`
pub async fn list_invoices(State(state): State<InvoiceAppState>) -> ApiResult<Json<Value>> {
    let invoices = state.service.list().await?;
    Ok(Json(json!({ "invoices": invoices })))
}

/// GET /invoices/{id}
///
/// Returns `{invoice: {id, amt, paid, add_date, paid_date, company: {code, name, description}}}`
pub async fn get_invoice(
    State(state): State<InvoiceAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_invoice_id(&id)?;

    let (invoice, company) =
        tokio::try_join!(state.service.get(id), state.service.company(id))?;
    let invoice = invoice.ok_or_else(|| no_such_invoice(id))?;

    tracing::debug!(id, comp_code = %invoice.comp_code, "invoice fetched");

    let invoice = InvoiceDetail {
        invoice: CompanyInvoice::from(&invoice),
        company,
    };
    Ok(Json(json!({ "invoice": invoice })))
}

/// POST /invoices
///
/// Needs `{comp_code, amt}`; returns 201 `{invoice: {id, comp_code, amt, paid, add_date, paid_date}}`
pub async fn create_invoice(
    State(state): State<InvoiceAppState>,
    payload: ApiJson<NewInvoice>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let payload = payload.validated()?;

    let invoice = state.service.create(payload).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

/// PUT /invoices/{id}
///
/// Accepts `{amt?, paid?}`; returns the full updated invoice
pub async fn update_invoice(
    State(state): State<InvoiceAppState>,
    Path(id): Path<String>,
    payload: ApiJson<InvoiceChanges>,
) -> ApiResult<Json<Value>> {
    let id = parse_invoice_id(&id)?;
    let changes = payload.validated()?;

    let invoice = state
        .service
        .update(id, changes)
        .await?
        .ok_or_else(|| no_such_invoice(id))?;
    tracing::info!(id, paid = invoice.paid, "invoice updated");

    Ok(Json(json!({ "invoice": invoice })))
}

/// DELETE /invoices/{id}
///
/// Returns `{status: "deleted"}`
pub async fn delete_invoice(
    State(state): State<InvoiceAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_invoice_id(&id)?;

    if !state.service.delete(id).await? {
        return Err(no_such_invoice(id));
    }
    tracing::info!(id, "invoice deleted");

    Ok(Json(json!({ "status": "deleted" })))
}
