//! Entity descriptor for Invoice

use super::handlers::{
    InvoiceAppState, create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};
use crate::core::InvoiceService;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Invoice entity
pub struct InvoiceDescriptor {
    pub service: Arc<dyn InvoiceService>,
}

impl InvoiceDescriptor {
    pub fn new(service: Arc<dyn InvoiceService>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for InvoiceDescriptor {
    fn entity_type(&self) -> &str {
        "invoice"
    }

    fn plural(&self) -> &str {
        "invoices"
    }

    fn build_routes(&self) -> Router {
        let state = InvoiceAppState {
            service: self.service.clone(),
        };

        let collection = format!("/{}", self.plural());
        let item = format!("{collection}/{{id}}");

        Router::new()
            .route(&collection, get(list_invoices).post(create_invoice))
            .route(
                &item,
                get(get_invoice).put(update_invoice).delete(delete_invoice),
            )
            .with_state(state)
    }
}
