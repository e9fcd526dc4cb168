//! Invoice entity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::InvoiceDescriptor;
pub use model::{
    CompanyInvoice, Invoice, InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice,
    resolve_paid_date,
};
