//! Service traits for company and invoice storage
//!
//! Handlers only talk to these traits. Implementations own persistence,
//! identity generation and referential integrity; any failure they report
//! surfaces to clients as an unhandled (500) error.

use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::entities::invoice::{
    CompanyInvoice, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice,
};
use anyhow::Result;
use async_trait::async_trait;

/// Storage operations on the `companies` table
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// List all companies, ordered by code
    async fn list(&self) -> Result<Vec<CompanySummary>>;

    /// Get a company by code
    async fn get(&self, code: &str) -> Result<Option<Company>>;

    /// Invoices whose `comp_code` is `code`, ordered by id
    async fn invoices(&self, code: &str) -> Result<Vec<CompanyInvoice>>;

    /// Insert a new company
    async fn create(&self, company: NewCompany) -> Result<Company>;

    /// Update a company; `None` when no row matched
    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<Company>>;

    /// Delete a company (and, through the cascade, its invoices).
    ///
    /// Returns whether a row was deleted.
    async fn delete(&self, code: &str) -> Result<bool>;
}

/// Storage operations on the `invoices` table
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// List all invoices, ordered by id
    async fn list(&self) -> Result<Vec<InvoiceSummary>>;

    /// Get an invoice by id
    async fn get(&self, id: i32) -> Result<Option<Invoice>>;

    /// The company referenced by invoice `id`
    async fn company(&self, id: i32) -> Result<Option<Company>>;

    /// Insert a new invoice; fails when `comp_code` names no company
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Update an invoice; `None` when no row matched
    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>>;

    /// Delete an invoice, returning whether a row was deleted
    async fn delete(&self, id: i32) -> Result<bool>;
}
