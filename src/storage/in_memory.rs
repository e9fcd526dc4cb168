//! In-memory implementation of the storage services for testing and development
//!
//! Mirrors the relational schema's observable behavior: rows ordered by
//! primary key, serial invoice ids, `add_date` defaulting to today, the
//! `comp_code` foreign key and its `ON DELETE CASCADE`.

use crate::core::{CompanyService, InvoiceService};
use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::entities::invoice::{
    CompanyInvoice, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice,
};
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

/// In-memory store implementing both [`CompanyService`] and [`InvoiceService`]
///
/// Clones share the same tables. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[async_trait]
impl CompanyService for InMemoryStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        let tables = self.read()?;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        let tables = self.read()?;
        Ok(tables.companies.get(code).cloned())
    }

    async fn invoices(&self, code: &str) -> Result<Vec<CompanyInvoice>> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .values()
            .filter(|invoice| invoice.comp_code == code)
            .map(CompanyInvoice::from)
            .collect())
    }

    async fn create(&self, company: NewCompany) -> Result<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            bail!(
                "duplicate key value violates unique constraint \"companies_pkey\": {}",
                company.code
            );
        }
        if tables.companies.values().any(|c| c.name == company.name) {
            bail!(
                "duplicate key value violates unique constraint \"companies_name_key\": {}",
                company.name
            );
        }

        let created = Company {
            code: company.code,
            name: company.name,
            description: Some(company.description),
        };
        tables
            .companies
            .insert(created.code.clone(), created.clone());

        Ok(created)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<Company>> {
        let mut tables = self.write()?;

        if let Some(name) = &changes.name {
            if tables
                .companies
                .values()
                .any(|c| c.code != code && &c.name == name)
            {
                bail!(
                    "duplicate key value violates unique constraint \"companies_name_key\": {}",
                    name
                );
            }
        }

        let Some(company) = tables.companies.get_mut(code) else {
            return Ok(None);
        };
        changes.apply_to(company);

        Ok(Some(company.clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let mut tables = self.write()?;

        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);

        Ok(true)
    }
}

#[async_trait]
impl InvoiceService for InMemoryStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Invoice>> {
        let tables = self.read()?;
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn company(&self, id: i32) -> Result<Option<Company>> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .get(&id)
            .and_then(|invoice| tables.companies.get(&invoice.comp_code))
            .cloned())
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(&invoice.comp_code) {
            bail!(
                "insert or update on table \"invoices\" violates foreign key constraint \"invoices_comp_code_fkey\": {}",
                invoice.comp_code
            );
        }
        if invoice.amt <= 0.0 {
            bail!("new row for relation \"invoices\" violates check constraint \"invoices_amt_check\"");
        }

        tables.last_invoice_id += 1;
        let created = Invoice {
            id: tables.last_invoice_id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: false,
            add_date: today(),
            paid_date: None,
        };
        tables.invoices.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        let mut tables = self.write()?;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(invoice, today());

        Ok(Some(invoice.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.invoices.remove(&id).is_some())
    }
}
