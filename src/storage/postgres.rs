//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, implementing both [`CompanyService`] and
//! [`InvoiceService`] over a `sqlx::PgPool`. Every statement is
//! parameterized; nothing from a request is spliced into SQL text.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! biztime = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! [`ensure_schema`] creates the `companies` and `invoices` tables if they do
//! not exist. Invoice rows reference their company with `ON DELETE CASCADE`.

use crate::core::{CompanyService, InvoiceService};
use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::entities::invoice::{
    CompanyInvoice, Invoice, InvoiceChanges, InvoiceSummary, NewInvoice,
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply the required tables (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS companies (
            code text PRIMARY KEY,
            name text NOT NULL UNIQUE,
            description text
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create companies table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id serial PRIMARY KEY,
            comp_code text NOT NULL REFERENCES companies ON DELETE CASCADE,
            amt float NOT NULL,
            paid boolean DEFAULT false NOT NULL,
            add_date date DEFAULT CURRENT_DATE NOT NULL,
            paid_date date,
            CONSTRAINT invoices_amt_check CHECK ((amt > (0)::double precision))
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

/// Company and invoice storage backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use biztime::storage::PostgresStore;
///
/// let store = PostgresStore::connect("postgres://localhost/biztime", 5).await?;
/// store.ensure_schema().await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new `PostgresStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| anyhow!("Failed to connect to PostgreSQL: {}", e))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the tables on this store's pool
    pub async fn ensure_schema(&self) -> Result<()> {
        ensure_schema(&self.pool).await
    }
}

#[async_trait]
impl CompanyService for PostgresStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies ORDER BY code")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to list companies: {}", e))
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get company: {}", e))
    }

    async fn invoices(&self, code: &str) -> Result<Vec<CompanyInvoice>> {
        sqlx::query_as::<_, CompanyInvoice>(
            "SELECT id, amt, paid, add_date, paid_date \
             FROM invoices WHERE comp_code = $1 ORDER BY id",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list invoices for company: {}", e))
    }

    async fn create(&self, company: NewCompany) -> Result<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create company: {}", e))
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies \
             SET name = COALESCE($1, name), \
                 description = COALESCE($2, description) \
             WHERE code = $3 \
             RETURNING code, name, description",
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update company: {}", e))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete company: {}", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl InvoiceService for PostgresStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to list invoices: {}", e))
    }

    async fn get(&self, id: i32) -> Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date \
             FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get invoice: {}", e))
    }

    async fn company(&self, id: i32) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT c.code, c.name, c.description \
             FROM invoices AS i \
             JOIN companies AS c ON i.comp_code = c.code \
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get company for invoice: {}", e))
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (comp_code, amt) \
             VALUES ($1, $2) \
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(&invoice.comp_code)
        .bind(invoice.amt)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create invoice: {}", e))
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        // Right-hand expressions see the row as it was before the update,
        // so `paid` in the CASE is the previous payment status.
        sqlx::query_as::<_, Invoice>(
            "UPDATE invoices \
             SET amt = COALESCE($1, amt), \
                 paid = COALESCE($2, paid), \
                 paid_date = CASE \
                     WHEN $2 IS NULL THEN paid_date \
                     WHEN $2 AND NOT paid THEN CURRENT_DATE \
                     WHEN NOT $2 THEN NULL \
                     ELSE paid_date \
                 END \
             WHERE id = $3 \
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(changes.amt)
        .bind(changes.paid)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update invoice: {}", e))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete invoice: {}", e))?;

        Ok(result.rows_affected() > 0)
    }
}
