//! # BizTime
//!
//! A REST API for companies and the invoices they issue.
//!
//! ## Features
//!
//! - **Companies**: list, fetch with their invoices, create, update, delete
//! - **Invoices**: list, fetch with their company, create, update (amount and
//!   payment status), delete
//! - **Uniform errors**: every failure answers `{error: {message, status}}`
//! - **Pluggable storage**: PostgreSQL via `sqlx` (feature `postgres`) or an
//!   in-memory store with the same semantics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryStore::new())
//!     .with_environment(Environment::Development)
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiJson, ApiResult, CompanyService, ErrorResponse, InvoiceService,
    };

    // === Entities ===
    pub use crate::entities::company::{
        Company, CompanyChanges, CompanyDetail, CompanySummary, NewCompany,
    };
    pub use crate::entities::invoice::{
        CompanyInvoice, Invoice, InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{AppConfig, DatabaseConfig, Environment, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
