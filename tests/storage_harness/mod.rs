//! Shared test harness for storage backend testing
//!
//! Provides payload builders, a router factory, and two macro-generated
//! suites that any store implementing both `CompanyService` and
//! `InvoiceService` can be run against:
//!
//! - `service_contract_tests!` — direct calls on the service traits
//! - `rest_api_tests!` — full HTTP round-trips through the router
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! service_contract_tests!(InMemoryStore::new());
//! rest_api_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod service_tests;

use axum_test::TestServer;
use biztime::prelude::*;

/// Build a `NewCompany` payload with a derived description
pub fn new_company(code: &str, name: &str) -> NewCompany {
    NewCompany {
        code: code.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
    }
}

/// Build a `NewInvoice` payload
pub fn new_invoice(comp_code: &str, amt: f64) -> NewInvoice {
    NewInvoice {
        comp_code: comp_code.to_string(),
        amt,
    }
}

/// Build a test server around `store` with the full production router
pub fn build_test_server<S>(store: S) -> TestServer
where
    S: CompanyService + InvoiceService + Clone + 'static,
{
    let router = ServerBuilder::new()
        .with_store(store)
        .with_environment(Environment::Test)
        .build()
        .expect("router should build");
    TestServer::new(router)
}
