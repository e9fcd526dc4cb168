//! ServerBuilder for fluent API to build the HTTP server

use super::dispatch::{not_found, report_errors};
use super::entity_registry::EntityRegistry;
use crate::config::Environment;
use crate::core::{CompanyService, InvoiceService};
use crate::entities::company::CompanyDescriptor;
use crate::entities::invoice::InvoiceDescriptor;
use anyhow::Result;
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the BizTime HTTP application
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .with_environment(Environment::Production)
///     .build()?;
/// ```
pub struct ServerBuilder {
    company_service: Option<Arc<dyn CompanyService>>,
    invoice_service: Option<Arc<dyn InvoiceService>>,
    environment: Environment,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            company_service: None,
            invoice_service: None,
            environment: Environment::default(),
        }
    }

    /// Use one store for both resources
    pub fn with_store<S>(self, store: S) -> Self
    where
        S: CompanyService + InvoiceService + Clone + 'static,
    {
        self.with_company_service(store.clone())
            .with_invoice_service(store)
    }

    /// Set the company service (required)
    pub fn with_company_service(mut self, service: impl CompanyService + 'static) -> Self {
        self.company_service = Some(Arc::new(service));
        self
    }

    /// Set the invoice service (required)
    pub fn with_invoice_service(mut self, service: impl InvoiceService + 'static) -> Self {
        self.invoice_service = Some(Arc::new(service));
        self
    }

    /// Set the environment, which controls error diagnostics
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health check routes
    /// - CRUD routes for companies and invoices
    /// - A not-found fallback for unmatched paths and methods
    /// - Error diagnostics and request tracing layers
    pub fn build(mut self) -> Result<Router> {
        let company_service = self.company_service.take().ok_or_else(|| {
            anyhow::anyhow!("CompanyService is required. Call .with_company_service()")
        })?;
        let invoice_service = self.invoice_service.take().ok_or_else(|| {
            anyhow::anyhow!("InvoiceService is required. Call .with_invoice_service()")
        })?;

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(CompanyDescriptor::new(company_service)));
        registry.register(Box::new(InvoiceDescriptor::new(invoice_service)));
        tracing::debug!(entities = ?registry.entity_types(), "entity routes registered");

        Ok(health_routes()
            .merge(registry.build_routes())
            .fallback(not_found)
            .method_not_allowed_fallback(not_found)
            .layer(middleware::from_fn_with_state(
                self.environment,
                report_errors,
            ))
            .layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let environment = self.environment;
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%environment, "Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build health check routes
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "biztime"
    }))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
