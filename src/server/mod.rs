//! Server module for building the HTTP application
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for companies and invoices
//! - Health check routes
//! - The not-found fallback and error diagnostics

pub mod builder;
pub mod dispatch;
pub mod entity_registry;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
