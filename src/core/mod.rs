//! Core module containing the error taxonomy, extractors and service traits

pub mod error;
pub mod extractors;
pub mod service;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use extractors::ApiJson;
pub use service::{CompanyService, InvoiceService};
