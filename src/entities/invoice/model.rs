//! Invoice entity model

use crate::entities::company::Company;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full invoice row: `{id, comp_code, amt, paid, add_date, paid_date}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// List entry returned by `GET /invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Invoice as nested under its company in `GET /companies/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanyInvoice {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

impl From<&Invoice> for CompanyInvoice {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
        }
    }
}

/// Joined view: an invoice with the company it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: CompanyInvoice,
    pub company: Option<Company>,
}

/// Body of `POST /invoices`
///
/// A missing `amt` deserializes as `0.0` and fails the positivity rule.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewInvoice {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub comp_code: String,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub amt: f64,
}

/// Body of `PUT /invoices/{id}`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InvoiceChanges {
    #[validate(range(exclusive_min = 0.0))]
    pub amt: Option<f64>,

    pub paid: Option<bool>,
}

impl InvoiceChanges {
    /// Apply the changes on top of a stored invoice, `today` being the
    /// date recorded when an unpaid invoice becomes paid.
    pub fn apply_to(&self, invoice: &mut Invoice, today: NaiveDate) {
        if let Some(amt) = self.amt {
            invoice.amt = amt;
        }
        invoice.paid_date = resolve_paid_date(invoice.paid, invoice.paid_date, self.paid, today);
        if let Some(paid) = self.paid {
            invoice.paid = paid;
        }
    }
}

/// Compute the `paid_date` after a payment-status change.
///
/// - paying an unpaid invoice stamps `today`
/// - un-paying clears the date
/// - anything else keeps the current date
pub fn resolve_paid_date(
    was_paid: bool,
    paid_date: Option<NaiveDate>,
    requested: Option<bool>,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match requested {
        Some(true) if !was_paid => Some(today),
        Some(false) => None,
        _ => paid_date,
    }
}
