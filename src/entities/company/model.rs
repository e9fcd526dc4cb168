//! Company entity model

use crate::entities::invoice::CompanyInvoice;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A company row: `{code, name, description}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// List entry returned by `GET /companies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// Joined view: a company with the invoices that reference it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<CompanyInvoice>,
}

/// Body of `POST /companies`
///
/// Absent fields deserialize as empty strings so that "missing" and "empty"
/// are rejected by the same rule.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewCompany {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: String,
}

/// Body of `PUT /companies/{code}`
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CompanyChanges {
    #[validate(length(min = 1))]
    pub name: Option<String>,

    pub description: Option<String>,
}

impl CompanyChanges {
    /// Apply the changes on top of a stored company
    pub fn apply_to(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name = name.clone();
        }
        if let Some(description) = &self.description {
            company.description = Some(description.clone());
        }
    }
}
