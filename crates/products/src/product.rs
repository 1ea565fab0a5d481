//! The product record and its status lifecycle.

use serde::{Deserialize, Serialize};

/// Product status lifecycle.
///
/// Any state may transition to any other via an explicit patch; there are no
/// automatic transitions. The wire strings are the registry's original
/// Portuguese values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "INATIVO")]
    Inactive,
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "ATIVO")]
    Active,
}

impl ProductStatus {
    /// Parse a wire string; `None` when the value is not a member of the
    /// enumeration.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "INATIVO" => Some(Self::Inactive),
            "PENDENTE" => Some(Self::Pending),
            "ATIVO" => Some(Self::Active),
            _ => None,
        }
    }
}

/// A validated product record.
///
/// Construction goes through [`crate::schema::validate_draft`]; once built,
/// every field has passed its constraint. `id` is caller-supplied and serves
/// as the lookup key; the store enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub model: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`), kept in its string form.
    pub date_manufacture: String,
    pub year: i64,
    pub brand: String,
    pub email: String,
    pub cpf: String,
    pub status: ProductStatus,
}

/// A validated set of field deltas for a partial update.
///
/// Produced by [`crate::schema::validate_patch`]; absent fields leave the
/// record untouched when merged by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub id: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub date_manufacture: Option<String>,
    pub year: Option<i64>,
    pub brand: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub status: Option<ProductStatus>,
}

impl ProductChanges {
    /// A delta that only changes the status.
    pub fn status(status: ProductStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
