//! Detected column roles for a table.

use serde::{Deserialize, Serialize};

use super::column::ColumnRef;

/// How the identity column was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum IdentitySource {
    /// Named explicitly by the caller.
    Override,
    /// Header contained a name-like token.
    HeaderMatch { token: String },
    /// Values looked like distinct person names.
    ValueProfile { unique_ratio: f64, text_ratio: f64 },
}

/// Why a non-identity column is not required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Header marks the column as metadata or grading output.
    MetadataHeader { token: String },
    /// Too few rows answered the column.
    Sparse { presence_ratio: f64 },
}

/// A column left out of the required set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedColumn {
    pub name: String,
    #[serde(flatten)]
    pub reason: ExclusionReason,
}

/// Which column identifies a person and which columns make a complete response.
///
/// `required` never contains the identity column and is in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub identity: ColumnRef,
    pub required: Vec<ColumnRef>,
    pub identity_source: IdentitySource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<ExcludedColumn>,
}

impl ColumnRoles {
    /// Header of the identity column.
    pub fn identity_column(&self) -> &str {
        &self.identity.name
    }

    /// Headers of the required columns, in table order.
    pub fn required_columns(&self) -> Vec<String> {
        self.required.iter().map(|c| c.name.clone()).collect()
    }
}
