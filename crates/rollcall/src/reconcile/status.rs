//! Per-participant response status.

use serde::{Deserialize, Serialize};

use crate::identity::{normalize, NormalizedIdentity};
use crate::input::DataTable;
use crate::schema::ColumnRoles;

/// Outcome for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseStatus {
    /// Every required column was answered.
    Responded { name: String },
    /// At least one required column was blank.
    Incomplete {
        name: String,
        /// Blank required columns, in table order.
        missing_columns: Vec<String>,
    },
}

impl ResponseStatus {
    pub fn name(&self) -> &str {
        match self {
            ResponseStatus::Responded { name } | ResponseStatus::Incomplete { name, .. } => name,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ResponseStatus::Responded { .. })
    }

    pub fn missing_columns(&self) -> &[String] {
        match self {
            ResponseStatus::Responded { .. } => &[],
            ResponseStatus::Incomplete {
                missing_columns, ..
            } => missing_columns,
        }
    }

    /// Same outcome reported under a different spelling.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        let name = name.into();
        match self {
            ResponseStatus::Responded { .. } => ResponseStatus::Responded { name },
            ResponseStatus::Incomplete {
                missing_columns, ..
            } => ResponseStatus::Incomplete {
                name,
                missing_columns,
            },
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseStatus::Responded { .. } => "Responded",
            ResponseStatus::Incomplete { .. } => "Not Responded",
        }
    }
}

/// Classify a single row on its own.
///
/// Returns `None` when the identity cell has no usable name.
pub fn classify_row(
    table: &DataTable,
    roles: &ColumnRoles,
    row: usize,
) -> Option<(NormalizedIdentity, ResponseStatus)> {
    let raw = table.cell(row, roles.identity.index);
    if raw.is_blank() {
        return None;
    }

    let name = raw.as_text().into_owned();
    let key = normalize(&name);
    if key.is_empty() {
        return None;
    }

    let missing_columns: Vec<String> = roles
        .required
        .iter()
        .filter(|col| table.cell(row, col.index).is_blank())
        .map(|col| col.name.clone())
        .collect();

    let status = if missing_columns.is_empty() {
        ResponseStatus::Responded { name }
    } else {
        ResponseStatus::Incomplete {
            name,
            missing_columns,
        }
    };

    Some((key, status))
}
