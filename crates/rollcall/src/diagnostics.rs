//! Explanations of detector decisions and a per-row preview.

use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::reconcile::classify_row;
use crate::schema::{ColumnRoles, ExcludedColumn, ExclusionReason, IdentitySource};

/// Preview size used when the caller does not choose one.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// One previewed row with its computed status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// Zero-based data row index.
    pub row: usize,
    pub name: String,
    /// "Responded" or "Not Responded".
    pub status: String,
    pub answers_found: usize,
    pub total_required: usize,
    pub missing_cols: Vec<String>,
}

/// Transparency data returned alongside a reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub detected_name_column: String,
    pub detected_answer_columns: Vec<String>,
    pub identity_source: IdentitySource,
    #[serde(default)]
    pub excluded_columns: Vec<ExcludedColumn>,
    pub preview_rows: Vec<PreviewRow>,
}

/// Describe the detected roles and classify the earliest `sample_size` named rows.
///
/// Rows are classified individually, so a preview row may show an earlier
/// submission that a later duplicate overrides in the final result.
pub fn explain(table: &DataTable, roles: &ColumnRoles, sample_size: usize) -> DebugInfo {
    let total_required = roles.required.len();

    let preview_rows = (0..table.row_count())
        .filter_map(|row| classify_row(table, roles, row).map(|(_, status)| (row, status)))
        .take(sample_size)
        .map(|(row, status)| {
            let missing_cols = status.missing_columns().to_vec();
            PreviewRow {
                row,
                name: status.name().to_string(),
                status: status.label().to_string(),
                answers_found: total_required - missing_cols.len(),
                total_required,
                missing_cols,
            }
        })
        .collect();

    DebugInfo {
        detected_name_column: roles.identity_column().to_string(),
        detected_answer_columns: roles.required_columns(),
        identity_source: roles.identity_source.clone(),
        excluded_columns: roles.excluded.clone(),
        preview_rows,
    }
}

impl DebugInfo {
    /// One line per detector decision, for terminal output.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let why = match &self.identity_source {
            IdentitySource::Override => "chosen explicitly".to_string(),
            IdentitySource::HeaderMatch { token } => format!("header contains '{token}'"),
            IdentitySource::ValueProfile {
                unique_ratio,
                text_ratio,
            } => format!(
                "{:.0}% distinct text values ({:.0}% text)",
                unique_ratio * 100.0,
                text_ratio * 100.0
            ),
        };
        lines.push(format!("Name column: '{}' ({why})", self.detected_name_column));

        if self.detected_answer_columns.is_empty() {
            lines.push("Required columns: none".to_string());
        } else {
            lines.push(format!(
                "Required columns: {}",
                self.detected_answer_columns.join(", ")
            ));
        }

        for excluded in &self.excluded_columns {
            let reason = match &excluded.reason {
                ExclusionReason::MetadataHeader { token } => {
                    format!("metadata header ('{token}')")
                }
                ExclusionReason::Sparse { presence_ratio } => {
                    format!("answered in {:.0}% of rows", presence_ratio * 100.0)
                }
            };
            lines.push(format!("Skipped '{}': {reason}", excluded.name));
        }

        lines
    }
}
