//! Reconciliation output.

use serde::{Deserialize, Serialize};

use super::status::ResponseStatus;
use crate::diagnostics::DebugInfo;

/// A participant who submitted but left required columns blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotResponded {
    pub name: String,
    pub missing: Vec<String>,
}

/// Who responded, who did not, and who never appeared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub total_students: usize,
    pub responded_count: usize,
    pub not_responded_count: usize,
    pub responded_list: Vec<String>,
    pub not_responded_list: Vec<NotResponded>,
    /// Roster entries with no matching row. Empty without a roster.
    #[serde(default)]
    pub missing_from_master: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<DebugInfo>,
}

impl ReconciliationResult {
    /// Partition statuses, preserving their order within each list.
    pub fn from_statuses(
        total_students: usize,
        statuses: Vec<ResponseStatus>,
        missing_from_master: Vec<String>,
    ) -> Self {
        let mut responded_list = Vec::new();
        let mut not_responded_list = Vec::new();

        for status in statuses {
            match status {
                ResponseStatus::Responded { name } => responded_list.push(name),
                ResponseStatus::Incomplete {
                    name,
                    missing_columns,
                } => not_responded_list.push(NotResponded {
                    name,
                    missing: missing_columns,
                }),
            }
        }

        Self {
            total_students,
            responded_count: responded_list.len(),
            not_responded_count: not_responded_list.len(),
            responded_list,
            not_responded_list,
            missing_from_master,
            debug_info: None,
        }
    }

    /// Attach diagnostics, producing the final result.
    pub fn with_debug_info(self, debug_info: DebugInfo) -> Self {
        Self {
            debug_info: Some(debug_info),
            ..self
        }
    }
}
