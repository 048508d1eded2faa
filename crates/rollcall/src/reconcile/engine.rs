//! Roster-to-table reconciliation.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::info;

use super::result::ReconciliationResult;
use super::status::{classify_row, ResponseStatus};
use crate::identity::{normalize, NormalizedIdentity};
use crate::input::{DataTable, Roster};
use crate::schema::ColumnRoles;

/// Latest status per identity, ordered by first appearance in the table.
///
/// Later rows overwrite earlier ones for the same person but keep the
/// earlier position.
pub fn collect_submissions(
    table: &DataTable,
    roles: &ColumnRoles,
) -> IndexMap<NormalizedIdentity, ResponseStatus> {
    let mut submissions = IndexMap::new();
    for row in 0..table.row_count() {
        if let Some((key, status)) = classify_row(table, roles, row) {
            submissions.insert(key, status);
        }
    }
    submissions
}

/// Classify every participant.
///
/// With a non-empty roster, the roster defines who is counted: table rows for
/// people not on it are ignored, and roster entries without a row are listed
/// in `missing_from_master`. Without one, every distinct name in the table is
/// counted.
pub fn reconcile(
    table: &DataTable,
    roles: &ColumnRoles,
    roster: Option<&Roster>,
) -> ReconciliationResult {
    let submissions = collect_submissions(table, roles);

    let result = match roster.filter(|r| !r.is_empty()) {
        None => {
            let total = submissions.len();
            ReconciliationResult::from_statuses(total, submissions.into_values().collect(), Vec::new())
        }
        Some(roster) => reconcile_roster(&submissions, roster),
    };

    info!(
        total = result.total_students,
        responded = result.responded_count,
        not_responded = result.not_responded_count,
        missing = result.missing_from_master.len(),
        "reconciled responses"
    );

    result
}

fn reconcile_roster(
    submissions: &IndexMap<NormalizedIdentity, ResponseStatus>,
    roster: &Roster,
) -> ReconciliationResult {
    let mut seen = HashSet::new();
    let mut statuses = Vec::new();
    let mut missing = Vec::new();

    for entry in roster.entries() {
        let key = normalize(entry);
        // Entries for the same person collapse onto the first spelling
        if !seen.insert(key.clone()) {
            continue;
        }

        match submissions.get(&key) {
            Some(status) if !key.is_empty() => statuses.push(status.clone().renamed(entry.as_str())),
            _ => missing.push(entry.clone()),
        }
    }

    let extra = submissions.keys().filter(|k| !seen.contains(*k)).count();
    if extra > 0 {
        info!(extra, "ignoring rows for names not on the roster");
    }

    ReconciliationResult::from_statuses(seen.len(), statuses, missing)
}
