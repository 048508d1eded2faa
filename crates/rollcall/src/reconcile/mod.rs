//! Reconciliation of submitted rows against an optional roster.

mod engine;
mod result;
mod status;

pub use engine::{collect_submissions, reconcile};
pub use result::{NotResponded, ReconciliationResult};
pub use status::{classify_row, ResponseStatus};
