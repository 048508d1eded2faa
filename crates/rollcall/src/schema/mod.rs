//! Schema types describing how a table's columns are used.

mod column;
mod roles;

pub use column::{ColumnProfile, ColumnRef};
pub use roles::{ColumnRoles, ExcludedColumn, ExclusionReason, IdentitySource};
