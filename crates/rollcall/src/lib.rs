//! Rollcall: reconcile a roster against submitted form responses.
//!
//! Given a table of responses (a spreadsheet export or uploaded CSV) and an
//! optional master list of expected participants, Rollcall works out who
//! responded completely, who left required answers blank, and who never
//! submitted at all.
//!
//! # Core Principles
//!
//! - **No configuration required**: the name column and the required answer
//!   columns are inferred from headers and values
//! - **Forgiving matching**: names are compared after case, whitespace and
//!   punctuation normalization
//! - **Explainable**: every result carries the detector's decisions and a
//!   preview of classified rows
//!
//! # Example
//!
//! ```no_run
//! use rollcall::{Rollcall, Roster};
//!
//! let roster = Roster::from_file("class.txt").unwrap();
//! let report = Rollcall::new().check_file("responses.csv", Some(&roster)).unwrap();
//!
//! println!("Responded: {}", report.result.responded_count);
//! println!("Missing: {:?}", report.result.missing_from_master);
//! ```

pub mod diagnostics;
pub mod error;
pub mod identity;
pub mod inference;
pub mod input;
pub mod reconcile;
pub mod schema;

mod rollcall;

pub use crate::rollcall::{CheckReport, Rollcall, RollcallConfig};
pub use diagnostics::{explain, DebugInfo, PreviewRow, DEFAULT_PREVIEW_ROWS};
pub use error::{ErrorKind, Result, RollcallError, SchemaError};
pub use identity::{normalize, NormalizedIdentity};
pub use inference::{DetectorConfig, SchemaDetector};
pub use input::{fetch_sheet, Cell, DataTable, Parser, ParserConfig, Roster, SheetUrl, SourceMetadata};
pub use reconcile::{reconcile, NotResponded, ReconciliationResult, ResponseStatus};
pub use schema::{ColumnRef, ColumnRoles, ExcludedColumn, ExclusionReason, IdentitySource};
