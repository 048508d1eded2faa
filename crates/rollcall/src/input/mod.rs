//! Input parsing and data source handling.

mod parser;
mod remote;
mod roster;
mod source;

pub use parser::{Parser, ParserConfig};
pub use remote::{fetch_sheet, SheetUrl, DEFAULT_FETCH_TIMEOUT};
pub use roster::Roster;
pub use source::{Cell, DataTable, SourceMetadata};
