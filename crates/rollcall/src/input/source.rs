//! Table abstraction and source metadata.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text values that spreadsheet exports emit for cells nobody filled in.
const BLANK_MARKERS: &[&str] = &["nan", "NaN", "None"];

/// Metadata about where a table came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name, upload name, or URL.
    pub origin: String,
    /// SHA-256 hash of the raw contents.
    pub hash: String,
    /// Size of the raw contents in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the table was ingested.
    pub ingested_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a freshly ingested table.
    pub fn new(
        origin: impl Into<String>,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        Self {
            origin: origin.into(),
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            ingested_at: Utc::now(),
        }
    }
}

/// A raw cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Build a cell from parsed text, mapping the empty string to `Empty`.
    pub fn from_text(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }

    /// Whether this cell counts as unanswered.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(n) => n.is_nan(),
            Cell::Text(s) => {
                let trimmed = s.trim();
                trimmed.is_empty() || BLANK_MARKERS.contains(&trimmed)
            }
        }
    }

    /// Render the cell as trimmed text. Whole numbers print without a fraction.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                Cow::Owned(format!("{}", *n as i64))
            }
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Text(s) => Cow::Borrowed(s.trim()),
        }
    }

    /// Whether the cell holds a number, either natively or as numeric text.
    pub fn is_numeric(&self) -> bool {
        match self {
            Cell::Number(n) => n.is_finite(),
            Cell::Text(s) => s.trim().parse::<f64>().is_ok_and(|n| n.is_finite()),
            Cell::Empty => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::from_text(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Represents ingested tabular data.
///
/// Rows are positionally aligned with `headers`; header names need not be
/// unique, so columns are addressed by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from string literals. Empty strings become `Cell::Empty`.
    pub fn from_strings<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| Cell::from_text(v.as_ref())).collect())
            .collect();
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell. Short rows read as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&Cell::Empty)
    }

    /// Find the first column with this exact header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Whether a row has at least one non-blank cell.
    pub fn row_has_data(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|r| r.iter().any(|c| !c.is_blank()))
    }
}
