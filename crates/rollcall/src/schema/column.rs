//! Column references and per-column statistics.

use serde::{Deserialize, Serialize};

/// A column addressed by position, with its header for display.
///
/// Headers may repeat within a table, so the index is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Zero-based position in the table.
    pub index: usize,
    /// Header text.
    pub name: String,
}

impl ColumnRef {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Statistics gathered for one column over the sampled rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub column: ColumnRef,
    /// Number of rows inspected.
    pub sampled: usize,
    /// Number of non-blank cells.
    pub non_blank: usize,
    /// Number of distinct non-blank values, compared as normalized text.
    pub unique: usize,
    /// Non-blank cells holding numbers.
    pub numeric: usize,
    /// Non-blank cells that look like dates or timestamps.
    pub date_like: usize,
}

impl ColumnProfile {
    /// Fraction of sampled rows with an answer.
    pub fn presence_ratio(&self) -> f64 {
        ratio(self.non_blank, self.sampled)
    }

    /// Fraction of non-blank values that are distinct.
    pub fn unique_ratio(&self) -> f64 {
        ratio(self.unique, self.non_blank)
    }

    /// Fraction of non-blank values that are free text (neither numbers nor dates).
    pub fn text_ratio(&self) -> f64 {
        let non_text = (self.numeric + self.date_like).min(self.non_blank);
        ratio(self.non_blank - non_text, self.non_blank)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
