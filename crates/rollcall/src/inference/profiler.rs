//! Column profiling over a row sample.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::identity::normalize;
use crate::input::{Cell, DataTable};
use crate::schema::{ColumnProfile, ColumnRef};

// Date and timestamp shapes produced by form exports, compiled once.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}[-/.]\d{1,2}[-/.]\d{1,2}").unwrap(), // ISO / alt ISO
        Regex::new(r"^\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}").unwrap(), // US / European
        Regex::new(r"^\d{1,2}:\d{2}(:\d{2})?").unwrap(),        // time of day
    ]
});

/// Computes [`ColumnProfile`]s from the first rows that contain data.
#[derive(Debug, Clone)]
pub struct ColumnProfiler {
    /// Maximum rows to inspect (None = all).
    sample_rows: Option<usize>,
}

impl ColumnProfiler {
    pub fn new(sample_rows: Option<usize>) -> Self {
        Self { sample_rows }
    }

    /// Indices of the rows the profiler inspects. Fully blank rows are skipped.
    pub fn sample(&self, table: &DataTable) -> Vec<usize> {
        let limit = self.sample_rows.unwrap_or(usize::MAX);
        (0..table.row_count())
            .filter(|&row| table.row_has_data(row))
            .take(limit)
            .collect()
    }

    /// Profile every column.
    pub fn profile_table(&self, table: &DataTable) -> Vec<ColumnProfile> {
        let rows = self.sample(table);
        table
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| profile_column(table, &rows, ColumnRef::new(index, name.as_str())))
            .collect()
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new(None)
    }
}

fn profile_column(table: &DataTable, rows: &[usize], column: ColumnRef) -> ColumnProfile {
    let mut non_blank = 0;
    let mut numeric = 0;
    let mut date_like = 0;
    let mut distinct = HashSet::new();

    for &row in rows {
        let cell = table.cell(row, column.index);
        if cell.is_blank() {
            continue;
        }
        non_blank += 1;

        if cell.is_numeric() {
            numeric += 1;
        } else if looks_like_date(cell) {
            date_like += 1;
        }
        distinct.insert(normalize(&cell.as_text()));
    }

    ColumnProfile {
        column,
        sampled: rows.len(),
        non_blank,
        unique: distinct.len(),
        numeric,
        date_like,
    }
}

fn looks_like_date(cell: &Cell) -> bool {
    let text = cell.as_text();
    DATE_PATTERNS.iter().any(|p| p.is_match(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_counts() {
        let table = DataTable::from_strings(
            ["Name", "Age", "Submitted"],
            [
                vec!["Alice", "20", "2024/01/15 10:00:00"],
                vec!["alice", "", "1/16/2024 9:30:00"],
                vec!["Bob", "22", ""],
                vec!["", "", ""],
            ],
        );

        let profiles = ColumnProfiler::default().profile_table(&table);
        assert_eq!(profiles.len(), 3);

        let name = &profiles[0];
        assert_eq!(name.sampled, 3);
        assert_eq!(name.non_blank, 3);
        assert_eq!(name.unique, 2);
        assert_eq!(name.text_ratio(), 1.0);

        let age = &profiles[1];
        assert_eq!(age.numeric, 2);
        assert_eq!(age.text_ratio(), 0.0);

        let submitted = &profiles[2];
        assert_eq!(submitted.date_like, 2);
        assert_eq!(submitted.text_ratio(), 0.0);
    }

    #[test]
    fn test_sample_limit() {
        let table = DataTable::from_strings(["Name"], [vec!["A"], vec!["B"], vec!["C"]]);
        let profiler = ColumnProfiler::new(Some(2));
        assert_eq!(profiler.sample(&table), vec![0, 1]);
        assert_eq!(profiler.profile_table(&table)[0].sampled, 2);
    }
}
