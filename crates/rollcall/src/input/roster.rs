//! Master list ("roster") loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RollcallError};
use crate::inference::{header_has_name_token, is_name_label};

/// Ordered list of expected participants.
///
/// An empty roster means there is no master list and totals come from the
/// table alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<String>,
}

impl Roster {
    /// Build a roster from names, dropping blank entries.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(Into::into)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { entries }
    }

    /// Parse roster text.
    ///
    /// Plain text is read as one name per line. When the first line is a CSV
    /// header with a name-like column, that column is read instead. A first
    /// line that is only a label such as "Name" is skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text.lines().skip_while(|l| l.trim().is_empty()).peekable();

        let Some(&first_line) = lines.peek() else {
            return Ok(Self::default());
        };

        if !first_line.contains(',') {
            if is_name_label(first_line.trim().trim_matches('"')) {
                lines.next();
            }
            return Ok(Self::new(lines));
        }

        let name_column = first_line
            .split(',')
            .position(|field| header_has_name_token(field.trim().trim_matches('"')));

        match name_column {
            Some(index) => Self::parse_csv_column(text, index),
            None => Ok(Self::new(lines)),
        }
    }

    /// Load a roster file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RollcallError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text)
    }

    fn parse_csv_column(text: &str, index: usize) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut names = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(name) = record.get(index) {
                names.push(name.to_string());
            }
        }
        Ok(Self::new(names))
    }

    /// Roster entries in their original order and spelling.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether no master list was supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
