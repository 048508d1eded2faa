//! CSV/TSV parser with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{Cell, DataTable, SourceMetadata};
use crate::error::{Result, RollcallError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// File extensions accepted as delimited text.
const TEXT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        check_extension(&path.to_string_lossy())?;

        let contents = fs::read(path).map_err(|e| RollcallError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let origin = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.parse_bytes(&contents, origin)
    }

    /// Parse an uploaded file, rejecting names that are not delimited text.
    pub fn parse_upload(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> Result<(DataTable, SourceMetadata)> {
        if file_name.trim().is_empty() {
            return Err(RollcallError::Validation("No selected file".to_string()));
        }
        check_extension(file_name)?;
        self.parse_bytes(contents, file_name)
    }

    /// Parse raw bytes from any origin.
    pub fn parse_bytes(
        &self,
        contents: &[u8],
        origin: impl Into<String>,
    ) -> Result<(DataTable, SourceMetadata)> {
        let origin = origin.into();

        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(contents),
        };

        let table = self.read_table(contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            origin = %origin,
            format = %format,
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed table"
        );

        let metadata = SourceMetadata::new(
            origin,
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    fn read_table(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        // A leading UTF-8 BOM would otherwise end up in the first header.
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        // An empty input yields a single empty header; treat it as no columns.
        if headers.iter().all(|h| h.is_empty()) && headers.len() <= 1 {
            return Ok(DataTable::default());
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<Cell> = record.iter().map(Cell::from_text).collect();

            // Pad or truncate to the header width
            row.resize(expected_cols, Cell::Empty);
            rows.push(row);
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn check_extension(name: &str) -> Result<()> {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some(ext) if TEXT_EXTENSIONS.contains(&ext) => Ok(()),
        Some("xls" | "xlsx") => Err(RollcallError::UnsupportedFormat(
            "Excel workbooks are not supported; export the sheet as CSV".to_string(),
        )),
        Some(ext) => Err(RollcallError::UnsupportedFormat(format!(
            "'.{ext}' files are not supported; upload CSV or TSV"
        ))),
        None => Err(RollcallError::UnsupportedFormat(format!(
            "'{name}' has no file extension; upload CSV or TSV"
        ))),
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tabs rarely appear inside answers
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
