//! Remote spreadsheet ingestion.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use super::parser::Parser;
use super::source::{DataTable, SourceMetadata};
use crate::error::{Result, RollcallError};

static SHEET_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("valid sheet id pattern"));

/// Default timeout for downloading a sheet export.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// A Google Sheets document reference extracted from a share URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetUrl {
    id: String,
}

impl SheetUrl {
    /// Extract the document id from a share or edit URL.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RollcallError::Validation("No data provided".to_string()));
        }

        SHEET_ID
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| Self {
                id: m.as_str().to_string(),
            })
            .ok_or_else(|| RollcallError::InvalidSheetUrl(url.to_string()))
    }

    /// The document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// URL of the CSV export for the first sheet.
    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
            self.id
        )
    }
}

/// Download a sheet's CSV export and parse it.
///
/// Uses a blocking client; async callers should run this on a blocking thread.
pub fn fetch_sheet(
    url: &str,
    parser: &Parser,
    timeout: Duration,
) -> Result<(DataTable, SourceMetadata)> {
    let sheet = SheetUrl::parse(url)?;
    let export_url = sheet.export_url();

    info!(sheet_id = sheet.id(), "fetching sheet export");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| RollcallError::Fetch(e.to_string()))?;

    let response = client
        .get(&export_url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| RollcallError::Fetch(e.to_string()))?;

    let body = response
        .bytes()
        .map_err(|e| RollcallError::Fetch(e.to_string()))?;

    parser.parse_bytes(&body, export_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_share_url() {
        let sheet = SheetUrl::parse(
            "https://docs.google.com/spreadsheets/d/1AbC-d_EF/edit?usp=sharing",
        )
        .unwrap();
        assert_eq!(sheet.id(), "1AbC-d_EF");
        assert_eq!(
            sheet.export_url(),
            "https://docs.google.com/spreadsheets/d/1AbC-d_EF/export?format=csv"
        );
    }

    #[test]
    fn test_rejects_urls_without_id() {
        let err = SheetUrl::parse("https://example.com/form").unwrap_err();
        assert!(matches!(err, RollcallError::InvalidSheetUrl(_)));

        let err = SheetUrl::parse("   ").unwrap_err();
        assert!(matches!(err, RollcallError::Validation(_)));
    }
}
