//! Main Rollcall struct and public API.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{explain, DEFAULT_PREVIEW_ROWS};
use crate::error::Result;
use crate::inference::{DetectorConfig, SchemaDetector};
use crate::input::{fetch_sheet, DataTable, Parser, ParserConfig, Roster, SourceMetadata, DEFAULT_FETCH_TIMEOUT};
use crate::reconcile::{reconcile, ReconciliationResult};
use crate::schema::ColumnRoles;

/// Configuration for a Rollcall check.
#[derive(Debug, Clone)]
pub struct RollcallConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Schema detection thresholds.
    pub detector: DetectorConfig,
    /// Rows to include in the diagnostics preview.
    pub preview_rows: usize,
    /// Timeout for downloading remote sheets.
    pub fetch_timeout: Duration,
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            detector: DetectorConfig::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Result of checking a file or remote sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Where the table came from.
    pub source: SourceMetadata,
    /// Reconciliation output, including diagnostics.
    pub result: ReconciliationResult,
}

/// Ingest, detect, reconcile, explain.
///
/// Holds only configuration, so one instance can serve concurrent checks.
pub struct Rollcall {
    config: RollcallConfig,
    parser: Parser,
    detector: SchemaDetector,
}

impl Rollcall {
    /// Create a new Rollcall instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(RollcallConfig::default())
    }

    /// Create a Rollcall instance with custom configuration.
    pub fn with_config(config: RollcallConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let detector = SchemaDetector::with_config(config.detector.clone());
        Self {
            config,
            parser,
            detector,
        }
    }

    pub fn config(&self) -> &RollcallConfig {
        &self.config
    }

    /// Detect column roles without reconciling.
    pub fn detect(&self, table: &DataTable) -> Result<ColumnRoles> {
        Ok(self.detector.detect(table)?)
    }

    /// Reconcile an already ingested table.
    pub fn check_table(
        &self,
        table: &DataTable,
        roster: Option<&Roster>,
    ) -> Result<ReconciliationResult> {
        let roles = self.detect(table)?;
        let result = reconcile(table, &roles, roster);
        let debug_info = explain(table, &roles, self.config.preview_rows);
        Ok(result.with_debug_info(debug_info))
    }

    /// Parse a CSV/TSV file and reconcile it.
    pub fn check_file(&self, path: impl AsRef<Path>, roster: Option<&Roster>) -> Result<CheckReport> {
        let (table, source) = self.parser.parse_file(path)?;
        self.report(table, source, roster)
    }

    /// Parse an uploaded file and reconcile it.
    pub fn check_upload(
        &self,
        file_name: &str,
        contents: &[u8],
        roster: Option<&Roster>,
    ) -> Result<CheckReport> {
        let (table, source) = self.parser.parse_upload(file_name, contents)?;
        self.report(table, source, roster)
    }

    /// Download a shared sheet and reconcile it. Blocks on the network.
    pub fn check_url(&self, url: &str, roster: Option<&Roster>) -> Result<CheckReport> {
        let (table, source) = fetch_sheet(url, &self.parser, self.config.fetch_timeout)?;
        self.report(table, source, roster)
    }

    fn report(
        &self,
        table: DataTable,
        source: SourceMetadata,
        roster: Option<&Roster>,
    ) -> Result<CheckReport> {
        let result = self.check_table(&table, roster)?;
        Ok(CheckReport { source, result })
    }
}

impl Default for Rollcall {
    fn default() -> Self {
        Self::new()
    }
}
