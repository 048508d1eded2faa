//! Identity and required-column detection.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::header::{classify_header, HeaderHint};
use super::profiler::ColumnProfiler;
use crate::error::{Result, RollcallError, SchemaError};
use crate::input::DataTable;
use crate::schema::{
    ColumnProfile, ColumnRef, ColumnRoles, ExcludedColumn, ExclusionReason, IdentitySource,
};

/// A column is required when strictly more than this fraction of rows answered it.
pub const DEFAULT_MIN_PRESENCE_RATIO: f64 = 0.10;

/// Fallback identity columns need at least this fraction of distinct values.
pub const DEFAULT_MIN_UNIQUE_RATIO: f64 = 0.8;

/// Fallback identity columns need at least this fraction of free-text values.
pub const DEFAULT_MIN_TEXT_RATIO: f64 = 0.8;

/// Rows inspected when profiling columns.
pub const DEFAULT_SAMPLE_ROWS: usize = 1000;

/// Tunable detection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Use this header as the identity column instead of detecting one.
    pub identity_column: Option<String>,
    pub min_presence_ratio: f64,
    pub min_unique_ratio: f64,
    pub min_text_ratio: f64,
    /// Maximum rows to profile (None = all).
    pub sample_rows: Option<usize>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            identity_column: None,
            min_presence_ratio: DEFAULT_MIN_PRESENCE_RATIO,
            min_unique_ratio: DEFAULT_MIN_UNIQUE_RATIO,
            min_text_ratio: DEFAULT_MIN_TEXT_RATIO,
            sample_rows: Some(DEFAULT_SAMPLE_ROWS),
        }
    }
}

impl DetectorConfig {
    /// Load thresholds from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RollcallError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every ratio lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("min_presence_ratio", self.min_presence_ratio),
            ("min_unique_ratio", self.min_unique_ratio),
            ("min_text_ratio", self.min_text_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(RollcallError::Config(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        if self.sample_rows == Some(0) {
            return Err(RollcallError::Config(
                "sample_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Selects the identity column and required columns of a table.
#[derive(Debug, Clone, Default)]
pub struct SchemaDetector {
    config: DetectorConfig,
}

impl SchemaDetector {
    /// Create a detector with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom thresholds.
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Assign column roles. Pure function of the table.
    pub fn detect(&self, table: &DataTable) -> std::result::Result<ColumnRoles, SchemaError> {
        if table.column_count() == 0 {
            return Err(SchemaError::NoColumns);
        }

        let profiler = ColumnProfiler::new(self.config.sample_rows);
        let profiles = profiler.profile_table(table);
        if profiles.first().is_none_or(|p| p.sampled == 0) {
            return Err(SchemaError::NoRows);
        }

        let (identity, identity_source) = self.select_identity(table, &profiles)?;

        let mut required = Vec::new();
        let mut excluded = Vec::new();
        for profile in profiles.iter().filter(|p| p.column.index != identity.index) {
            match self.exclusion_reason(profile) {
                Some(reason) => excluded.push(ExcludedColumn {
                    name: profile.column.name.clone(),
                    reason,
                }),
                None => required.push(profile.column.clone()),
            }
        }

        debug!(
            identity = %identity.name,
            required = ?required.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            excluded = excluded.len(),
            "detected column roles"
        );
        if required.is_empty() {
            warn!(identity = %identity.name, "no required columns detected; every named row counts as complete");
        }

        Ok(ColumnRoles {
            identity,
            required,
            identity_source,
            excluded,
        })
    }

    fn select_identity(
        &self,
        table: &DataTable,
        profiles: &[ColumnProfile],
    ) -> std::result::Result<(ColumnRef, IdentitySource), SchemaError> {
        if let Some(ref name) = self.config.identity_column {
            let index = table
                .column_index(name)
                .or_else(|| {
                    table
                        .headers
                        .iter()
                        .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
                })
                .ok_or_else(|| SchemaError::UnknownColumn { name: name.clone() })?;
            return Ok((profiles[index].column.clone(), IdentitySource::Override));
        }

        // Header match: most distinct values, then strongest token, then leftmost
        let by_header = profiles
            .iter()
            .filter(|p| p.non_blank > 0)
            .filter_map(|p| match classify_header(&p.column.name) {
                Some(m) if m.hint == HeaderHint::Name => Some((p, m)),
                _ => None,
            })
            .max_by(|(a, ma), (b, mb)| {
                a.unique_ratio()
                    .partial_cmp(&b.unique_ratio())
                    .unwrap_or(Ordering::Equal)
                    .then(mb.rank.cmp(&ma.rank))
                    .then(b.column.index.cmp(&a.column.index))
            });

        if let Some((profile, m)) = by_header {
            return Ok((
                profile.column.clone(),
                IdentitySource::HeaderMatch {
                    token: m.token.to_string(),
                },
            ));
        }

        // Value profile: leftmost column of mostly distinct free text
        let by_values = profiles.iter().find(|p| {
            p.non_blank > 0
                && classify_header(&p.column.name).is_none()
                && p.text_ratio() >= self.config.min_text_ratio
                && p.unique_ratio() >= self.config.min_unique_ratio
        });

        match by_values {
            Some(profile) => Ok((
                profile.column.clone(),
                IdentitySource::ValueProfile {
                    unique_ratio: profile.unique_ratio(),
                    text_ratio: profile.text_ratio(),
                },
            )),
            None => Err(SchemaError::NoIdentityColumn {
                columns: table.headers.clone(),
            }),
        }
    }

    fn exclusion_reason(&self, profile: &ColumnProfile) -> Option<ExclusionReason> {
        if let Some(m) = classify_header(&profile.column.name) {
            if m.hint == HeaderHint::Metadata {
                return Some(ExclusionReason::MetadataHeader {
                    token: m.token.to_string(),
                });
            }
        }

        let presence_ratio = profile.presence_ratio();
        if presence_ratio <= self.config.min_presence_ratio {
            return Some(ExclusionReason::Sparse { presence_ratio });
        }

        None
    }
}
