//! CLI command implementations.

pub mod check;
pub mod detect;
pub mod serve;

use std::path::PathBuf;

use rollcall::{DetectorConfig, RollcallConfig};

/// Build the library configuration shared by `check` and `detect`.
fn load_config(
    config: Option<PathBuf>,
    name_column: Option<String>,
) -> Result<RollcallConfig, Box<dyn std::error::Error>> {
    let mut detector = match config {
        Some(path) => DetectorConfig::from_json_file(&path)?,
        None => DetectorConfig::default(),
    };
    if name_column.is_some() {
        detector.identity_column = name_column;
    }

    Ok(RollcallConfig {
        detector,
        ..RollcallConfig::default()
    })
}
