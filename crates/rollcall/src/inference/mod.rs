//! Schema detection: which column names a person, which columns must be answered.

mod detector;
mod header;
mod profiler;

pub use detector::{
    DetectorConfig, SchemaDetector, DEFAULT_MIN_PRESENCE_RATIO, DEFAULT_MIN_TEXT_RATIO,
    DEFAULT_MIN_UNIQUE_RATIO, DEFAULT_SAMPLE_ROWS,
};
pub use header::{classify_header, header_has_name_token, is_name_label, HeaderHint, HeaderMatch};
pub use profiler::ColumnProfiler;
