// src/config.rs
use std::path::PathBuf;

/// Input file read by the reporter, relative to the working directory.
pub const DEFAULT_INPUT: &str = "flight_data_2024.csv";

/// Column whose extremes are reported as the date range.
pub const DATE_COLUMN: &str = "fl_date";

/// What `load` does with a record whose field count differs from the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Abort the load on the first malformed record.
    #[default]
    Strict,
    /// Drop malformed records with a warning and keep going.
    SkipMalformed,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub date_column: String,
    pub row_policy: RowPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            date_column: DATE_COLUMN.to_string(),
            row_policy: RowPolicy::default(),
        }
    }
}

impl ReportConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_date_column(mut self, column: impl Into<String>) -> Self {
        self.date_column = column.into();
        self
    }

    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }
}
