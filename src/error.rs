// src/error.rs
use std::{io, path::PathBuf};

/// Coarse failure classes a caller can match on without caring about detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    ParseError,
    MissingColumn,
    EmptyTable,
}

/// Errors raised while loading the flight table or summarising it.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has no header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("CSV parse error in {} at line {}: {message}", .path.display(), fmt_line(.line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    #[error(
        "CSV parse error in {} at line {line}: expected {expected} fields, found {found}",
        .path.display()
    )]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("column {column:?} not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("cannot compute range of {column:?}: table has no rows")]
    EmptyTable { column: String },

    #[error("cannot compute range of {column:?}: every value is empty")]
    NoValues { column: String },
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } | Self::Io { .. } => ErrorKind::FileNotFound,
            Self::MissingHeader { .. } | Self::Parse { .. } | Self::FieldCount { .. } => {
                ErrorKind::ParseError
            }
            Self::MissingColumn { .. } => ErrorKind::MissingColumn,
            Self::EmptyTable { .. } | Self::NoValues { .. } => ErrorKind::EmptyTable,
        }
    }

    /// Split a `csv::Error` into an I/O failure or a parse failure with its line.
    /// Only the detail is kept; the position is carried in `line`.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let line = err.position().map(|p| p.line());
        let message = match err.into_kind() {
            csv::ErrorKind::Io(source) => return Self::Io { path, source },
            csv::ErrorKind::Utf8 { err, .. } => err.to_string(),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {} fields, found {}", expected_len, len),
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => "malformed record".to_string(),
        };
        Self::Parse {
            path,
            line,
            message,
        }
    }
}

fn fmt_line(line: &Option<u64>) -> String {
    line.map_or_else(|| "?".to_string(), |l| l.to_string())
}
