// src/process/mod.rs
use csv::ReaderBuilder;

use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};
use tracing::{debug, info, warn};

use crate::{
    config::RowPolicy,
    error::ReportError,
    process::utils::{clean_header, is_blank_record},
};

pub mod date_parser;
pub mod utils;

/// Flight records as read from disk. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the first line of the file.
    headers: Vec<String>,
    /// Each data line, one String per field, in file order.
    /// Every row is exactly `headers.len()` wide.
    rows: Vec<Vec<String>>,
}

/// A borrowed view of one record, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: usize,
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// 0-based position in file order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .map(|i| self.values[i].as_str())
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

impl Table {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of the named column in row order, or None if there is no such column.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| r[idx].as_str()))
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            index,
            headers: &self.headers,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(index, values)| Row {
            index,
            headers: &self.headers,
            values,
        })
    }
}

/// Open `path` and read it as comma-separated records:
/// - the first record is the header row;
/// - every following record becomes one row, in file order;
/// - blank lines are skipped;
/// - a record whose width differs from the header either fails the load
///   (`RowPolicy::Strict`) or is dropped (`RowPolicy::SkipMalformed`).
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P, policy: RowPolicy) -> Result<Table, ReportError> {
    let path = path.as_ref();

    // 1) Open the file; the reader owns the handle until it is dropped below
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // width is checked below so the policy decides
        .from_reader(BufReader::new(file));

    // 2) Header row
    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| ReportError::from_csv(path, e))?
        .iter()
        .map(clean_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(ReportError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let expected = headers.len();
    debug!(columns = expected, ?headers, "parsed header");

    // 3) Data rows
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result.map_err(|e| ReportError::from_csv(path, e))?;
        if is_blank_record(&record) {
            continue;
        }

        if record.len() != expected {
            let line = record.position().map_or(0, |p| p.line());
            match policy {
                RowPolicy::Strict => {
                    return Err(ReportError::FieldCount {
                        path: path.to_path_buf(),
                        line,
                        expected,
                        found: record.len(),
                    });
                }
                RowPolicy::SkipMalformed => {
                    warn!(line, expected, found = record.len(), "skipping malformed record");
                    skipped += 1;
                    continue;
                }
            }
        }

        rows.push(record.iter().map(str::to_string).collect());
    }
    // release the file handle before handing the table out
    drop(rdr);

    if skipped > 0 {
        warn!(skipped, "dropped malformed records");
    }
    info!(rows = rows.len(), columns = expected, "loaded table");

    Ok(Table::new(headers, rows))
}
