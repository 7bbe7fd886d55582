// src/report.rs
use std::fmt;

use tracing::debug;

use crate::{error::ReportError, process::date_parser::parse_flight_date, process::Table};

/// How the values of a date column were compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrdering {
    /// Every non-empty value parsed as a date.
    Chronological,
    /// At least one value did not parse; raw strings were compared instead.
    Lexicographic,
}

/// Extremes of a date column, in the form they were written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub min: String,
    pub max: String,
    pub ordering: DateOrdering,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_records: usize,
    pub date_range: DateRange,
}

impl Summary {
    pub fn lines(&self) -> [String; 2] {
        report(
            self.total_records,
            &self.date_range.min,
            &self.date_range.max,
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [total, range] = self.lines();
        write!(f, "{}\n{}", total, range)
    }
}

pub fn count(table: &Table) -> usize {
    table.len()
}

/// Min and max of `column`, skipping empty values.
///
/// Values compare chronologically when all of them are recognisable dates and
/// lexicographically otherwise. Ties keep the earliest row.
pub fn date_range(table: &Table, column: &str) -> Result<DateRange, ReportError> {
    let values = table
        .column(column)
        .ok_or_else(|| ReportError::MissingColumn {
            column: column.to_string(),
            available: table.headers().join(", "),
        })?;
    if table.is_empty() {
        return Err(ReportError::EmptyTable {
            column: column.to_string(),
        });
    }

    let values: Vec<&str> = values.map(str::trim).filter(|v| !v.is_empty()).collect();
    if values.is_empty() {
        return Err(ReportError::NoValues {
            column: column.to_string(),
        });
    }

    let dates: Option<Vec<_>> = values.iter().map(|v| parse_flight_date(v)).collect();
    let (lo, hi, ordering) = match dates {
        Some(dates) => {
            let (lo, hi) = extremes(&dates);
            (lo, hi, DateOrdering::Chronological)
        }
        None => {
            let (lo, hi) = extremes(&values);
            (lo, hi, DateOrdering::Lexicographic)
        }
    };
    debug!(column, ?ordering, values = values.len(), "computed date range");

    Ok(DateRange {
        min: values[lo].to_string(),
        max: values[hi].to_string(),
        ordering,
    })
}

/// Indices of the first minimum and first maximum. `items` must be non-empty.
fn extremes<T: Ord>(items: &[T]) -> (usize, usize) {
    let (mut lo, mut hi) = (0, 0);
    for (i, item) in items.iter().enumerate().skip(1) {
        if *item < items[lo] {
            lo = i;
        }
        if *item > items[hi] {
            hi = i;
        }
    }
    (lo, hi)
}

/// The two report lines, without trailing newlines.
pub fn report(count: usize, min: &str, max: &str) -> [String; 2] {
    [
        format!("Total records: {}", group_thousands(count)),
        format!("Date range: {} to {}", min, max),
    ]
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
