//! Summarise a CSV of flight records: how many there are and which dates they span.

use anyhow::{Context, Result};
use tracing::info;

pub mod config;
pub mod error;
pub mod process;
pub mod report;

#[cfg(test)]
pub(crate) mod test_util;

use crate::{config::ReportConfig, report::Summary};

/// Load the configured file once and compute its summary.
pub fn run(config: &ReportConfig) -> Result<Summary> {
    let table = process::load(&config.input_path, config.row_policy)
        .with_context(|| format!("loading flight records from {:?}", config.input_path))?;

    let total_records = report::count(&table);
    let date_range = report::date_range(&table, &config.date_column)
        .with_context(|| format!("computing date range of {:?}", config.date_column))?;
    info!(total_records, min = %date_range.min, max = %date_range.max, "summary ready");

    Ok(Summary {
        total_records,
        date_range,
    })
}
