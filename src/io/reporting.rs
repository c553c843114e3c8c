// src/io/reporting.rs

use crate::io::IoError;
use crate::simulation::engine::{BalanceReport, DayRecord};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the per-day simulation log as CSV to any writer.
pub fn write_daily_log_to<W: Write>(writer: W, data: &[DayRecord]) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the per-day simulation log to a CSV file.
///
/// # Arguments
/// * `file_path` - Where to save the file (e.g., "results/atm_17.csv").
/// * `data` - The history recorded by the simulation engine.
pub fn write_daily_log(file_path: impl AsRef<Path>, data: &[DayRecord]) -> Result<(), IoError> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    write_daily_log_to(file, data)?;

    info!(rows = data.len(), path = %path.display(), "exported daily log");
    Ok(())
}

/// Writes the output bundle as a JSON object keyed by sequence name.
pub fn write_report_json<W: Write>(writer: W, report: &BalanceReport) -> Result<(), IoError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
