//! Export helpers for JSON and CSV performance reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use perf_landing::LandingResult;
use perf_takeoff::TakeoffResult;

/// Errors raised while writing reports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// JSON envelope tagging which calculator produced the result.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PerformanceReport<'a> {
    Takeoff(&'a TakeoffResult),
    Landing(&'a LandingResult),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(
    mut writer: W,
    report: &PerformanceReport<'_>,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write takeoff results as CSV. The header row is emitted with the first result.
pub fn write_takeoff_csv<W: Write>(
    writer: W,
    results: &[TakeoffResult],
) -> Result<(), ExportError> {
    write_csv(writer, results)
}

/// Write landing results as CSV. The header row is emitted with the first result.
pub fn write_landing_csv<W: Write>(
    writer: W,
    results: &[LandingResult],
) -> Result<(), ExportError> {
    write_csv(writer, results)
}

fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}
