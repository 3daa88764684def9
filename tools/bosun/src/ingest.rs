//! CSV ingestion and export
//!
//! The normalizer core never touches files; everything row-I/O lives here.
//! Blank cells are treated as absent fields (sensor dropout), not as empty
//! text, so a dropped swap partner surfaces as a row error instead of
//! silently swapping garbage.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use common::parse_bool_flexible;
use errors::{RowError, RowResult};
use windward_model::{Tack, TelemetryRow};

/// Column used to derive tack when no explicit flag column is given
const TWA_COLUMN: &str = "TWA_SGP_deg";

/// A parsed telemetry export: header order plus per-row results
pub struct TelemetryFile {
    pub headers: Vec<String>,
    pub rows: Vec<RowResult<TelemetryRow>>,
}

/// Read a telemetry CSV.
///
/// Tack resolution per row: the explicit flag column when `tack_column` is
/// given (boolean forms or port/starboard strings), otherwise the sign of
/// `TWA_SGP_deg`. Rows that cannot resolve a tack become row errors; a file
/// that carries neither source at all is rejected outright.
pub fn read_telemetry(path: &Path, tack_column: Option<&str>) -> Result<TelemetryFile> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

    let tack_index = match tack_column {
        Some(name) => Some(
            headers
                .iter()
                .position(|h| h == name)
                .with_context(|| format!("tack column '{}' not in header", name))?,
        ),
        None => None,
    };
    if tack_index.is_none() && !headers.iter().any(|h| h == TWA_COLUMN) {
        bail!(
            "no tack source: file has no '{}' column and no --tack-column was given",
            TWA_COLUMN
        );
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let row = match record {
            Ok(record) => parse_row(&headers, &record, tack_index),
            Err(e) => Err(RowError::malformed(e.to_string())),
        };
        rows.push(row);
    }

    debug!("read {} rows from {}", rows.len(), path.display());
    Ok(TelemetryFile { headers, rows })
}

fn parse_row(
    headers: &[String],
    record: &csv::StringRecord,
    tack_index: Option<usize>,
) -> RowResult<TelemetryRow> {
    let tack = resolve_tack(headers, record, tack_index)?;

    let mut row = TelemetryRow::new(tack);
    for (header, cell) in headers.iter().zip(record.iter()) {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(v) => row.insert(header.clone(), v),
            Err(_) => row.insert(header.clone(), cell),
        }
    }
    Ok(row)
}

fn resolve_tack(
    headers: &[String],
    record: &csv::StringRecord,
    tack_index: Option<usize>,
) -> RowResult<Tack> {
    match tack_index {
        Some(index) => {
            let cell = record.get(index).unwrap_or("").trim();
            if cell.is_empty() {
                return Err(RowError::MissingTack);
            }
            match parse_bool_flexible(cell) {
                Some(port_tack) => Ok(Tack::from_port_flag(port_tack)),
                None => cell.parse::<Tack>(),
            }
        },
        None => {
            let index = headers
                .iter()
                .position(|h| h == TWA_COLUMN)
                .ok_or(RowError::MissingTack)?;
            let cell = record.get(index).unwrap_or("").trim();
            if cell.is_empty() {
                return Err(RowError::MissingTack);
            }
            let twa: f64 = cell
                .parse()
                .map_err(|_| RowError::InvalidTack(cell.to_string()))?;
            Ok(Tack::from_twa(twa))
        },
    }
}

/// Write normalized rows back out in the input's column order.
///
/// Fields a row never carried are written as empty cells.
pub fn write_telemetry(path: &Path, headers: &[String], rows: &[TelemetryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;

    for row in rows {
        let record: Vec<String> = headers
            .iter()
            .map(|h| row.get(h).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
