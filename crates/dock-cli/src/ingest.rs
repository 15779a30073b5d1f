//! Location list ingestion.
//!
//! Rows are `latitude,longitude,role`. Anything that does not parse into a
//! field or building is skipped and logged; it never aborts the run.

use csv::{ReaderBuilder, StringRecord, Trim};
use dock_core::{LocationRole, Point};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Points read from one input plus how many rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub points: Vec<Point>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected 3 columns, found {0}")]
    ColumnCount(usize),
    #[error("invalid latitude {0:?}")]
    Latitude(String),
    #[error("invalid longitude {0:?}")]
    Longitude(String),
    #[error("unknown role {0:?}")]
    Role(String),
}

/// Read the location list at `path`. An unreadable file yields no points.
pub fn load_points(path: &Path) -> IngestOutcome {
    match File::open(path) {
        Ok(file) => read_points(file),
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to open location list: {}", e);
            IngestOutcome::default()
        }
    }
}

pub fn read_points<R: Read>(reader: R) -> IngestOutcome {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut outcome = IngestOutcome::default();
    for (idx, record) in rdr.records().enumerate() {
        let row = idx + 1;
        let parsed = match record {
            Ok(record) => parse_row(&record),
            Err(e) => {
                tracing::warn!(row, "Skipping unreadable row: {}", e);
                outcome.skipped += 1;
                continue;
            }
        };
        match parsed {
            Ok(point) => outcome.points.push(point),
            Err(e) => {
                tracing::warn!(row, "Skipping row: {}", e);
                outcome.skipped += 1;
            }
        }
    }

    tracing::info!(
        points = outcome.points.len(),
        skipped = outcome.skipped,
        "Location list read"
    );
    outcome
}

pub fn parse_row(record: &StringRecord) -> Result<Point, RowError> {
    if record.len() != 3 {
        return Err(RowError::ColumnCount(record.len()));
    }

    let lat = parse_coordinate(&record[0], 90.0)
        .ok_or_else(|| RowError::Latitude(record[0].to_string()))?;
    let lon = parse_coordinate(&record[1], 180.0)
        .ok_or_else(|| RowError::Longitude(record[1].to_string()))?;

    match LocationRole::from_label(&record[2]) {
        LocationRole::Unidentified => Err(RowError::Role(record[2].to_string())),
        role => Ok(Point::new(lat, lon, role)),
    }
}

fn parse_coordinate(raw: &str, limit: f64) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value.abs() <= limit).then_some(value)
}
