//! Flight coordinate export for external path visualization.
//!
//! Each flight becomes one block: a `# <label> flight <n>` header followed by
//! one `lat,lon` line per point, blocks separated by a blank line.

use anyhow::{Context, Result};
use dock_core::{Flight, SurveyResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn write_flights<W: Write>(
    writer: &mut W,
    label: &str,
    flights: &[Flight],
) -> std::io::Result<()> {
    for (idx, flight) in flights.iter().enumerate() {
        if idx > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "# {} flight {}", label, idx + 1)?;
        for point in &flight.points {
            writeln!(writer, "{},{}", point.lat, point.lon)?;
        }
    }
    Ok(())
}

/// File name used for a scenario's flight export.
pub fn export_file_name(result: &SurveyResult) -> String {
    format!("flights_{}.txt", result.scenario.label().replace('-', "_"))
}

/// Write a scenario's flights under `dir`.
///
/// Returns the written path, or `None` when the scenario has no flights and
/// nothing was written.
pub fn export_scenario(dir: &Path, result: &SurveyResult) -> Result<Option<PathBuf>> {
    if result.flights.is_empty() {
        return Ok(None);
    }

    let path = dir.join(export_file_name(result));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_flights(&mut writer, result.scenario.label(), &result.flights)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;

    tracing::info!(path = %path.display(), flights = result.flights.len(), "Exported flights");
    Ok(Some(path))
}
