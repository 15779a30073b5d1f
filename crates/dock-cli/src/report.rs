//! Human-readable survey report.

use chrono::{DateTime, Utc};
use dock_core::{DockReport, Point, SurveyResult};
use std::fmt;

/// Text view of a report, stamped with its generation time.
pub struct ReportView<'a> {
    report: &'a DockReport,
    generated_at: DateTime<Utc>,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a DockReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            report,
            generated_at,
        }
    }
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Dock placement report ({})",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(
            f,
            "Input: {} fields, {} buildings",
            self.report.fields.len(),
            self.report.buildings.len()
        )?;

        for result in self.report.scenarios() {
            writeln!(f)?;
            write_scenario(f, result)?;
        }
        Ok(())
    }
}

pub fn render(report: &DockReport, generated_at: DateTime<Utc>) -> String {
    ReportView::new(report, generated_at).to_string()
}

fn write_scenario(f: &mut fmt::Formatter<'_>, result: &SurveyResult) -> fmt::Result {
    writeln!(f, "== {} ==", result.scenario.label())?;

    let (Some(dock), None) = (result.dock, result.error) else {
        return match result.error {
            Some(e) => writeln!(f, "Error: {e}"),
            None => writeln!(f, "Error: no dock selected"),
        };
    };

    writeln!(f, "Dock: {}", PointText(&dock))?;
    writeln!(
        f,
        "Fields surveyed: {} of {}",
        result.surveyed_field_count, result.target_field_count
    )?;
    writeln!(f, "Flights: {}", result.flights.len())?;
    writeln!(f, "Flight time: {:.1} min", result.total_flight_minutes)?;
    writeln!(
        f,
        "Flight and charging time: {:.1} min",
        result.total_flight_and_charging_minutes
    )?;
    match result.nearest_building_m {
        Some(meters) => writeln!(f, "Nearest building: {meters:.0} m")?,
        None => writeln!(f, "Nearest building: unavailable")?,
    }

    for (idx, flight) in result.flights.iter().enumerate() {
        let minutes = result.flight_minutes.get(idx).copied().unwrap_or_default();
        writeln!(f, "Flight {} ({minutes:.1} min):", idx + 1)?;
        for point in &flight.points {
            writeln!(f, "  {}", PointText(point))?;
        }
    }

    if !result.unsurveyed.is_empty() {
        writeln!(f, "Out of reach:")?;
        for point in &result.unsurveyed {
            writeln!(f, "  {}", PointText(point))?;
        }
    }
    Ok(())
}

struct PointText<'a>(&'a Point);

impl fmt::Display for PointText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.0.lat, self.0.lon)
    }
}
