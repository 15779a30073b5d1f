//! Runs both dock scenarios over one set of locations.

use crate::models::{LocationRole, Point, Scenario, SurveyError, SurveyResult};
use crate::routing::build_flights;
use crate::rules::{ConstraintError, SurveyConstraints};
use crate::selection::select_center;
use crate::survey::summarize;
use serde::{Deserialize, Serialize};

/// Both scenario outcomes plus the point sets they were computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockReport {
    pub fields: Vec<Point>,
    pub buildings: Vec<Point>,
    pub field_start: SurveyResult,
    pub building_start: SurveyResult,
}

impl DockReport {
    pub fn scenarios(&self) -> [&SurveyResult; 2] {
        [&self.field_start, &self.building_start]
    }
}

/// Split ingested points into fields and buildings, dropping unidentified ones.
/// Repeated points keep only their first occurrence, so input order is kept
/// within each set.
pub fn partition_points(points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let fields = unique_points(points.iter().filter(|p| p.role == LocationRole::Field));
    let buildings = unique_points(points.iter().filter(|p| p.role == LocationRole::Building));
    (fields, buildings)
}

/// Drop repeats, keeping the first occurrence of each point.
pub fn unique_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::new();
    for point in points {
        if !unique.contains(point) {
            unique.push(*point);
        }
    }
    unique
}

#[derive(Debug, Clone, Default)]
pub struct DockLocationEngine {
    rules: SurveyConstraints,
}

impl DockLocationEngine {
    pub fn new(rules: SurveyConstraints) -> Result<Self, ConstraintError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &SurveyConstraints {
        &self.rules
    }

    /// Plan from a mixed list of ingested points.
    pub fn run_points(&self, points: &[Point]) -> DockReport {
        let (fields, buildings) = partition_points(points);
        self.run(fields, buildings)
    }

    /// Plan both scenarios. Repeated points are planned once.
    pub fn run(&self, fields: Vec<Point>, buildings: Vec<Point>) -> DockReport {
        let fields = unique_points(&fields);
        let buildings = unique_points(&buildings);
        let field_start = self.run_scenario(Scenario::FieldStart, &fields, &buildings);
        let building_start = self.run_scenario(Scenario::BuildingStart, &fields, &buildings);
        DockReport {
            fields,
            buildings,
            field_start,
            building_start,
        }
    }

    /// Choose a dock for one scenario and build its flights.
    pub fn run_scenario(
        &self,
        scenario: Scenario,
        fields: &[Point],
        buildings: &[Point],
    ) -> SurveyResult {
        if fields.is_empty() {
            tracing::info!(scenario = scenario.label(), "No fields to survey");
            return SurveyResult::failed(scenario, SurveyError::NoFields);
        }

        let candidates = match scenario {
            Scenario::FieldStart => fields,
            Scenario::BuildingStart => buildings,
        };
        let Some(best) = select_center(fields, candidates, &self.rules) else {
            tracing::info!(scenario = scenario.label(), "No dock candidates");
            return SurveyResult::failed(scenario, SurveyError::NoBuildings);
        };

        tracing::debug!(
            scenario = scenario.label(),
            lat = best.center.lat,
            lon = best.center.lon,
            reached = best.reached,
            "Selected dock"
        );

        let plan = build_flights(&best.center, fields, &self.rules);
        let result = summarize(scenario, best.center, plan, fields.len(), buildings, &self.rules);

        tracing::info!(
            scenario = scenario.label(),
            surveyed = result.surveyed_field_count,
            target = result.target_field_count,
            flights = result.flights.len(),
            minutes = result.total_flight_and_charging_minutes,
            "Survey planned"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_drops_unidentified_points() {
        let points = [
            Point::field(48.0, 8.0),
            Point::new(48.1, 8.0, LocationRole::Unidentified),
            Point::building(48.2, 8.0),
            Point::field(48.3, 8.0),
        ];
        let (fields, buildings) = partition_points(&points);
        assert_eq!(fields, vec![points[0], points[3]]);
        assert_eq!(buildings, vec![points[2]]);
    }

    #[test]
    fn repeated_rows_are_planned_once() {
        let a = Point::field(48.0, 8.0);
        let b = Point::field(48.001, 8.0);
        let dock = Point::building(48.0005, 8.0);
        let points = [a, b, dock, a, dock];

        let (fields, buildings) = partition_points(&points);
        assert_eq!(fields, vec![a, b]);
        assert_eq!(buildings, vec![dock]);

        let report = DockLocationEngine::default().run_points(&points);
        for result in report.scenarios() {
            assert_eq!(result.target_field_count, 2);
            assert_eq!(result.surveyed_field_count, 2);
            let visited: Vec<Point> = result
                .flights
                .iter()
                .flat_map(|f| f.fields().iter().copied())
                .collect();
            assert_eq!(visited.iter().filter(|p| **p == a).count(), 1);
        }
        assert_eq!(report.field_start.flights[0].points, vec![a, a, b, a]);

        // Direct runs are deduplicated as well.
        let report = DockLocationEngine::default().run(vec![a, b, a], vec![dock, dock]);
        assert_eq!(report.fields, vec![a, b]);
        assert_eq!(report.buildings, vec![dock]);
        assert_eq!(report.building_start.surveyed_field_count, 2);
    }

    #[test]
    fn rejects_invalid_constraints() {
        let rules = SurveyConstraints {
            max_flight_minutes: 0.0,
            ..SurveyConstraints::default()
        };
        assert_eq!(
            DockLocationEngine::new(rules).unwrap_err(),
            ConstraintError::FlightBudget(0.0)
        );
    }

    #[test]
    fn building_scenario_reports_zero_distance_to_building() {
        let engine = DockLocationEngine::default();
        let report = engine.run(
            vec![Point::field(48.0, 8.0), Point::field(48.002, 8.0)],
            vec![Point::building(48.001, 8.0)],
        );
        assert!(!report.field_start.is_error());
        assert!(!report.building_start.is_error());
        assert_eq!(report.building_start.nearest_building_m, Some(0.0));
        assert!(report.field_start.nearest_building_m.unwrap() > 100.0);
        assert_eq!(report.building_start.dock, Some(Point::building(48.001, 8.0)));
    }
}
