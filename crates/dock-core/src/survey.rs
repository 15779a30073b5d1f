//! Statistics for a dock and the flights built from it.

use crate::models::{Flight, Point, Scenario, SurveyResult};
use crate::routing::SurveyPlan;
use crate::rules::SurveyConstraints;
use crate::spatial::{distance_m, flight_minutes};

/// Airborne minutes of one flight: every leg plus survey time over its fields.
pub fn flight_duration_minutes(flight: &Flight, rules: &SurveyConstraints) -> f64 {
    leg_minutes(flight, rules) + flight.surveyed_count() as f64 * rules.survey_minutes_per_field
}

fn leg_minutes(flight: &Flight, rules: &SurveyConstraints) -> f64 {
    flight
        .points
        .windows(2)
        .map(|leg| flight_minutes(&leg[0], &leg[1], rules.speed_mps))
        .sum()
}

/// Distance from `dock` to the closest building, `None` without buildings.
pub fn nearest_building_m(dock: &Point, buildings: &[Point]) -> Option<f64> {
    buildings
        .iter()
        .map(|building| distance_m(dock, building))
        .min_by(f64::total_cmp)
}

/// Turn a dock and its flights into the reported statistics.
pub fn summarize(
    scenario: Scenario,
    dock: Point,
    plan: SurveyPlan,
    target_field_count: usize,
    buildings: &[Point],
    rules: &SurveyConstraints,
) -> SurveyResult {
    let surveyed_field_count = plan.surveyed_count();
    let legs: f64 = plan.flights.iter().map(|f| leg_minutes(f, rules)).sum();
    let total_flight_minutes = legs + surveyed_field_count as f64 * rules.survey_minutes_per_field;

    // Charging happens only between flights.
    let charges = plan.flights.len().saturating_sub(1);
    let total_flight_and_charging_minutes =
        total_flight_minutes + charges as f64 * rules.charge_minutes_between_flights;

    let nearest_building_m = match scenario {
        Scenario::FieldStart => nearest_building_m(&dock, buildings),
        Scenario::BuildingStart => Some(0.0),
    };

    let flight_minutes = plan
        .flights
        .iter()
        .map(|f| flight_duration_minutes(f, rules))
        .collect();

    SurveyResult {
        scenario,
        error: None,
        dock: Some(dock),
        target_field_count,
        surveyed_field_count,
        total_flight_minutes,
        total_flight_and_charging_minutes,
        nearest_building_m,
        flights: plan.flights,
        flight_minutes,
        unsurveyed: plan.unsurveyed,
    }
}
