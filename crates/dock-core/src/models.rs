//! Core data models for dock placement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What an ingested location is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationRole {
    /// Survey target, and a dock candidate for the field-start scenario
    Field,
    /// Dock candidate for the building-start scenario
    Building,
    /// Unrecognized label; dropped before planning
    #[default]
    Unidentified,
}

impl LocationRole {
    /// Parse a role label. Matching is trimmed and case-insensitive.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("field") {
            LocationRole::Field
        } else if label.eq_ignore_ascii_case("building") {
            LocationRole::Building
        } else {
            LocationRole::Unidentified
        }
    }
}

/// A surveyed or candidate location.
///
/// Equality compares latitude, longitude and role. The `f64` coordinates rule
/// out `Eq` and `Hash`, so point sets are ordered `Vec`s compared with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
    pub role: LocationRole,
}

impl Point {
    pub fn new(lat: f64, lon: f64, role: LocationRole) -> Self {
        Self { lat, lon, role }
    }

    pub fn field(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, LocationRole::Field)
    }

    pub fn building(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, LocationRole::Building)
    }

    /// True when both points sit on the same coordinates, whatever their role.
    pub fn same_position(&self, other: &Point) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

/// One battery charge: dock, zero or more fields, dock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flight {
    pub points: Vec<Point>,
}

impl Flight {
    pub fn dock(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Fields visited by this flight, in visitation order.
    pub fn fields(&self) -> &[Point] {
        match self.points.len() {
            0..=2 => &[],
            n => &self.points[1..n - 1],
        }
    }

    pub fn surveyed_count(&self) -> usize {
        self.points.len().saturating_sub(2)
    }
}

/// Why a scenario produced no dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyError {
    #[error("no fields to survey")]
    NoFields,
    #[error("no buildings available as dock candidates")]
    NoBuildings,
}

/// Which kind of point the dock is chosen from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    FieldStart,
    BuildingStart,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::FieldStart => "field-start",
            Scenario::BuildingStart => "building-start",
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResult {
    pub scenario: Scenario,
    pub error: Option<SurveyError>,
    pub dock: Option<Point>,
    pub target_field_count: usize,
    pub surveyed_field_count: usize,
    pub total_flight_minutes: f64,
    pub total_flight_and_charging_minutes: f64,
    /// `None` when no building exists to measure against
    pub nearest_building_m: Option<f64>,
    pub flights: Vec<Flight>,
    /// Airborne minutes of each flight, survey time included
    #[serde(default)]
    pub flight_minutes: Vec<f64>,
    /// Fields no flight reached, in input order
    #[serde(default)]
    pub unsurveyed: Vec<Point>,
}

impl SurveyResult {
    /// The error sentinel: no dock and all statistics zeroed.
    pub fn failed(scenario: Scenario, error: SurveyError) -> Self {
        Self {
            scenario,
            error: Some(error),
            dock: None,
            target_field_count: 0,
            surveyed_field_count: 0,
            total_flight_minutes: 0.0,
            total_flight_and_charging_minutes: 0.0,
            nearest_building_m: None,
            flights: Vec::new(),
            flight_minutes: Vec::new(),
            unsurveyed: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
