//! Flight constraints for survey planning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a candidate dock displaces the current best during selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Replace when more fields are reached, or independently when total minutes drop.
    /// A candidate reaching fewer fields can win on time alone.
    #[default]
    EitherImproves,
    /// Most fields reached first; total minutes only break ties.
    Lexicographic,
}

impl SelectionPolicy {
    /// Whether a candidate scoring (`reached`, `minutes`) replaces the current best.
    pub fn replaces(
        &self,
        reached: usize,
        minutes: f64,
        best_reached: usize,
        best_minutes: f64,
    ) -> bool {
        match self {
            SelectionPolicy::EitherImproves => reached > best_reached || minutes < best_minutes,
            SelectionPolicy::Lexicographic => {
                reached > best_reached || (reached == best_reached && minutes < best_minutes)
            }
        }
    }
}

/// Configuration for a survey run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConstraints {
    /// Cruise speed in meters per second
    pub speed_mps: f64,
    /// Battery budget per flight, return leg included
    pub max_flight_minutes: f64,
    /// Time spent over each field
    pub survey_minutes_per_field: f64,
    /// Ground time between consecutive flights
    pub charge_minutes_between_flights: f64,
    /// Nominal field edge length. Not used by any computation.
    pub field_side_m: f64,
    pub selection_policy: SelectionPolicy,
}

impl Default for SurveyConstraints {
    fn default() -> Self {
        Self {
            speed_mps: 15.0,
            max_flight_minutes: 40.0,
            survey_minutes_per_field: 10.0,
            charge_minutes_between_flights: 35.0,
            field_side_m: 100.0,
            selection_policy: SelectionPolicy::EitherImproves,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("speed must be positive and finite, got {0}")]
    Speed(f64),
    #[error("max flight minutes must be positive and finite, got {0}")]
    FlightBudget(f64),
    #[error("survey minutes per field must be non-negative and finite, got {0}")]
    SurveyTime(f64),
    #[error("charge minutes must be non-negative and finite, got {0}")]
    ChargeTime(f64),
}

impl SurveyConstraints {
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if !(self.speed_mps.is_finite() && self.speed_mps > 0.0) {
            return Err(ConstraintError::Speed(self.speed_mps));
        }
        if !(self.max_flight_minutes.is_finite() && self.max_flight_minutes > 0.0) {
            return Err(ConstraintError::FlightBudget(self.max_flight_minutes));
        }
        if !(self.survey_minutes_per_field.is_finite() && self.survey_minutes_per_field >= 0.0) {
            return Err(ConstraintError::SurveyTime(self.survey_minutes_per_field));
        }
        if !(self.charge_minutes_between_flights.is_finite()
            && self.charge_minutes_between_flights >= 0.0)
        {
            return Err(ConstraintError::ChargeTime(self.charge_minutes_between_flights));
        }
        Ok(())
    }
}
