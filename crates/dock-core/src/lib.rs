pub mod engine;
pub mod models;
pub mod routing;
pub mod rules;
pub mod selection;
pub mod spatial;
pub mod survey;

pub use engine::{partition_points, unique_points, DockLocationEngine, DockReport};
pub use models::{Flight, LocationRole, Point, Scenario, SurveyError, SurveyResult};
pub use routing::{build_flights, SurveyPlan};
pub use rules::{ConstraintError, SelectionPolicy, SurveyConstraints};
pub use selection::{score_candidate, select_center, CandidateScore};
pub use spatial::{
    distance_m, flight_minutes, flight_seconds, haversine_distance, seconds_to_minutes,
};
pub use survey::{flight_duration_minutes, nearest_building_m, summarize};
