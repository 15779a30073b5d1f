//! Greedy, budget-bounded survey route construction.
//!
//! Each flight leaves the dock, repeatedly hops to the nearest field not yet
//! surveyed while it can still survey that field and fly home within the
//! flight budget, then returns. Flights are built until one of them cannot
//! reach any remaining field.

use crate::models::{Flight, Point};
use crate::rules::SurveyConstraints;
use crate::spatial::{distance_m, flight_minutes};
use serde::{Deserialize, Serialize};

/// Flights built from one dock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyPlan {
    pub flights: Vec<Flight>,
    /// Elapsed minutes of each flight, return leg included
    pub flight_minutes: Vec<f64>,
    pub total_minutes: f64,
    /// Fields left unreachable, in input order
    pub unsurveyed: Vec<Point>,
}

impl SurveyPlan {
    pub fn surveyed_count(&self) -> usize {
        self.flights.iter().map(Flight::surveyed_count).sum()
    }
}

/// Build the sequence of flights that survey `fields` from `center`.
pub fn build_flights(center: &Point, fields: &[Point], rules: &SurveyConstraints) -> SurveyPlan {
    // Ordered working set; removal keeps order so nearest-field ties are reproducible.
    let mut remaining: Vec<Point> = fields.to_vec();
    let mut plan = SurveyPlan::default();

    loop {
        let mut route = vec![*center];
        let mut elapsed = 0.0;
        let mut position = *center;

        while let Some(idx) = nearest_index(&position, &remaining) {
            let next = remaining[idx];
            let outbound = flight_minutes(&position, &next, rules.speed_mps);
            let homebound = flight_minutes(&next, center, rules.speed_mps);
            if elapsed + outbound + homebound + rules.survey_minutes_per_field
                > rules.max_flight_minutes
            {
                break;
            }

            elapsed += outbound + rules.survey_minutes_per_field;
            route.push(remaining.remove(idx));
            position = next;
        }

        if route.len() == 1 {
            // Nothing left within reach of this dock.
            break;
        }

        elapsed += flight_minutes(&position, center, rules.speed_mps);
        route.push(*center);

        plan.total_minutes += elapsed;
        plan.flight_minutes.push(elapsed);
        plan.flights.push(Flight { points: route });
    }

    plan.unsurveyed = remaining;
    plan
}

/// Index of the field closest to `from`; the first one wins on ties.
fn nearest_index(from: &Point, fields: &[Point]) -> Option<usize> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| (idx, distance_m(from, field)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::EARTH_RADIUS_M;

    const BASE_LAT: f64 = 48.0;
    const BASE_LON: f64 = 8.0;

    fn dock() -> Point {
        Point::building(BASE_LAT, BASE_LON)
    }

    // Offsets along a meridian or a parallel, close enough for minute math.
    fn north(meters: f64) -> Point {
        Point::field(BASE_LAT + (meters / EARTH_RADIUS_M).to_degrees(), BASE_LON)
    }

    fn south(meters: f64) -> Point {
        Point::field(BASE_LAT - (meters / EARTH_RADIUS_M).to_degrees(), BASE_LON)
    }

    fn east(meters: f64) -> Point {
        let dlon = (meters / (EARTH_RADIUS_M * BASE_LAT.to_radians().cos())).to_degrees();
        Point::field(BASE_LAT, BASE_LON + dlon)
    }

    fn west(meters: f64) -> Point {
        let dlon = (meters / (EARTH_RADIUS_M * BASE_LAT.to_radians().cos())).to_degrees();
        Point::field(BASE_LAT, BASE_LON - dlon)
    }

    #[test]
    fn no_fields_means_no_flights() {
        let plan = build_flights(&dock(), &[], &SurveyConstraints::default());
        assert!(plan.flights.is_empty());
        assert_eq!(plan.total_minutes, 0.0);
        assert_eq!(plan.surveyed_count(), 0);
    }

    #[test]
    fn chains_nearby_fields_into_one_flight() {
        let near = north(900.0);
        let far = north(1800.0);
        let plan = build_flights(&dock(), &[far, near], &SurveyConstraints::default());

        assert_eq!(plan.flights.len(), 1);
        assert_eq!(plan.flights[0].points, vec![dock(), near, far, dock()]);
        // 1 + 10 + 1 + 10 + 2 minutes home
        assert!((plan.total_minutes - 24.0).abs() < 0.01, "got {}", plan.total_minutes);
        assert!(plan.unsurveyed.is_empty());
    }

    #[test]
    fn splits_fields_across_flights_when_budget_runs_out() {
        // north, then east, then south fit the first flight; west needs a second one
        let fields = [north(900.0), east(1100.0), south(1000.0), west(1200.0)];
        let plan = build_flights(&dock(), &fields, &SurveyConstraints::default());

        assert_eq!(plan.flights.len(), 2);
        assert_eq!(plan.flights[0].fields(), &fields[..3]);
        assert_eq!(plan.flights[1].fields(), &fields[3..]);
        assert_eq!(plan.surveyed_count(), 4);
        assert_eq!(plan.flight_minutes.len(), 2);
    }

    #[test]
    fn unreachable_field_is_left_out() {
        // 20 km is over 22 minutes each way at 15 m/s
        let unreachable = east(20_000.0);
        let reachable = north(900.0);
        let plan = build_flights(&dock(), &[unreachable, reachable], &SurveyConstraints::default());

        assert_eq!(plan.flights.len(), 1);
        assert_eq!(plan.surveyed_count(), 1);
        assert_eq!(plan.unsurveyed, vec![unreachable]);
        assert!(plan.flights.iter().all(|f| !f.points.contains(&unreachable)));
    }

    #[test]
    fn ties_go_to_the_earlier_field() {
        // Exactly mirrored longitudes give bit-identical distances.
        let from = Point::building(BASE_LAT, BASE_LON);
        let a = Point::field(BASE_LAT, BASE_LON + 0.5);
        let b = Point::field(BASE_LAT, BASE_LON - 0.5);
        assert_eq!(distance_m(&from, &a), distance_m(&from, &b));

        assert_eq!(nearest_index(&from, &[b, a]), Some(0));
        assert_eq!(nearest_index(&from, &[a, b]), Some(0));
        assert_eq!(nearest_index(&from, &[]), None);
    }

    #[test]
    fn every_prefix_can_still_return_within_budget() {
        let rules = SurveyConstraints::default();
        let fields: Vec<Point> = (1..=12)
            .map(|i| match i % 4 {
                0 => north(700.0 * i as f64),
                1 => east(650.0 * i as f64),
                2 => south(600.0 * i as f64),
                _ => west(550.0 * i as f64),
            })
            .collect();
        let center = dock();
        let plan = build_flights(&center, &fields, &rules);

        for flight in &plan.flights {
            assert_eq!(flight.points.first(), Some(&center));
            assert_eq!(flight.points.last(), Some(&center));

            let mut elapsed = 0.0;
            let mut position = center;
            for field in flight.fields() {
                elapsed += flight_minutes(&position, field, rules.speed_mps)
                    + rules.survey_minutes_per_field;
                position = *field;
                let with_return = elapsed + flight_minutes(&position, &center, rules.speed_mps);
                assert!(with_return <= rules.max_flight_minutes + 1e-9);
            }
        }
    }

    #[test]
    fn fields_are_never_visited_twice() {
        let fields: Vec<Point> = (1..=10).map(|i| north(300.0 * i as f64)).collect();
        let plan = build_flights(&dock(), &fields, &SurveyConstraints::default());

        let visited: Vec<Point> = plan
            .flights
            .iter()
            .flat_map(|f| f.fields().iter().copied())
            .collect();
        for (i, a) in visited.iter().enumerate() {
            assert!(visited[i + 1..].iter().all(|b| b != a));
        }
        assert_eq!(visited.len() + plan.unsurveyed.len(), fields.len());
    }
}
