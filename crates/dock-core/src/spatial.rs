//! Distance and flight-time math.

use crate::models::Point;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using Haversine formula.
///
/// This is the standard formula for calculating great-circle distance
/// between two points on a sphere given their latitudes and longitudes.
/// Deviation from an ellipsoidal geodesic grows with distance; at survey
/// ranges (tens of km) it stays within a few percent.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two points. Role is ignored.
pub fn distance_m(a: &Point, b: &Point) -> f64 {
    haversine_distance(a.lat, a.lon, b.lat, b.lon)
}

/// Time to fly straight from `a` to `b` at `speed_mps`.
pub fn flight_seconds(a: &Point, b: &Point, speed_mps: f64) -> f64 {
    distance_m(a, b) / speed_mps
}

pub fn seconds_to_minutes(seconds: f64) -> f64 {
    seconds / 60.0
}

pub fn flight_minutes(a: &Point, b: &Point, speed_mps: f64) -> f64 {
    seconds_to_minutes(flight_seconds(a, b, speed_mps))
}
