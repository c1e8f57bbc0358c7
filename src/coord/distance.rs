//! Great-circle distance
//!
//! Haversine distance on a sphere of mean Earth radius.

use crate::constants::geo::EARTH_RADIUS_METERS;
use crate::coord::Coordinates;

/// Calculate the distance between two points in meters (Haversine formula)
///
/// # Arguments
/// * `p1` - First point
/// * `p2` - Second point
///
/// # Returns
/// Distance in meters. Non-negative and symmetric for finite input;
/// NaN or infinite input propagates into the result instead of erroring.
pub fn haversine_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = (p2.lng - p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
