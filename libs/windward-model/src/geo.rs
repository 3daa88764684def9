//! Great-circle utilities
//!
//! Spherical-earth approximation; plenty for race-course distances.

use crate::angles::wrap_360;

/// Mean earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two (lat, lon) points in meters
pub fn haversine_distance(point1: (f64, f64), point2: (f64, f64)) -> f64 {
    let (lat1, lon1) = (point1.0.to_radians(), point1.1.to_radians());
    let (lat2, lon2) = (point2.0.to_radians(), point2.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial great-circle bearing from point1 to point2, in [0, 360)
pub fn initial_bearing(point1: (f64, f64), point2: (f64, f64)) -> f64 {
    let (lat1, lon1) = (point1.0.to_radians(), point1.1.to_radians());
    let (lat2, lon2) = (point2.0.to_radians(), point2.1.to_radians());

    let dlon = lon2 - lon1;
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    wrap_360(y.atan2(x).to_degrees())
}

/// Drop GPS fixes that jump implausibly far from the last accepted point.
///
/// The first point is always kept; each later point is compared against the
/// last survivor, not its raw predecessor, so a single spike cannot drag the
/// track away.
pub fn filter_gps_jumps(points: &[(f64, f64)], max_jump_meters: f64) -> Vec<(f64, f64)> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut filtered = vec![points[0]];
    for point in &points[1..] {
        let last = filtered[filtered.len() - 1];
        if haversine_distance(last, *point) <= max_jump_meters {
            filtered.push(*point);
        }
    }
    filtered
}
