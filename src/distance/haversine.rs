//! Great-circle distance on a spherical Earth.
//!
//! Implements the haversine formula with the `atan2` formulation, which
//! stays numerically stable for nearly antipodal points where the naive
//! `asin` form loses precision.
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine",
//! Sky and Telescope 68(2), 159.

use crate::models::Waypoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two waypoints in kilometers.
///
/// Treats the Earth as a sphere of radius [`EARTH_RADIUS_KM`], which is
/// accurate to roughly 0.5% against the ellipsoid. Symmetric in its
/// arguments, non-negative, and exactly `0.0` for identical coordinates.
/// Coordinates are taken at face value; range enforcement lives in
/// [`crate::ingest`].
///
/// # Examples
///
/// ```
/// use routeplan::distance::haversine_km;
/// use routeplan::models::Waypoint;
///
/// let moscow = Waypoint::new("Moscow", 55.7558, 37.6173);
/// let petersburg = Waypoint::new("Saint Petersburg", 59.9343, 30.3351);
/// let d = haversine_km(&moscow, &petersburg);
/// assert!((d - 633.0).abs() < 1.0);
/// ```
pub fn haversine_km(from: &Waypoint, to: &Waypoint) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let dlat = (to.latitude() - from.latitude()).to_radians();
    let dlon = (to.longitude() - from.longitude()).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a few ulps past 1.0 near the antipode; cap it
    // so the second square root stays real.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total length in kilometers of the open path visiting `stops` in order.
///
/// Sums consecutive great-circle legs without closing the loop back to
/// the first stop. Returns `0.0` for fewer than two stops.
///
/// # Examples
///
/// ```
/// use routeplan::distance::route_length_km;
/// use routeplan::models::Waypoint;
///
/// let stops = vec![
///     Waypoint::new("A", 0.0, 0.0),
///     Waypoint::new("B", 0.0, 1.0),
///     Waypoint::new("C", 0.0, 2.0),
/// ];
/// let total = route_length_km(&stops);
/// assert!((total - 222.39).abs() < 0.01);
/// ```
pub fn route_length_km(stops: &[Waypoint]) -> f64 {
    stops
        .windows(2)
        .map(|leg| haversine_km(&leg[0], &leg[1]))
        .sum()
}
