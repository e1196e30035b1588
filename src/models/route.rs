//! Route type: a named visiting order with its total distance.

use serde::Serialize;

use super::Waypoint;

/// An ordered sequence of stops with a name and a total distance.
///
/// The stop at position 0 is the fixed starting point of the delivery run;
/// the route is an open path, so the last stop is not connected back to
/// the start. `total_distance_km` is whatever figure was attached at
/// construction, normally the great-circle open-path length from
/// [`crate::distance::route_length_km`]; a road-accurate figure can
/// overwrite it later via [`Route::set_total_distance_km`].
///
/// # Examples
///
/// ```
/// use routeplan::models::{Route, Waypoint};
///
/// let stops = vec![
///     Waypoint::new("Depot", 55.7558, 37.6173),
///     Waypoint::new("Client A", 55.7652, 37.6010),
/// ];
/// let route = Route::new("Morning run", stops, 1.46);
/// assert_eq!(route.name(), "Morning run");
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.stops()[0].address(), "Depot");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    name: String,
    stops: Vec<Waypoint>,
    total_distance_km: f64,
}

impl Route {
    /// Creates a route from an already ordered stop sequence.
    pub fn new(name: impl Into<String>, stops: Vec<Waypoint>, total_distance_km: f64) -> Self {
        Self {
            name: name.into(),
            stops,
            total_distance_km,
        }
    }

    /// Route name (a file name, a label typed by the user, anything).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in visiting order; position 0 is the start.
    pub fn stops(&self) -> &[Waypoint] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Overwrites the total distance, e.g. with a road-accurate figure
    /// from [`crate::roads`].
    pub fn set_total_distance_km(&mut self, km: f64) {
        self.total_distance_km = km;
    }
}
