//! Waypoint type: a delivery stop with geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery stop: a human-readable address with its geocoded position.
///
/// Latitude and longitude are in decimal degrees, latitude in `[-90, 90]`
/// and longitude in `[-180, 180]`. The distance and ordering algorithms
/// trust these ranges; enforcement happens at the input boundary (see
/// [`crate::ingest::validated_waypoint`]).
///
/// The address is an opaque label. Two waypoints at identical coordinates
/// are still distinct stops; nothing deduplicates them.
///
/// # Examples
///
/// ```
/// use routeplan::models::Waypoint;
///
/// let wp = Waypoint::new("Tverskaya st., 13", 55.7652, 37.6010);
/// assert_eq!(wp.address(), "Tverskaya st., 13");
/// assert_eq!(wp.latitude(), 55.7652);
/// assert_eq!(wp.longitude(), 37.6010);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    address: String,
    latitude: f64,
    longitude: f64,
}

impl Waypoint {
    /// Creates a waypoint from an address label and coordinates in degrees.
    ///
    /// Performs no range checks; callers holding unvalidated input go
    /// through [`crate::ingest::validated_waypoint`] instead.
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Human-readable address label.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.6}, {:.6})",
            self.address, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_new() {
        let wp = Waypoint::new("Lenina st., 1", 55.7558, 37.6173);
        assert_eq!(wp.address(), "Lenina st., 1");
        assert_eq!(wp.latitude(), 55.7558);
        assert_eq!(wp.longitude(), 37.6173);
    }

    #[test]
    fn test_waypoint_display() {
        let wp = Waypoint::new("Depot", 55.7558, 37.6173);
        assert_eq!(wp.to_string(), "Depot (55.755800, 37.617300)");
    }

    #[test]
    fn test_waypoint_equality() {
        let a = Waypoint::new("Depot", 55.7558, 37.6173);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Waypoint::new("Depot", 55.7558, 37.6174));
    }

    #[test]
    fn test_waypoint_serde_field_names() {
        let wp = Waypoint::new("Depot", 55.7558, 37.6173);
        let json = serde_json::to_value(&wp).expect("serializable");
        assert_eq!(json["address"], "Depot");
        assert_eq!(json["latitude"], 55.7558);
        assert_eq!(json["longitude"], 37.6173);

        let back: Waypoint = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, wp);
    }
}
