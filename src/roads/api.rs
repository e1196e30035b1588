//! Wire types for the directions API.
//!
//! The request is a single JSON document carrying the API key, the stop
//! coordinates in visiting order, and the travel mode. The response holds
//! candidate routes best-first; only the first is consumed. Totals arrive
//! in meters and seconds and are converted to the kilometers and minutes
//! the rest of the crate displays.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Waypoint;

use super::{RoadRoute, RoadsError};

/// Travel mode requested from the directions service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// By car. The default.
    #[default]
    Driving,
    /// On foot.
    Walking,
    /// By bicycle.
    Cycling,
}

/// A single coordinate pair in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequestPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Request body for the directions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    /// Caller's API key, sent in the body as the service expects.
    pub apikey: String,
    /// Stops in visiting order.
    pub waypoints: Vec<RequestPoint>,
    /// Requested travel mode.
    pub mode: TravelMode,
}

impl DirectionsRequest {
    /// Builds a request routing through `stops` in order.
    pub fn new(api_key: &str, stops: &[Waypoint], mode: TravelMode) -> Self {
        Self {
            apikey: api_key.to_string(),
            waypoints: stops
                .iter()
                .map(|stop| RequestPoint {
                    lat: stop.latitude(),
                    lon: stop.longitude(),
                })
                .collect(),
            mode,
        }
    }
}

/// Response payload of the directions endpoint.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Candidate routes, best first. Missing key reads as empty.
    #[serde(default)]
    pub routes: Vec<ApiRoute>,
}

/// One route alternative in a directions response.
#[derive(Debug, Deserialize)]
pub struct ApiRoute {
    /// Distance and duration totals.
    pub summary: ApiSummary,
    /// Path geometry for drawing the route on a map.
    #[serde(default)]
    pub geometry: Vec<GeometryPoint>,
    /// Per-leg details, passed through untouched.
    #[serde(default)]
    pub legs: Vec<Value>,
}

/// Distance and duration totals of one route.
#[derive(Debug, Deserialize)]
pub struct ApiSummary {
    /// Total distance in meters.
    pub distance: f64,
    /// Total duration in seconds.
    pub duration: f64,
}

/// A geometry vertex, accepted in either wire shape.
///
/// Deployed directions services disagree on how they spell coordinates;
/// both the `{"lat": .., "lon": ..}` object form and the `[lat, lon]`
/// array form are in the wild, sometimes mixed within one response.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GeometryPoint {
    /// Object form: `{"lat": 55.75, "lon": 37.61}`.
    Object {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// Array form: `[55.75, 37.61]`, latitude first.
    Pair(f64, f64),
}

impl GeometryPoint {
    /// The vertex as a `(latitude, longitude)` pair.
    pub fn lat_lon(self) -> (f64, f64) {
        match self {
            GeometryPoint::Object { lat, lon } => (lat, lon),
            GeometryPoint::Pair(lat, lon) => (lat, lon),
        }
    }
}

impl DirectionsResponse {
    /// Extracts the best route as a [`RoadRoute`].
    ///
    /// Converts meters to kilometers rounded to 2 decimals and seconds to
    /// minutes rounded to 1, the precision everything downstream shows.
    /// Returns [`RoadsError::NoRoute`] when the service offered none.
    pub fn into_road_route(self) -> Result<RoadRoute, RoadsError> {
        let route = self.routes.into_iter().next().ok_or(RoadsError::NoRoute)?;
        Ok(RoadRoute {
            distance_km: round_to(route.summary.distance / 1000.0, 2),
            duration_min: round_to(route.summary.duration / 60.0, 1),
            geometry: route.geometry.iter().map(|p| p.lat_lon()).collect(),
            legs: route.legs,
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
