//! Road-accurate routing through an external directions service.
//!
//! The built-in metric is great-circle only; when a plan should reflect
//! real driving distance and time, callers go through the [`RoadRouter`]
//! seam. [`HttpRoadRouter`] (feature `roads-http`) implements it against
//! a directions HTTP API; a cache, a mock, or another vendor can stand in
//! behind the same trait. Road figures never feed back into the ordering
//! heuristic, they only refine totals and geometry after the fact.

mod api;
#[cfg(feature = "roads-http")]
mod http;

pub use api::{
    ApiRoute, ApiSummary, DirectionsRequest, DirectionsResponse, GeometryPoint, RequestPoint,
    TravelMode,
};
#[cfg(feature = "roads-http")]
pub use http::HttpRoadRouter;

use thiserror::Error;

use crate::models::Waypoint;

/// Summary of a road-accurate route over an ordered stop list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRoute {
    /// Total driving distance in kilometers, rounded to 2 decimals.
    pub distance_km: f64,
    /// Total travel time in minutes, rounded to 1 decimal.
    pub duration_min: f64,
    /// Path geometry as `(latitude, longitude)` pairs, ready for
    /// [`crate::render::route_geojson`].
    pub geometry: Vec<(f64, f64)>,
    /// Per-leg payloads passed through from the service untouched.
    pub legs: Vec<serde_json::Value>,
}

/// An external collaborator that turns an ordered stop list into a
/// road-accurate route.
///
/// Implementations must reject fewer than two stops with
/// [`RoadsError::TooFewStops`] and must visit the stops in the order
/// given, never reordering them.
pub trait RoadRouter {
    /// Routes through `stops` in the given order.
    fn route(&self, stops: &[Waypoint]) -> Result<RoadRoute, RoadsError>;
}

/// Errors from the road-routing collaborator.
#[derive(Debug, Error)]
pub enum RoadsError {
    /// Road routing was requested for fewer than two stops.
    #[error("road routing needs at least two stops, got {got}")]
    TooFewStops {
        /// How many stops were supplied.
        got: usize,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid directions endpoint {url:?}: {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint string.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The request never produced a response (connect failure, timeout,
    /// TLS trouble).
    #[error("directions request failed: {reason}")]
    Transport {
        /// Underlying client message.
        reason: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("directions service returned HTTP status {status}")]
    Status {
        /// The returned status code.
        status: u16,
    },

    /// The response body is not a valid directions payload.
    #[error("malformed directions response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response is valid but offers no route between the stops.
    #[error("directions response contained no routes")]
    NoRoute,
}
