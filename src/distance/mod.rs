//! Distance metric over geographic coordinates.
//!
//! Provides the great-circle (haversine) distance between waypoints and
//! the total open-path length of an ordered stop sequence. Everything here
//! is pure computation: no I/O, no state, no rounding.

mod haversine;

pub use haversine::{haversine_km, route_length_km, EARTH_RADIUS_KM};
