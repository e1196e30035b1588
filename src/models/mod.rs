//! Domain model types for delivery route planning.
//!
//! Provides the two core abstractions: a waypoint as a labeled geographic
//! coordinate, and a route as a named visiting order over waypoints with
//! its total distance.

mod route;
mod waypoint;

pub use route::Route;
pub use waypoint::Waypoint;
