//! # routeplan
//!
//! Delivery route planning around a small pure core: a great-circle
//! distance metric and a nearest-neighbor visiting-order heuristic over
//! geocoded waypoints. Ingestion, rendering, road routing and persistence
//! are separated collaborators; the core does no I/O, holds no state, and
//! trusts coordinates validated at the input boundary.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Waypoint, Route)
//! - [`distance`] — Great-circle metric and open-path route length
//! - [`solver`] — Nearest-neighbor route ordering
//! - [`ingest`] — CSV parsing and the coordinate validation boundary
//! - [`render`] — GeoJSON documents and self-contained Leaflet maps
//! - [`roads`] — Road-accurate routing seam (HTTP client behind `roads-http`)
//! - `store` — SQLite route persistence (feature `store-sqlite`)
//! - `ffi` — C ABI for embedding hosts (feature `ffi`)

pub mod distance;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod ingest;
pub mod models;
pub mod render;
pub mod roads;
pub mod solver;
#[cfg(feature = "store-sqlite")]
pub mod store;
