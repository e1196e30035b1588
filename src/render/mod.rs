//! Route rendering: GeoJSON documents and self-contained HTML maps.
//!
//! Consumes planned routes, produces output for humans and mapping tools.
//! The GeoJSON side is the structured form (one Point feature per stop,
//! one LineString for the path); the HTML side embeds that document in a
//! single Leaflet page that opens straight from disk.

mod geojson;
mod map;

pub use geojson::{route_geojson, StopRole};
pub use map::render_map_html;

use thiserror::Error;

/// Errors raised while rendering a route.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The route has no stops to center a map on.
    #[error("cannot render a map for a route with no stops")]
    EmptyRoute,

    /// The embedded GeoJSON document could not be serialized.
    #[error("failed to serialize route GeoJSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
