//! GeoJSON document for a planned route.

use serde_json::{json, Value};

use crate::models::Route;

/// Marker role of a stop within a rendered route.
///
/// The start is where the driver departs, the finish is the last delivery,
/// everything between is a via stop. A single-stop route renders its only
/// stop as the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRole {
    /// First stop of the run.
    Start,
    /// Intermediate delivery.
    Via,
    /// Last stop of the run.
    Finish,
}

impl StopRole {
    /// Role of the stop at `index` in a route of `len` stops.
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            StopRole::Start
        } else if index + 1 == len {
            StopRole::Finish
        } else {
            StopRole::Via
        }
    }

    /// Stable lowercase name used in feature properties.
    pub fn as_str(self) -> &'static str {
        match self {
            StopRole::Start => "start",
            StopRole::Via => "via",
            StopRole::Finish => "finish",
        }
    }

    /// Marker color matching the map legend.
    pub fn color(self) -> &'static str {
        match self {
            StopRole::Start => "green",
            StopRole::Via => "blue",
            StopRole::Finish => "red",
        }
    }
}

/// Builds a GeoJSON FeatureCollection for a route.
///
/// Emits one Point feature per stop, numbered from 1 in visiting order and
/// tagged with its [`StopRole`], plus one LineString feature for the path
/// when there is anything to draw. Positions follow the GeoJSON convention
/// of `[longitude, latitude]`.
///
/// `road_geometry` is an optional polyline of `(latitude, longitude)`
/// pairs from the road-routing collaborator ([`crate::roads`]). When
/// present and non-empty it becomes the LineString and the feature is
/// tagged `"source": "roads"`; otherwise the straight stop-to-stop
/// sequence is used, tagged `"source": "direct"`.
///
/// # Examples
///
/// ```
/// use routeplan::models::{Route, Waypoint};
/// use routeplan::render::route_geojson;
///
/// let route = Route::new(
///     "run",
///     vec![
///         Waypoint::new("Depot", 55.7558, 37.6173),
///         Waypoint::new("Client", 55.7652, 37.6010),
///     ],
///     1.46,
/// );
/// let doc = route_geojson(&route, None);
/// assert_eq!(doc["type"], "FeatureCollection");
/// assert_eq!(doc["features"].as_array().map(|f| f.len()), Some(3));
/// assert_eq!(doc["features"][0]["properties"]["role"], "start");
/// ```
pub fn route_geojson(route: &Route, road_geometry: Option<&[(f64, f64)]>) -> Value {
    let len = route.len();
    let mut features: Vec<Value> = route
        .stops()
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let role = StopRole::of(index, len);
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [stop.longitude(), stop.latitude()],
                },
                "properties": {
                    "index": index + 1,
                    "address": stop.address(),
                    "role": role.as_str(),
                    "color": role.color(),
                },
            })
        })
        .collect();

    let line = match road_geometry {
        Some(geometry) if !geometry.is_empty() => Some((
            geometry
                .iter()
                .map(|(lat, lon)| json!([lon, lat]))
                .collect::<Vec<_>>(),
            "roads",
        )),
        _ if len > 1 => Some((
            route
                .stops()
                .iter()
                .map(|stop| json!([stop.longitude(), stop.latitude()]))
                .collect::<Vec<_>>(),
            "direct",
        )),
        _ => None,
    };

    if let Some((coordinates, source)) = line {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "kind": "path",
                "source": source,
            },
        }));
    }

    json!({
        "type": "FeatureCollection",
        "name": route.name(),
        "total_distance_km": route.total_distance_km(),
        "features": features,
    })
}
