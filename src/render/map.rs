//! Self-contained HTML map for a planned route.

use crate::models::Route;

use super::{route_geojson, RenderError};

/// Renders a route as a single HTML page with an interactive Leaflet map.
///
/// The page loads Leaflet and OpenStreetMap tiles from their public CDNs
/// and needs nothing else; write the string to a file and open it in a
/// browser. Markers follow the legend (green start, blue via stops, red
/// finish) and the path is drawn from the same GeoJSON document that
/// [`route_geojson`] produces: a solid blue line when `road_geometry` is
/// given, a dashed orange line for straight stop-to-stop legs otherwise.
/// The view starts centered on the first stop.
///
/// Returns [`RenderError::EmptyRoute`] when the route has no stops.
///
/// # Examples
///
/// ```
/// use routeplan::models::{Route, Waypoint};
/// use routeplan::render::render_map_html;
///
/// let route = Route::new(
///     "Morning run",
///     vec![
///         Waypoint::new("Depot", 55.7558, 37.6173),
///         Waypoint::new("Client", 55.7652, 37.6010),
///     ],
///     1.46,
/// );
/// let html = render_map_html(&route, None)?;
/// assert!(html.contains("Morning run"));
/// # Ok::<(), routeplan::render::RenderError>(())
/// ```
pub fn render_map_html(
    route: &Route,
    road_geometry: Option<&[(f64, f64)]>,
) -> Result<String, RenderError> {
    let first = route.stops().first().ok_or(RenderError::EmptyRoute)?;

    let doc = route_geojson(route, road_geometry);
    // A literal "</script>" inside an address would end the inline block,
    // so break every "</" in the embedded JSON.
    let geojson = serde_json::to_string(&doc)?.replace("</", "<\\/");

    let line_note = match road_geometry {
        Some(geometry) if !geometry.is_empty() => "road path",
        _ => "straight-line path",
    };

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{name}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
html, body {{ margin: 0; height: 100%; font-family: sans-serif; }}
header {{ padding: 8px 12px; background: #fff; border-bottom: 1px solid #ddd; }}
header h3 {{ margin: 0 0 4px 0; }}
header p {{ margin: 0; color: #555; }}
#map {{ height: calc(100% - 60px); }}
.legend {{
  position: absolute; bottom: 16px; right: 16px; z-index: 1000;
  background: #fff; padding: 8px 12px; border-radius: 4px;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3); font-size: 13px;
}}
.legend .dot {{
  display: inline-block; width: 10px; height: 10px;
  border-radius: 50%; margin-right: 6px;
}}
</style>
</head>
<body>
<header>
<h3>{name}</h3>
<p>{stop_count} stops, {total:.2} km ({line_note})</p>
</header>
<div id="map"></div>
<div class="legend">
<div><span class="dot" style="background: green;"></span>Start</div>
<div><span class="dot" style="background: blue;"></span>Delivery stop</div>
<div><span class="dot" style="background: red;"></span>Finish</div>
</div>
<script>
const routeData = {geojson};
const map = L.map("map").setView([{center_lat}, {center_lon}], 10);
L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
L.geoJSON(routeData, {{
  pointToLayer: function (feature, latlng) {{
    return L.circleMarker(latlng, {{
      radius: 8,
      color: "white",
      weight: 1,
      fillColor: feature.properties.color,
      fillOpacity: 0.9
    }});
  }},
  style: function (feature) {{
    if (feature.geometry.type !== "LineString") {{
      return {{}};
    }}
    if (feature.properties.source === "roads") {{
      return {{ color: "blue", weight: 4 }};
    }}
    return {{ color: "orange", weight: 3, dashArray: "5, 5" }};
  }},
  onEachFeature: function (feature, layer) {{
    if (feature.geometry.type === "Point") {{
      const label = document.createElement("div");
      label.textContent =
        "Stop " + feature.properties.index + ": " + feature.properties.address;
      layer.bindPopup(label);
    }}
  }}
}}).addTo(map);
</script>
</body>
</html>
"##,
        name = escape_html(route.name()),
        stop_count = route.len(),
        total = route.total_distance_km(),
        line_note = line_note,
        geojson = geojson,
        center_lat = first.latitude(),
        center_lon = first.longitude(),
    ))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
