//! Blocking HTTP implementation of [`RoadRouter`].

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use url::Url;

use crate::models::Waypoint;

use super::api::{DirectionsRequest, DirectionsResponse, TravelMode};
use super::{RoadRoute, RoadRouter, RoadsError};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`RoadRouter`] backed by a directions HTTP service.
///
/// The endpoint URL and API key are caller-supplied; request and response
/// bodies follow the shapes in this module's wire types. Calls block the
/// current thread for up to the configured timeout.
///
/// # Examples
///
/// ```no_run
/// use routeplan::models::Waypoint;
/// use routeplan::roads::{HttpRoadRouter, RoadRouter};
///
/// let router = HttpRoadRouter::new("https://api.example.com/v2/route", "secret-key")?;
/// let stops = vec![
///     Waypoint::new("Depot", 55.7558, 37.6173),
///     Waypoint::new("Client", 55.7652, 37.6010),
/// ];
/// let road = router.route(&stops)?;
/// println!("{} km, {} min by road", road.distance_km, road.duration_min);
/// # Ok::<(), routeplan::roads::RoadsError>(())
/// ```
#[derive(Debug)]
pub struct HttpRoadRouter {
    endpoint: Url,
    api_key: String,
    mode: TravelMode,
    client: Client,
}

impl HttpRoadRouter {
    /// Creates a router against the given directions endpoint with the
    /// default 10 second timeout.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, RoadsError> {
        Self::with_timeout(endpoint, api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a router with a custom request timeout.
    pub fn with_timeout(
        endpoint: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, RoadsError> {
        let endpoint = Url::parse(endpoint).map_err(|e| RoadsError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RoadsError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
            mode: TravelMode::default(),
            client,
        })
    }

    /// Sets the travel mode (driving unless changed).
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }
}

impl RoadRouter for HttpRoadRouter {
    fn route(&self, stops: &[Waypoint]) -> Result<RoadRoute, RoadsError> {
        if stops.len() < 2 {
            return Err(RoadsError::TooFewStops { got: stops.len() });
        }

        let body = DirectionsRequest::new(&self.api_key, stops, self.mode);
        debug!("requesting road route for {} stops", stops.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .map_err(|e| {
                warn!("directions request failed: {e}");
                RoadsError::Transport {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        debug!("directions service answered with status {status}");
        if !status.is_success() {
            return Err(RoadsError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|e| RoadsError::Transport {
            reason: e.to_string(),
        })?;
        let payload: DirectionsResponse = serde_json::from_str(&text)?;
        payload.into_road_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_rejected() {
        let err = HttpRoadRouter::new("not a url", "key").unwrap_err();
        assert!(matches!(err, RoadsError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_too_few_stops_never_hits_the_network() {
        let router =
            HttpRoadRouter::new("https://api.example.com/v2/route", "key").expect("valid URL");

        let err = router.route(&[]).unwrap_err();
        assert!(matches!(err, RoadsError::TooFewStops { got: 0 }));

        let one = vec![Waypoint::new("Depot", 55.7558, 37.6173)];
        let err = router.route(&one).unwrap_err();
        assert!(matches!(err, RoadsError::TooFewStops { got: 1 }));
    }

    #[test]
    fn test_mode_builder() {
        let router = HttpRoadRouter::new("https://api.example.com/v2/route", "key")
            .expect("valid URL")
            .with_mode(TravelMode::Walking);
        assert_eq!(router.mode, TravelMode::Walking);
    }
}
