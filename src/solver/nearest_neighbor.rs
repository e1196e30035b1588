//! Nearest-neighbor route ordering.
//!
//! Orders stops greedily: starting from the first waypoint in the input,
//! always visit the closest unvisited waypoint next. The start is fixed
//! and the path stays open, so the run ends at whichever stop the greedy
//! walk reaches last.
//!
//! # Complexity
//!
//! O(n²) great-circle evaluations for n waypoints. Comfortable for the
//! intended scale of tens to low hundreds of delivery stops.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", SIAM Journal
//! on Computing 6(3), 563-581.

use crate::distance::{haversine_km, route_length_km};
use crate::models::{Route, Waypoint};

/// Orders waypoints into a delivery sequence with the nearest-neighbor
/// heuristic.
///
/// The first input waypoint stays first; every later position holds the
/// unvisited waypoint closest (by [`haversine_km`]) to the previous one.
/// Exact distance ties go to the candidate that appears earliest in the
/// remaining pool, so the result is fully determined by the input order.
/// The output is always a permutation of the input, the input itself is
/// never modified, and inputs of zero or one waypoint come back as given.
///
/// The greedy walk is a heuristic: the tour it picks is typically within
/// about 25% of optimal and can be arbitrarily bad on adversarial inputs,
/// which is an accepted trade-off for planning a handful of deliveries.
///
/// # Examples
///
/// ```
/// use routeplan::models::Waypoint;
/// use routeplan::solver::order_route;
///
/// let stops = vec![
///     Waypoint::new("A", 0.0, 0.0),
///     Waypoint::new("B", 0.0, 10.0),
///     Waypoint::new("C", 0.0, 1.0),
/// ];
/// let ordered = order_route(&stops);
/// let labels: Vec<&str> = ordered.iter().map(|w| w.address()).collect();
/// assert_eq!(labels, ["A", "C", "B"]);
/// ```
pub fn order_route(waypoints: &[Waypoint]) -> Vec<Waypoint> {
    if waypoints.len() <= 1 {
        return waypoints.to_vec();
    }

    let mut ordered = Vec::with_capacity(waypoints.len());
    ordered.push(waypoints[0].clone());
    let mut remaining: Vec<Waypoint> = waypoints[1..].to_vec();

    while !remaining.is_empty() {
        let current = ordered.last().expect("seeded with the start");
        let next = nearest_index(current, &remaining);
        ordered.push(remaining.remove(next));
    }

    ordered
}

/// Orders waypoints and wraps them in a named [`Route`] carrying the
/// great-circle open-path total.
///
/// # Examples
///
/// ```
/// use routeplan::models::Waypoint;
/// use routeplan::solver::plan_route;
///
/// let stops = vec![
///     Waypoint::new("Depot", 55.7558, 37.6173),
///     Waypoint::new("Client B", 55.9000, 37.5000),
///     Waypoint::new("Client A", 55.7652, 37.6010),
/// ];
/// let route = plan_route("Morning run", &stops);
/// assert_eq!(route.stops()[0].address(), "Depot");
/// assert_eq!(route.stops()[1].address(), "Client A");
/// assert!(route.total_distance_km() > 0.0);
/// ```
pub fn plan_route(name: &str, waypoints: &[Waypoint]) -> Route {
    let stops = order_route(waypoints);
    let total = route_length_km(&stops);
    Route::new(name, stops, total)
}

/// Index of the candidate closest to `current`.
///
/// Linear scan keeping the first strict minimum, so an exact tie resolves
/// to the earliest candidate in the pool. `candidates` must be non-empty.
fn nearest_index(current: &Waypoint, candidates: &[Waypoint]) -> usize {
    let mut best = 0;
    let mut best_distance = haversine_km(current, &candidates[0]);
    for (idx, candidate) in candidates.iter().enumerate().skip(1) {
        let d = haversine_km(current, candidate);
        if d < best_distance {
            best = idx;
            best_distance = d;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(stops: &[Waypoint]) -> Vec<&str> {
        stops.iter().map(|s| s.address()).collect()
    }

    #[test]
    fn test_order_empty() {
        assert!(order_route(&[]).is_empty());
    }

    #[test]
    fn test_order_single() {
        let stops = vec![Waypoint::new("Depot", 55.7558, 37.6173)];
        let ordered = order_route(&stops);
        assert_eq!(ordered, stops);
    }

    #[test]
    fn test_order_two() {
        let stops = vec![
            Waypoint::new("Depot", 55.7558, 37.6173),
            Waypoint::new("Client", 55.7652, 37.6010),
        ];
        assert_eq!(addresses(&order_route(&stops)), ["Depot", "Client"]);
    }

    #[test]
    fn test_order_picks_nearest_first() {
        let stops = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 10.0),
            Waypoint::new("C", 0.0, 1.0),
        ];
        assert_eq!(addresses(&order_route(&stops)), ["A", "C", "B"]);
    }

    #[test]
    fn test_order_keeps_start_fixed() {
        // B is closer to C than A is, but A comes first in the input.
        let stops = vec![
            Waypoint::new("A", 0.0, 5.0),
            Waypoint::new("B", 0.0, 0.9),
            Waypoint::new("C", 0.0, 0.0),
        ];
        let ordered = order_route(&stops);
        assert_eq!(ordered[0].address(), "A");
    }

    #[test]
    fn test_order_is_permutation() {
        let stops = vec![
            Waypoint::new("A", 55.7558, 37.6173),
            Waypoint::new("B", 55.9000, 37.5000),
            Waypoint::new("C", 55.7652, 37.6010),
            Waypoint::new("D", 55.8000, 37.7000),
        ];
        let ordered = order_route(&stops);
        assert_eq!(ordered.len(), stops.len());
        for stop in &stops {
            assert_eq!(
                ordered.iter().filter(|s| *s == stop).count(),
                stops.iter().filter(|s| *s == stop).count()
            );
        }
    }

    #[test]
    fn test_order_input_untouched() {
        let stops = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 10.0),
            Waypoint::new("C", 0.0, 1.0),
        ];
        let before = stops.clone();
        let _ = order_route(&stops);
        assert_eq!(stops, before);
    }

    #[test]
    fn test_order_duplicate_of_start_visited_first() {
        let stops = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 5.0),
            Waypoint::new("A again", 0.0, 0.0),
        ];
        assert_eq!(addresses(&order_route(&stops)), ["A", "A again", "B"]);
    }

    #[test]
    fn test_order_tie_resolves_to_earlier_candidate() {
        // East and West are both exactly one degree from the start; the
        // earlier pool entry must win.
        let stops = vec![
            Waypoint::new("Start", 0.0, 0.0),
            Waypoint::new("East", 0.0, 1.0),
            Waypoint::new("West", 0.0, -1.0),
        ];
        assert_eq!(addresses(&order_route(&stops)), ["Start", "East", "West"]);

        let swapped = vec![stops[0].clone(), stops[2].clone(), stops[1].clone()];
        assert_eq!(addresses(&order_route(&swapped)), ["Start", "West", "East"]);
    }

    #[test]
    fn test_order_rerun_reproduces_itself() {
        let stops = vec![
            Waypoint::new("A", 55.7558, 37.6173),
            Waypoint::new("B", 55.9000, 37.5000),
            Waypoint::new("C", 55.7652, 37.6010),
            Waypoint::new("D", 55.8000, 37.7000),
            Waypoint::new("E", 55.7000, 37.9000),
        ];
        let once = order_route(&stops);
        let twice = order_route(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_plan_route_totals_match_metric() {
        let stops = vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 0.0, 10.0),
            Waypoint::new("C", 0.0, 1.0),
        ];
        let route = plan_route("run", &stops);
        assert_eq!(route.name(), "run");
        assert_eq!(addresses(route.stops()), ["A", "C", "B"]);
        // Legs: one degree plus nine degrees along the equator.
        assert!((route.total_distance_km() - 1111.9492664455872).abs() < 1e-6);
    }

    #[test]
    fn test_plan_route_empty() {
        let route = plan_route("empty", &[]);
        assert!(route.is_empty());
        assert_eq!(route.total_distance_km(), 0.0);
    }
}
