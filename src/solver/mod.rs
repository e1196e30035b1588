//! Route-ordering solver.
//!
//! Turns an unordered list of waypoints into a visiting sequence with the
//! nearest-neighbor heuristic. The first waypoint is the fixed start; the
//! result is an open path. Pure computation over pre-validated input.

mod nearest_neighbor;

pub use nearest_neighbor::{order_route, plan_route};
