//! Persistence of planned routes (feature `store-sqlite`).
//!
//! Saved routes keep their stop order, so a reload replays the exact
//! visiting sequence the solver produced. The stored total starts as the
//! great-circle figure and can be overwritten once a road-accurate one
//! arrives.

mod sqlite;

pub use sqlite::RouteStore;

use thiserror::Error;

/// A row in the stored-route listing.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Identifier assigned when the route was saved.
    pub id: i64,
    /// Route name.
    pub name: String,
    /// Creation timestamp as recorded by SQLite, UTC
    /// `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// Stored total distance in kilometers.
    pub total_distance_km: f64,
    /// Number of stops in the route.
    pub num_stops: usize,
}

/// Errors from the route store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),

    /// No route with the requested id.
    #[error("route {id} not found")]
    RouteNotFound {
        /// The id that was looked up.
        id: i64,
    },
}
