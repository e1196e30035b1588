//! SQLite-backed route store.

use std::path::Path;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{Route, Waypoint};

use super::{RouteSummary, StoreError};

/// Store of planned routes in a SQLite database.
///
/// The schema is created on open and is idempotent, so pointing two
/// openings at the same file is fine. Waypoints belong to their route
/// through a cascading foreign key; deleting a route removes its stops
/// in the same statement.
///
/// # Examples
///
/// ```
/// use routeplan::models::{Route, Waypoint};
/// use routeplan::store::RouteStore;
///
/// let mut store = RouteStore::open_in_memory()?;
/// let route = Route::new(
///     "Morning run",
///     vec![Waypoint::new("Depot", 55.7558, 37.6173)],
///     0.0,
/// );
/// let id = store.save_route(&route)?;
/// assert_eq!(store.load_route(id)?.name(), "Morning run");
/// # Ok::<(), routeplan::store::StoreError>(())
/// ```
pub struct RouteStore {
    conn: Connection,
}

impl RouteStore {
    /// Opens a store at `path`, creating the file and schema as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a fresh in-memory store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE IF NOT EXISTS routes (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                 total_distance_km REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS waypoints (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 route_id INTEGER NOT NULL REFERENCES routes(id) ON DELETE CASCADE,
                 address TEXT NOT NULL,
                 latitude REAL NOT NULL,
                 longitude REAL NOT NULL,
                 order_index INTEGER NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_waypoints_route
                 ON waypoints(route_id, order_index);",
        )?;
        Ok(Self { conn })
    }

    /// Saves a route with its stops; returns the assigned id.
    ///
    /// The route row and all waypoint rows land in one transaction, so a
    /// failure partway leaves nothing behind.
    pub fn save_route(&mut self, route: &Route) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO routes (name, total_distance_km) VALUES (?1, ?2)",
            params![route.name(), route.total_distance_km()],
        )?;
        let route_id = tx.last_insert_rowid();
        {
            let mut insert = tx.prepare(
                "INSERT INTO waypoints (route_id, address, latitude, longitude, order_index)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (order_index, stop) in route.stops().iter().enumerate() {
                insert.execute(params![
                    route_id,
                    stop.address(),
                    stop.latitude(),
                    stop.longitude(),
                    order_index as i64,
                ])?;
            }
        }
        tx.commit()?;
        debug!("saved route {route_id} with {} stops", route.len());
        Ok(route_id)
    }

    /// Loads a route with its stops in visiting order.
    pub fn load_route(&self, id: i64) -> Result<Route, StoreError> {
        let header: Option<(String, f64)> = self
            .conn
            .query_row(
                "SELECT name, total_distance_km FROM routes WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let (name, total_distance_km) = header.ok_or(StoreError::RouteNotFound { id })?;

        let mut select = self.conn.prepare(
            "SELECT address, latitude, longitude FROM waypoints
             WHERE route_id = ?1 ORDER BY order_index",
        )?;
        let stops = select
            .query_map(params![id], |row| {
                Ok(Waypoint::new(
                    row.get::<_, String>(0)?,
                    row.get(1)?,
                    row.get(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route::new(name, stops, total_distance_km))
    }

    /// Overwrites a stored total, e.g. with a road-accurate figure.
    pub fn update_total_distance(&self, id: i64, total_distance_km: f64) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE routes SET total_distance_km = ?1 WHERE id = ?2",
            params![total_distance_km, id],
        )?;
        if changed == 0 {
            return Err(StoreError::RouteNotFound { id });
        }
        Ok(())
    }

    /// Deletes a route and, through the cascade, its waypoints.
    pub fn delete_route(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM routes WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::RouteNotFound { id });
        }
        debug!("deleted route {id}");
        Ok(())
    }

    /// Lists stored routes, newest first.
    pub fn list_routes(&self) -> Result<Vec<RouteSummary>, StoreError> {
        let mut select = self.conn.prepare(
            "SELECT r.id, r.name, r.created_at, r.total_distance_km,
                    (SELECT COUNT(*) FROM waypoints w WHERE w.route_id = r.id)
             FROM routes r
             ORDER BY r.id DESC",
        )?;
        let summaries = select
            .query_map([], |row| {
                Ok(RouteSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                    total_distance_km: row.get(3)?,
                    num_stops: row.get::<_, i64>(4)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(summaries)
    }
}
