//! C ABI for embedding hosts (feature `ffi`).
//!
//! Stop lists cross the boundary as UTF-8 JSON arrays of
//! `{"address", "latitude", "longitude"}` objects, matching the serde
//! shape of [`crate::models::Waypoint`]. Returned strings are owned by
//! this library and must be released with [`routeplan_string_free`].
//! Failures surface as null pointers (for string returns) or NaN (for
//! numeric returns); this boundary validates coordinates the same way
//! CSV ingestion does.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use crate::distance::{haversine_km, route_length_km};
use crate::ingest::validated_waypoint;
use crate::models::Waypoint;
use crate::solver::order_route;

/// Orders a JSON stop array with the nearest-neighbor heuristic.
///
/// Returns a newly allocated JSON array holding the same stops in
/// visiting order, or null when the input is null, not UTF-8, not a
/// waypoint array, or carries out-of-range coordinates. Release the
/// result with [`routeplan_string_free`].
///
/// # Safety
///
/// `input` must be null or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn routeplan_order_route_json(input: *const c_char) -> *mut c_char {
    let raw = match str_from_ptr(input) {
        Some(s) => s,
        None => return ptr::null_mut(),
    };
    let waypoints = match waypoints_from_json(raw) {
        Some(w) => w,
        None => return ptr::null_mut(),
    };

    let ordered = order_route(&waypoints);
    match serde_json::to_string(&ordered) {
        Ok(json) => match CString::new(json) {
            Ok(out) => out.into_raw(),
            Err(_) => ptr::null_mut(),
        },
        Err(_) => ptr::null_mut(),
    }
}

/// Total open-path length in kilometers of a JSON stop array.
///
/// Returns NaN when the input is null or not a valid waypoint array.
///
/// # Safety
///
/// `input` must be null or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn routeplan_route_length_km_json(input: *const c_char) -> f64 {
    match str_from_ptr(input).and_then(waypoints_from_json) {
        Some(stops) => route_length_km(&stops),
        None => f64::NAN,
    }
}

/// Great-circle distance in kilometers between two coordinate pairs.
#[no_mangle]
pub extern "C" fn routeplan_haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = Waypoint::new("", lat1, lon1);
    let to = Waypoint::new("", lat2, lon2);
    haversine_km(&from, &to)
}

/// Releases a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn routeplan_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

unsafe fn str_from_ptr<'a>(input: *const c_char) -> Option<&'a str> {
    if input.is_null() {
        return None;
    }
    CStr::from_ptr(input).to_str().ok()
}

fn waypoints_from_json(raw: &str) -> Option<Vec<Waypoint>> {
    let parsed: Vec<Waypoint> = serde_json::from_str(raw).ok()?;
    for (idx, wp) in parsed.iter().enumerate() {
        validated_waypoint(wp.address(), wp.latitude(), wp.longitude(), idx as u64 + 1).ok()?;
    }
    Some(parsed)
}
