//! CSV waypoint reading.
//!
//! Expected input: a header row naming `address`, `latitude` and
//! `longitude` (any column order, extra columns ignored), then one row
//! per stop. Fields may be quoted, so addresses can contain commas:
//!
//! ```text
//! address,latitude,longitude
//! "Lenina st., 1",55.7558,37.6173
//! "Tverskaya st., 13",55.7652,37.6010
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::models::Waypoint;

use super::IngestError;

/// Parses waypoints from a CSV file on disk.
///
/// # Examples
///
/// ```no_run
/// use routeplan::ingest::parse_csv_file;
///
/// let waypoints = parse_csv_file("deliveries.csv")?;
/// println!("{} stops loaded", waypoints.len());
/// # Ok::<(), routeplan::ingest::IngestError>(())
/// ```
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Waypoint>, IngestError> {
    let file = File::open(path)?;
    parse_csv_reader(file)
}

/// Parses waypoints from in-memory CSV text.
///
/// # Examples
///
/// ```
/// use routeplan::ingest::parse_csv_str;
///
/// let data = "\
/// address,latitude,longitude
/// \"Lenina st., 1\",55.7558,37.6173
/// \"Tverskaya st., 13\",55.7652,37.6010
/// ";
/// let waypoints = parse_csv_str(data)?;
/// assert_eq!(waypoints.len(), 2);
/// assert_eq!(waypoints[0].address(), "Lenina st., 1");
/// # Ok::<(), routeplan::ingest::IngestError>(())
/// ```
pub fn parse_csv_str(data: &str) -> Result<Vec<Waypoint>, IngestError> {
    parse_csv_reader(data.as_bytes())
}

/// Parses waypoints from any CSV byte stream.
///
/// Columns are located by header name, surrounding whitespace is trimmed,
/// and every row passes through [`validated_waypoint`]. The first invalid
/// row aborts the parse with its line number; a cleanly parsed but empty
/// file is [`IngestError::Empty`].
pub fn parse_csv_reader<R: Read>(input: R) -> Result<Vec<Waypoint>, IngestError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers = reader.headers()?.clone();
    let address_col = require_column(&headers, "address")?;
    let latitude_col = require_column(&headers, "latitude")?;
    let longitude_col = require_column(&headers, "longitude")?;

    let mut waypoints = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Physical line where the record starts (header is line 1). A
        // quoted address can span lines, so the record index alone drifts.
        let line = record.position().map_or(row as u64 + 2, |p| p.line());
        let address = record.get(address_col).unwrap_or("");
        let latitude = parse_coordinate(record.get(latitude_col).unwrap_or(""), "latitude", line)?;
        let longitude =
            parse_coordinate(record.get(longitude_col).unwrap_or(""), "longitude", line)?;
        waypoints.push(validated_waypoint(address, latitude, longitude, line)?);
    }

    if waypoints.is_empty() {
        return Err(IngestError::Empty);
    }
    debug!("parsed {} waypoints from CSV", waypoints.len());
    Ok(waypoints)
}

/// Builds a [`Waypoint`] after enforcing the coordinate ranges.
///
/// This is the same check the CSV path applies to every row; frontends
/// accepting manually entered coordinates reuse it before handing stops
/// to the solver. `line` is the 1-based position reported in errors (for
/// manual entry, pass the entry number).
///
/// # Examples
///
/// ```
/// use routeplan::ingest::{validated_waypoint, IngestError};
///
/// let wp = validated_waypoint("Depot", 55.7558, 37.6173, 1)?;
/// assert_eq!(wp.address(), "Depot");
///
/// let err = validated_waypoint("Nowhere", 91.0, 0.0, 2).unwrap_err();
/// assert!(matches!(err, IngestError::LatitudeOutOfRange { line: 2, .. }));
/// # Ok::<(), routeplan::ingest::IngestError>(())
/// ```
pub fn validated_waypoint(
    address: impl Into<String>,
    latitude: f64,
    longitude: f64,
    line: u64,
) -> Result<Waypoint, IngestError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(IngestError::LatitudeOutOfRange {
            line,
            value: latitude,
        });
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(IngestError::LongitudeOutOfRange {
            line,
            value: longitude,
        });
    }
    Ok(Waypoint::new(address, latitude, longitude))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IngestError::MissingColumns {
            found: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

fn parse_coordinate(raw: &str, field: &'static str, line: u64) -> Result<f64, IngestError> {
    raw.parse::<f64>().map_err(|_| IngestError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let data = "\
address,latitude,longitude
Depot,55.7558,37.6173
Client,55.7652,37.6010
";
        let wps = parse_csv_str(data).expect("valid");
        assert_eq!(wps.len(), 2);
        assert_eq!(wps[0].address(), "Depot");
        assert_eq!(wps[1].latitude(), 55.7652);
    }

    #[test]
    fn test_parse_quoted_commas_in_address() {
        let data = "\
address,latitude,longitude
\"Lenina st., 1\",55.7558,37.6173
";
        let wps = parse_csv_str(data).expect("valid");
        assert_eq!(wps[0].address(), "Lenina st., 1");
    }

    #[test]
    fn test_parse_any_column_order_with_extras() {
        let data = "\
longitude,comment,address,latitude
37.6173,ignored,Depot,55.7558
";
        let wps = parse_csv_str(data).expect("valid");
        assert_eq!(wps[0].address(), "Depot");
        assert_eq!(wps[0].latitude(), 55.7558);
        assert_eq!(wps[0].longitude(), 37.6173);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let data = "\
address,latitude,longitude
  Depot  ,  55.7558 , 37.6173
";
        let wps = parse_csv_str(data).expect("valid");
        assert_eq!(wps[0].address(), "Depot");
        assert_eq!(wps[0].latitude(), 55.7558);
    }

    #[test]
    fn test_parse_missing_column() {
        let data = "\
address,lat,lon
Depot,55.7558,37.6173
";
        let err = parse_csv_str(data).unwrap_err();
        match err {
            IngestError::MissingColumns { found } => {
                assert!(found.contains("address"));
                assert!(found.contains("lat"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_number_reports_line() {
        let data = "\
address,latitude,longitude
Depot,55.7558,37.6173
Broken,not-a-number,37.0
";
        let err = parse_csv_str(data).unwrap_err();
        match err {
            IngestError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "latitude");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_physical_line_after_multiline_address() {
        // The quoted address spans two physical lines, so the bad row
        // sits on line 4 even though it is only the second record.
        let data = "\
address,latitude,longitude
\"Depot,
loading bay\",55.7558,37.6173
Broken,99.5,37.0
";
        let err = parse_csv_str(data).unwrap_err();
        match err {
            IngestError::LatitudeOutOfRange { line, value } => {
                assert_eq!(line, 4);
                assert_eq!(value, 99.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_latitude_out_of_range() {
        let data = "\
address,latitude,longitude
North pole and beyond,90.0001,0.0
";
        let err = parse_csv_str(data).unwrap_err();
        assert!(matches!(
            err,
            IngestError::LatitudeOutOfRange { line: 2, .. }
        ));
    }

    #[test]
    fn test_parse_longitude_out_of_range() {
        let data = "\
address,latitude,longitude
Depot,55.7558,37.6173
Off the map,0.0,-180.5
";
        let err = parse_csv_str(data).unwrap_err();
        assert!(matches!(
            err,
            IngestError::LongitudeOutOfRange { line: 3, .. }
        ));
    }

    #[test]
    fn test_parse_boundary_coordinates_accepted() {
        let data = "\
address,latitude,longitude
South pole,-90,0
Date line,0,180
";
        let wps = parse_csv_str(data).expect("boundary values are in range");
        assert_eq!(wps[0].latitude(), -90.0);
        assert_eq!(wps[1].longitude(), 180.0);
    }

    #[test]
    fn test_parse_no_rows() {
        let err = parse_csv_str("address,latitude,longitude\n").unwrap_err();
        assert!(matches!(err, IngestError::Empty));
    }

    #[test]
    fn test_parse_empty_input() {
        // No header at all: the required columns cannot be found.
        let err = parse_csv_str("").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns { .. }));
    }

    #[test]
    fn test_parse_uneven_row_is_a_csv_error() {
        let data = "\
address,latitude,longitude
Depot,55.7558
";
        let err = parse_csv_str(data).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn test_validated_waypoint_rejects_nan() {
        let err = validated_waypoint("Depot", f64::NAN, 0.0, 1).unwrap_err();
        assert!(matches!(err, IngestError::LatitudeOutOfRange { .. }));
        let err = validated_waypoint("Depot", 0.0, f64::INFINITY, 1).unwrap_err();
        assert!(matches!(err, IngestError::LongitudeOutOfRange { .. }));
    }

    #[test]
    fn test_validated_waypoint_accepts_bounds() {
        assert!(validated_waypoint("S", -90.0, -180.0, 1).is_ok());
        assert!(validated_waypoint("N", 90.0, 180.0, 1).is_ok());
    }

    #[test]
    fn test_parse_file_missing_is_io_error() {
        let err = parse_csv_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
