//! Waypoint ingestion: CSV files and manually entered coordinates.
//!
//! This is the only layer that enforces the coordinate contract. Rows and
//! entries that pass come out as [`crate::models::Waypoint`] values the
//! distance and solver modules can trust; everything suspicious is
//! rejected here with a line-numbered error.

mod reader;

pub use reader::{parse_csv_file, parse_csv_reader, parse_csv_str, validated_waypoint};

use thiserror::Error;

/// Errors raised while reading or validating waypoint input.
///
/// Line numbers count from 1 and include the header row, so the first
/// data row of a CSV file reports as line 2.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input could not be read at all.
    #[error("failed to read waypoint input: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself is malformed (unbalanced quotes, rows of
    /// uneven length, invalid UTF-8).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks at least one of the required columns.
    #[error("CSV must contain the columns address, latitude and longitude; found: {found}")]
    MissingColumns {
        /// The header names that were actually present.
        found: String,
    },

    /// A coordinate field does not parse as a number.
    #[error("line {line}: {field} is not a number: {value:?}")]
    InvalidNumber {
        /// 1-based line of the offending row.
        line: u64,
        /// Which column failed, `"latitude"` or `"longitude"`.
        field: &'static str,
        /// The raw field content.
        value: String,
    },

    /// A latitude outside `[-90, 90]` or non-finite.
    #[error("line {line}: latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// 1-based line of the offending row.
        line: u64,
        /// The rejected value.
        value: f64,
    },

    /// A longitude outside `[-180, 180]` or non-finite.
    #[error("line {line}: longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// 1-based line of the offending row.
        line: u64,
        /// The rejected value.
        value: f64,
    },

    /// The input parsed cleanly but contained no waypoint rows.
    #[error("no waypoints found in input")]
    Empty,
}
