//! CSV loading for the per-city trip files.
//!
//! Reads a city's flat file into a [`Table`], parsing the `Start Time`
//! column and deriving the calendar fields the reports need. Loading and
//! filtering compose into one pipeline stage: the table handed back is
//! already restricted to the requested month and day.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::city::City;
use crate::error::DataError;
use crate::filters::{DayFilter, MonthFilter};
use crate::table::{Table, Trip};

/// Timestamp layout shared by every city file.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV record as it appears on disk.
///
/// Extra columns (`End Time`, the unnamed leading index) are ignored. The
/// demographic fields decode to `None` both when the column is missing and
/// when a cell is empty; which of the two happened is recorded once, from
/// the header, in the table's presence flags.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads `city`'s data file from `data_dir` and applies both selectors.
///
/// # Errors
///
/// [`DataError::Io`] when the file cannot be read, and
/// [`DataError::MalformedRecord`] / [`DataError::MalformedTimestamp`] when
/// any row fails to decode: one bad start time rejects the whole load,
/// since the derived calendar columns assume every timestamp is valid.
pub fn load_city(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<Table, DataError> {
    let path = city.data_file(data_dir);
    let table = load_table(&path)?;
    debug!(city = %city, rows = table.len(), "city file loaded");

    let filtered = table.filter(month, day);
    debug!(
        rows = filtered.len(),
        month = %month,
        day = %day,
        "filters applied"
    );
    Ok(filtered)
}

/// Reads the whole CSV at `path` into an unfiltered [`Table`].
pub fn load_table(path: &Path) -> Result<Table, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| DataError::MalformedRecord {
            path: path.to_path_buf(),
            row: 0,
            source,
        })?;
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<RawTrip>().enumerate() {
        let row = index + 1;
        let raw = record.map_err(|source| DataError::MalformedRecord {
            path: path.to_path_buf(),
            row,
            source,
        })?;
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .map_err(|_| DataError::MalformedTimestamp {
                path: path.to_path_buf(),
                row,
                value: raw.start_time.clone(),
            })?;
        rows.push(Trip::new(
            start_time,
            raw.start_station,
            raw.end_station,
            raw.trip_duration,
            raw.user_type,
            raw.gender,
            raw.birth_year.map(|y| y as i32),
        ));
    }

    Ok(Table::new(rows, has_gender, has_birth_year))
}
