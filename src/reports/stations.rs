//! Most popular start station, end station, and start-to-end trip.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::reports::util::{Mode, mode};
use crate::table::{Table, Trip};

/// Station column modes, each with its occurrence count.
///
/// `trip` is the mode of the derived trip key `"{start} to {end}"`. Every
/// field is `None` on an empty table.
#[derive(Debug, Serialize)]
pub struct StationStats {
    pub start_station: Option<Mode<String>>,
    pub end_station: Option<Mode<String>>,
    pub trip: Option<Mode<String>>,
    /// Wall-clock time spent computing this report.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl StationStats {
    pub fn from_table(table: &Table) -> Self {
        let started = Instant::now();

        let start_station = mode(table.rows().iter().map(|t| t.start_station.clone()));
        let end_station = mode(table.rows().iter().map(|t| t.end_station.clone()));
        let trip = mode(table.rows().iter().map(Trip::trip_key));

        let elapsed = started.elapsed();
        debug!(rows = table.len(), ?elapsed, "station stats computed");
        StationStats {
            start_station,
            end_station,
            trip,
            elapsed,
        }
    }
}
