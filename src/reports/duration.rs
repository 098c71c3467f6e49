//! Total and mean trip duration over the filtered table.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::table::Table;

/// Sum and arithmetic mean of the duration column.
///
/// Convention for an empty table, applied everywhere and tested: the total
/// is 0.0 and the mean is `None` ("no data"), never NaN or a division
/// error.
#[derive(Debug, Serialize)]
pub struct DurationStats {
    /// Rows the aggregates were computed over.
    pub trips: usize,
    pub total_secs: f64,
    pub mean_secs: Option<f64>,
    /// Wall-clock time spent computing this report.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl DurationStats {
    pub fn from_table(table: &Table) -> Self {
        let started = Instant::now();

        let trips = table.len();
        let total_secs: f64 = table.rows().iter().map(|t| t.duration_secs).sum();
        let mean_secs = if trips == 0 {
            None
        } else {
            Some(total_secs / trips as f64)
        };

        let elapsed = started.elapsed();
        debug!(rows = trips, ?elapsed, "duration stats computed");
        DurationStats {
            trips,
            total_secs,
            mean_secs,
            elapsed,
        }
    }
}
