//! Most frequent times of travel: month, weekday, and start hour.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::reports::util::{Mode, mode};
use crate::table::{Table, Trip, day_name, month_name};

/// Modes of the calendar columns, each with its occurrence count.
///
/// `month` and `day` carry rendered names ("June", "Monday"); `hour` is the
/// 0-23 start hour, derived from the start time on demand rather than
/// stored in the table. Every field is `None` on an empty table.
#[derive(Debug, Serialize)]
pub struct TravelTimeStats {
    pub month: Option<Mode<String>>,
    pub day: Option<Mode<String>>,
    pub hour: Option<Mode<u32>>,
    /// Wall-clock time spent computing this report.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl TravelTimeStats {
    pub fn from_table(table: &Table) -> Self {
        let started = Instant::now();

        let month = mode(table.rows().iter().map(|t| t.month)).map(|m| Mode {
            value: month_name(m.value),
            count: m.count,
        });
        let day = mode(table.rows().iter().map(|t| t.weekday)).map(|m| Mode {
            value: day_name(m.value).to_string(),
            count: m.count,
        });
        let hour = mode(table.rows().iter().map(Trip::start_hour));

        let elapsed = started.elapsed();
        debug!(rows = table.len(), ?elapsed, "travel time stats computed");
        TravelTimeStats {
            month,
            day,
            hour,
            elapsed,
        }
    }
}
