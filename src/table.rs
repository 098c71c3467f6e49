//! Trip records and the in-memory table one load/filter cycle produces.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

/// One bicycle-share trip, with calendar fields derived once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip length in seconds; some source files carry fractional values.
    pub duration_secs: f64,
    pub user_type: String,
    /// Per-row value; `None` when the cell is empty or the column is absent.
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived: 1-based month ordinal of `start_time`.
    pub month: u32,
    /// Derived: weekday of `start_time`.
    pub weekday: Weekday,
}

impl Trip {
    /// Builds a trip from its source fields, deriving the calendar columns.
    pub fn new(
        start_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            gender,
            birth_year,
        }
    }

    /// Start hour (0-23), derived on demand; only the travel-times report
    /// needs it.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// The derived trip key used by the station report.
    pub fn trip_key(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

/// The ordered trip records of one load/filter cycle, plus presence flags
/// for the optional demographic columns.
///
/// The flags are read from the CSV header exactly once at load time; a
/// missing `Gender` or `Birth Year` column is a per-city schema variation,
/// not an error, and the matching sub-report is skipped entirely. Filtering
/// produces a new, smaller table; an existing table is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Trip>,
    has_gender: bool,
    has_birth_year: bool,
}

impl Table {
    pub fn new(rows: Vec<Trip>, has_gender: bool, has_birth_year: bool) -> Self {
        Table {
            rows,
            has_gender,
            has_birth_year,
        }
    }

    /// Rows in load order.
    pub fn rows(&self) -> &[Trip] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source file carried a `Gender` column.
    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Whether the source file carried a `Birth Year` column.
    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Pages of `page_size` rows for raw display; the final page may hold
    /// fewer rows. `page_size` must be non-zero.
    pub fn pages(&self, page_size: usize) -> std::slice::Chunks<'_, Trip> {
        self.rows.chunks(page_size)
    }
}

/// Full English name for a 1-based month ordinal.
///
/// Ordinals outside 1-12 can only come from data-quality issues upstream;
/// they render as `"month N"` instead of failing the report.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("month {month}"))
}

/// Full English weekday name ("Monday").
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
