//! Aggregation reports over a filtered trip table.
//!
//! Each report is a pure pass over the shared immutable table: none mutates
//! it or depends on another report's output, so they can run in any order.
//! Every report also records its own wall-clock computation time.

pub mod duration;
pub mod stations;
pub mod travel;
pub mod users;
pub mod util;

use serde::Serialize;

use crate::city::City;
use crate::filters::{DayFilter, MonthFilter};
use crate::table::Table;

use duration::DurationStats;
use stations::StationStats;
use travel::TravelTimeStats;
use users::UserStats;

/// All four reports over one filtered table, in the order the tool prints
/// them, plus the selection that produced it.
#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub city: City,
    pub month: String,
    pub day: String,
    pub rows: usize,
    pub travel_times: TravelTimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

impl ReportBundle {
    pub fn compute(city: City, month: MonthFilter, day: DayFilter, table: &Table) -> Self {
        ReportBundle {
            city,
            month: month.to_string(),
            day: day.to_string(),
            rows: table.len(),
            travel_times: TravelTimeStats::from_table(table),
            stations: StationStats::from_table(table),
            durations: DurationStats::from_table(table),
            users: UserStats::from_table(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Trip;
    use chrono::NaiveDateTime;

    #[test]
    fn test_bundle_records_selection_and_row_count() {
        let start_time =
            NaiveDateTime::parse_from_str("2017-06-19 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let table = Table::new(
            vec![Trip::new(
                start_time,
                "A St".to_string(),
                "B St".to_string(),
                60.0,
                "Subscriber".to_string(),
                None,
                None,
            )],
            false,
            false,
        );

        let bundle = ReportBundle::compute(
            City::Chicago,
            "june".parse().unwrap(),
            "monday".parse().unwrap(),
            &table,
        );

        assert_eq!(bundle.city, City::Chicago);
        assert_eq!(bundle.month, "June");
        assert_eq!(bundle.day, "Monday");
        assert_eq!(bundle.rows, 1);
        assert_eq!(bundle.durations.trips, 1);
        assert_eq!(bundle.travel_times.month.as_ref().unwrap().value, "June");
    }
}
