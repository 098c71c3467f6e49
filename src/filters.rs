//! Month and weekday selectors and their application to a table.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::error::DataError;
use crate::table::{Table, day_name};

/// Month constraint: everything, or one of the six months the source data
/// spans (January through June).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl MonthFilter {
    /// 1-based ordinal compared against the derived month column, if any.
    pub fn ordinal(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Month(m) => Some(m.number_from_month()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        let month = match name.to_ascii_lowercase().as_str() {
            "january" | "jan" => Month::January,
            "february" | "feb" => Month::February,
            "march" | "mar" => Month::March,
            "april" | "apr" => Month::April,
            "may" => Month::May,
            "june" | "jun" => Month::June,
            _ => {
                return Err(DataError::UnknownMonth {
                    name: name.to_string(),
                });
            }
        };
        Ok(MonthFilter::Month(month))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(m.name()),
        }
    }
}

/// Weekday constraint: everything, or one named day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// The selected weekday, if any.
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DayFilter::All => None,
            DayFilter::Day(d) => Some(d),
        }
    }
}

impl FromStr for DayFilter {
    type Err = DataError;

    /// Accepts "all" or a weekday name ("monday"/"Mon"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        name.parse::<Weekday>()
            .map(DayFilter::Day)
            .map_err(|_| DataError::UnknownDay {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(day_name(*d)),
        }
    }
}

impl Table {
    /// Restricts the table to rows matching both selectors (AND semantics).
    ///
    /// Returns a new table and leaves the receiver untouched. The selectors
    /// are independent, so applying them one at a time in either order
    /// yields the same rows as applying both at once. Zero matches is a
    /// valid outcome: reports render an empty table as "no data" rather
    /// than failing.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> Table {
        let rows: Vec<_> = self
            .rows()
            .iter()
            .filter(|t| month.ordinal().map_or(true, |m| t.month == m))
            .filter(|t| day.weekday().map_or(true, |d| t.weekday == d))
            .cloned()
            .collect();
        Table::new(rows, self.has_gender(), self.has_birth_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Trip;
    use chrono::NaiveDateTime;

    fn trip(datetime: &str) -> Trip {
        let start_time =
            NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip::new(
            start_time,
            "A St".to_string(),
            "B St".to_string(),
            120.0,
            "Subscriber".to_string(),
            None,
            None,
        )
    }

    // Six rows: months 1,1,3,3,5,6; weekdays Mon,Tue,Mon,Wed,Mon,Fri.
    fn sample_table() -> Table {
        let rows = vec![
            trip("2017-01-02 08:00:00"), // Monday
            trip("2017-01-03 09:00:00"), // Tuesday
            trip("2017-03-06 10:00:00"), // Monday
            trip("2017-03-15 11:00:00"), // Wednesday
            trip("2017-05-01 12:00:00"), // Monday
            trip("2017-06-30 13:00:00"), // Friday
        ];
        Table::new(rows, true, true)
    }

    #[test]
    fn test_parse_month_filter() {
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "March".parse::<MonthFilter>().unwrap(),
            MonthFilter::Month(Month::March)
        );
        assert_eq!(
            "JUNE".parse::<MonthFilter>().unwrap(),
            MonthFilter::Month(Month::June)
        );
        assert_eq!(
            MonthFilter::Month(Month::January).ordinal(),
            Some(1)
        );
    }

    #[test]
    fn test_parse_month_rejects_out_of_range_names() {
        // The data spans January-June only; later months are not selectable.
        let err = "december".parse::<MonthFilter>().unwrap_err();
        assert!(matches!(err, DataError::UnknownMonth { name } if name == "december"));
        assert!("noise".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_parse_day_filter() {
        assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "monday".parse::<DayFilter>().unwrap(),
            DayFilter::Day(Weekday::Mon)
        );
        assert_eq!(
            "SUNDAY".parse::<DayFilter>().unwrap(),
            DayFilter::Day(Weekday::Sun)
        );
        assert!(matches!(
            "someday".parse::<DayFilter>().unwrap_err(),
            DataError::UnknownDay { .. }
        ));
    }

    #[test]
    fn test_filter_all_all_is_identity() {
        let table = sample_table();
        let filtered = table.filter(MonthFilter::All, DayFilter::All);
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_filter_by_month() {
        let table = sample_table();
        let march = table.filter("march".parse().unwrap(), DayFilter::All);
        assert_eq!(march.len(), 2);
        assert!(march.rows().iter().all(|t| t.month == 3));
    }

    #[test]
    fn test_filter_by_day() {
        let table = sample_table();
        let mondays = table.filter(MonthFilter::All, "monday".parse().unwrap());
        assert_eq!(mondays.len(), 3);
        assert!(mondays.rows().iter().all(|t| t.weekday == Weekday::Mon));
    }

    #[test]
    fn test_filters_commute() {
        let table = sample_table();
        let month: MonthFilter = "march".parse().unwrap();
        let day: DayFilter = "monday".parse().unwrap();

        let both = table.filter(month, day);
        let month_then_day = table.filter(month, DayFilter::All).filter(MonthFilter::All, day);
        let day_then_month = table.filter(MonthFilter::All, day).filter(month, DayFilter::All);

        assert_eq!(both, month_then_day);
        assert_eq!(both, day_then_month);
        assert_eq!(both.len(), 1);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let table = sample_table();
        let before = table.clone();
        let _ = table.filter("january".parse().unwrap(), "tuesday".parse().unwrap());
        assert_eq!(table, before);
    }

    #[test]
    fn test_no_matches_yields_empty_table() {
        let table = sample_table();
        // No June rows fall on a Monday in the sample.
        let empty = table.filter("june".parse().unwrap(), "monday".parse().unwrap());
        assert!(empty.is_empty());
        // Presence flags survive filtering.
        assert!(empty.has_gender());
        assert!(empty.has_birth_year());
    }

    #[test]
    fn test_selector_display_names() {
        assert_eq!(MonthFilter::All.to_string(), "all");
        assert_eq!(MonthFilter::Month(Month::May).to_string(), "May");
        assert_eq!(DayFilter::Day(Weekday::Wed).to_string(), "Wednesday");
    }
}
