//! User demographics: type distribution, gender distribution, birth years.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::reports::util::{CategoryCount, category_counts, mode};
use crate::table::Table;

/// Earliest, most recent, and most common birth year, as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    /// Mode of the column; ties broken by first occurrence in load order.
    pub most_common: i32,
}

/// Frequency counts over the demographic columns.
///
/// `genders` is `None` when the source file has no Gender column: the
/// sub-report is omitted entirely, not rendered as an empty distribution.
/// With the column present it is `Some`, possibly over zero rows. Blank
/// gender cells are per-row gaps and excluded from the counts.
///
/// `birth_years` requires the column *and* at least one valued row, since
/// min/max/mode are undefined otherwise; in both failure cases the
/// sub-report is omitted.
#[derive(Debug, Serialize)]
pub struct UserStats {
    /// Counts per user type, descending, ties by name. Every row carries a
    /// user type (blank cells count verbatim), so these always sum to the
    /// table's row count.
    pub user_types: Vec<CategoryCount>,
    pub genders: Option<Vec<CategoryCount>>,
    pub birth_years: Option<BirthYearStats>,
    /// Wall-clock time spent computing this report.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl UserStats {
    pub fn from_table(table: &Table) -> Self {
        let started = Instant::now();

        let user_types = category_counts(table.rows().iter().map(|t| t.user_type.clone()));

        let genders = if table.has_gender() {
            Some(category_counts(
                table.rows().iter().filter_map(|t| t.gender.clone()),
            ))
        } else {
            None
        };

        let birth_years = if table.has_birth_year() {
            birth_year_stats(table)
        } else {
            None
        };

        let elapsed = started.elapsed();
        debug!(rows = table.len(), ?elapsed, "user stats computed");
        UserStats {
            user_types,
            genders,
            birth_years,
            elapsed,
        }
    }
}

fn birth_year_stats(table: &Table) -> Option<BirthYearStats> {
    let years: Vec<i32> = table.rows().iter().filter_map(|t| t.birth_year).collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let most_common = mode(years.iter().copied())?.value;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
