//! Output formatting for the statistics reports.
//!
//! The prompt loop and the one-shot `analyze` command both render through
//! these writers; JSON output goes through [`write_json`] / [`print_json`].

use std::fmt;
use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::reports::ReportBundle;
use crate::reports::duration::DurationStats;
use crate::reports::stations::StationStats;
use crate::reports::travel::TravelTimeStats;
use crate::reports::users::UserStats;
use crate::reports::util::{CategoryCount, Mode};
use crate::table::Trip;

const RULE: &str = "----------------------------------------";

/// Renders all four reports in their printing order.
pub fn render_bundle<W: Write>(out: &mut W, bundle: &ReportBundle) -> io::Result<()> {
    writeln!(
        out,
        "\n{} | month: {}, day: {} ({})",
        bundle.city,
        bundle.month,
        bundle.day,
        trip_count(bundle.rows)
    )?;
    writeln!(out, "{RULE}")?;
    render_travel(out, &bundle.travel_times)?;
    render_stations(out, &bundle.stations)?;
    render_duration(out, &bundle.durations)?;
    render_users(out, &bundle.users)
}

pub fn render_travel<W: Write>(out: &mut W, stats: &TravelTimeStats) -> io::Result<()> {
    writeln!(out, "\nMost frequent times of travel")?;
    writeln!(out, "  Most common month:       {}", mode_line(&stats.month))?;
    writeln!(out, "  Most common day of week: {}", mode_line(&stats.day))?;
    writeln!(out, "  Most common start hour:  {}", mode_line(&stats.hour))?;
    writeln!(out, "  This took {:.4} seconds.", stats.elapsed.as_secs_f64())?;
    writeln!(out, "{RULE}")
}

pub fn render_stations<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    writeln!(out, "\nMost popular stations and trip")?;
    writeln!(
        out,
        "  Most common start station: {}",
        mode_line(&stats.start_station)
    )?;
    writeln!(
        out,
        "  Most common end station:   {}",
        mode_line(&stats.end_station)
    )?;
    writeln!(out, "  Most common trip:          {}", mode_line(&stats.trip))?;
    writeln!(out, "  This took {:.4} seconds.", stats.elapsed.as_secs_f64())?;
    writeln!(out, "{RULE}")
}

pub fn render_duration<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(out, "\nTrip duration")?;
    writeln!(out, "  Total travel time: {} seconds", stats.total_secs)?;
    match stats.mean_secs {
        Some(mean) => writeln!(out, "  Mean travel time:  {mean:.2} seconds")?,
        None => writeln!(out, "  Mean travel time:  (no data)")?,
    }
    writeln!(out, "  This took {:.4} seconds.", stats.elapsed.as_secs_f64())?;
    writeln!(out, "{RULE}")
}

pub fn render_users<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "\nUser stats")?;
    writeln!(out, "  Counts by user type:")?;
    write_counts(out, &stats.user_types)?;
    if let Some(genders) = &stats.genders {
        writeln!(out, "  Counts by gender:")?;
        write_counts(out, genders)?;
    }
    if let Some(years) = &stats.birth_years {
        writeln!(out, "  Earliest birth year:    {}", years.earliest)?;
        writeln!(out, "  Most recent birth year: {}", years.most_recent)?;
        writeln!(out, "  Most common birth year: {}", years.most_common)?;
    }
    writeln!(out, "  This took {:.4} seconds.", stats.elapsed.as_secs_f64())?;
    writeln!(out, "{RULE}")
}

/// Writes one page of raw trip rows for the pagination prompt.
pub fn render_trips<W: Write>(out: &mut W, trips: &[Trip]) -> io::Result<()> {
    for trip in trips {
        let mut line = format!(
            "  {} | {:>8.1}s | {} -> {} | {}",
            trip.start_time.format("%Y-%m-%d %H:%M:%S"),
            trip.duration_secs,
            trip.start_station,
            trip.end_station,
            trip.user_type,
        );
        if let Some(gender) = &trip.gender {
            line.push_str(&format!(" | {gender}"));
        }
        if let Some(year) = trip.birth_year {
            line.push_str(&format!(" | born {year}"));
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes `value` as pretty JSON, used by `analyze --json`.
pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Logs any serializable stats value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn mode_line<T: fmt::Display>(mode: &Option<Mode<T>>) -> String {
    match mode {
        Some(m) => format!("{} ({})", m.value, trip_count(m.count)),
        None => "(no data)".to_string(),
    }
}

fn trip_count(count: usize) -> String {
    if count == 1 {
        "1 trip".to_string()
    } else {
        format!("{count} trips")
    }
}

fn write_counts<W: Write>(out: &mut W, counts: &[CategoryCount]) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "    (no data)");
    }
    for entry in counts {
        let category = if entry.category.is_empty() {
            "(blank)"
        } else {
            &entry.category
        };
        writeln!(out, "    {category}: {}", entry.count)?;
    }
    Ok(())
}
