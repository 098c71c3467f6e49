//! The interactive question loop.
//!
//! Drives stdin/stdout sessions for the `interactive` subcommand; generic
//! over reader and writer so tests can script a whole session.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use tracing::{debug, warn};

use bikeshare_explorer::city::City;
use bikeshare_explorer::filters::{DayFilter, MonthFilter};
use bikeshare_explorer::loader;
use bikeshare_explorer::output;
use bikeshare_explorer::reports::ReportBundle;
use bikeshare_explorer::table::Table;

/// Raw rows shown per pagination step.
const PAGE_SIZE: usize = 5;

/// One interactive session over a reader/writer pair.
pub struct Session<R, W> {
    input: R,
    out: W,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, data_dir: PathBuf) -> Self {
        Session {
            input,
            out,
            data_dir,
        }
    }

    /// Runs the question loop until the user declines a restart or input
    /// reaches end of file.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;

        loop {
            let Some(city) =
                self.ask::<City>("Which city? (Chicago, New York City, Washington)")?
            else {
                break;
            };
            let Some(month) =
                self.ask::<MonthFilter>("Which month? (all, or January through June)")?
            else {
                break;
            };
            let Some(day) = self.ask::<DayFilter>("Which day? (all, or Monday through Sunday)")?
            else {
                break;
            };

            debug!(%city, %month, %day, "selection made");

            match loader::load_city(&self.data_dir, city, month, day) {
                Ok(table) => {
                    let bundle = ReportBundle::compute(city, month, day, &table);
                    output::render_bundle(&mut self.out, &bundle)?;
                    self.page_raw_rows(&table)?;
                }
                Err(err) => {
                    warn!(%city, error = %err, "load failed");
                    writeln!(self.out, "Could not load data for {city}: {err}")?;
                }
            }

            match self.ask_yes("Would you like to restart? Enter yes or no.")? {
                Some(true) => continue,
                _ => break,
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    /// Asks `question` until the answer parses as a `T`. `Ok(None)` means
    /// end of input.
    fn ask<T>(&mut self, question: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        loop {
            writeln!(self.out, "{question}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.out, "{err}. Please try again.")?,
            }
        }
    }

    /// Yes/no question; anything other than "yes" or "y" counts as no.
    fn ask_yes(&mut self, question: &str) -> Result<Option<bool>> {
        writeln!(self.out, "{question}")?;
        self.out.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let answer = line.trim().to_ascii_lowercase();
        Ok(Some(answer == "yes" || answer == "y"))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Offers the filtered rows five at a time, including a final partial
    /// page, until the user stops or the rows run out.
    fn page_raw_rows(&mut self, table: &Table) -> Result<()> {
        let Some(mut wants) =
            self.ask_yes("Would you like to see raw data? Enter yes if you do.")?
        else {
            return Ok(());
        };

        let mut pages = table.pages(PAGE_SIZE);
        while wants {
            match pages.next() {
                Some(page) => output::render_trips(&mut self.out, page)?,
                None => {
                    writeln!(self.out, "No more rows to show.")?;
                    break;
                }
            }
            let question = format!(
                "Would you like to see {PAGE_SIZE} more rows? Enter yes if you do."
            );
            match self.ask_yes(&question)? {
                Some(answer) => wants = answer,
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:00:00,2017-01-02 08:05:00,300,A St,B St,Subscriber,Male,1989
1,2017-02-14 09:00:00,2017-02-14 09:10:00,600,A St,C St,Customer,Female,1992
2,2017-03-06 10:00:00,2017-03-06 10:07:00,420,B St,C St,Subscriber,Male,1985
3,2017-04-21 11:00:00,2017-04-21 11:15:00,900,C St,A St,Subscriber,,
4,2017-05-01 12:00:00,2017-05-01 12:03:00,180,A St,B St,Customer,Female,1959
5,2017-05-13 13:00:00,2017-05-13 13:10:00,600,B St,A St,Subscriber,Male,1989
6,2017-06-19 14:00:00,2017-06-19 14:09:00,540,A St,B St,Subscriber,Male,1994
";

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("bikeshare_prompt_{name}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("chicago.csv"), CHICAGO_CSV).unwrap();
        dir
    }

    fn run_session(data_dir: &Path, script: &str) -> String {
        let mut out = Vec::new();
        {
            let mut session =
                Session::new(Cursor::new(script), &mut out, data_dir.to_path_buf());
            session.run().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_session_renders_reports_and_raw_rows() {
        let dir = fixture_dir("full");
        let text = run_session(&dir, "chicago\nall\nall\nyes\nyes\nno\nno\n");

        assert!(text.contains("Hello! Let's explore some US bikeshare data!"));
        assert!(text.contains("Most frequent times of travel"));
        assert!(text.contains("Most popular stations and trip"));
        assert!(text.contains("Trip duration"));
        assert!(text.contains("User stats"));
        // Two pages: five rows, then the final partial page of two.
        assert_eq!(text.matches(" -> ").count(), 7);
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_answers_reprompt_with_parse_error() {
        let dir = fixture_dir("reprompt");
        let text = run_session(
            &dir,
            "boston\nchicago\ndecember\nmay\nsomeday\nmonday\nno\nno\n",
        );

        assert!(text.contains("unknown city 'boston'"));
        assert!(text.contains("unknown month 'december'"));
        assert!(text.contains("unknown day 'someday'"));
        // The session recovered and produced a report for May Mondays.
        assert!(text.contains("Trip duration"));
        assert!(text.contains("Chicago | month: May, day: Monday (1 trip)\n"));
    }

    #[test]
    fn test_restart_runs_a_second_cycle_with_fresh_filters() {
        let dir = fixture_dir("restart");
        let text = run_session(
            &dir,
            "chicago\nall\nall\nno\nyes\nchicago\nmay\nmonday\nno\nno\n",
        );

        // One full report render per cycle.
        assert_eq!(text.matches("Most frequent times of travel").count(), 2);
        assert!(text.contains("Chicago | month: all, day: all (7 trips)"));
        // The second cycle loads and filters a fresh table.
        assert!(text.contains("Chicago | month: May, day: Monday (1 trip)\n"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_pagination_reports_when_rows_run_out() {
        let dir = fixture_dir("exhaust");
        let text = run_session(&dir, "chicago\nall\nall\nyes\nyes\nyes\nno\n");

        assert_eq!(text.matches(" -> ").count(), 7);
        assert!(text.contains("No more rows to show."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let dir = fixture_dir("eof");
        let text = run_session(&dir, "");

        assert!(text.contains("Hello!"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_missing_file_reports_error_and_continues() {
        let dir = env::temp_dir().join("bikeshare_prompt_missing");
        fs::create_dir_all(&dir).unwrap();
        let _ = fs::remove_file(dir.join("chicago.csv"));

        let text = run_session(&dir, "chicago\nall\nall\nno\n");

        assert!(text.contains("Could not load data for Chicago:"));
        assert!(text.contains("Goodbye!"));
    }
}
