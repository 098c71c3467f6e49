//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive question loop plus one-shot subcommands for
//! scripted analysis and listing the known cities.

mod prompt;

use crate::prompt::Session;
use anyhow::Result;
use bikeshare_explorer::city::City;
use bikeshare_explorer::filters::{DayFilter, MonthFilter};
use bikeshare_explorer::loader::load_city;
use bikeshare_explorer::output::{render_bundle, write_json};
use bikeshare_explorer::reports::ReportBundle;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the per-city CSV files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a city and filters, then print the reports (the default)
    Interactive,
    /// Compute the reports for one city without prompting
    Analyze {
        /// City to analyze
        #[arg(value_name = "CITY")]
        city: City,

        /// Month filter: "all" or January through June
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Day filter: "all" or a weekday name
        #[arg(short, long, default_value = "all")]
        day: DayFilter,

        /// Emit the reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the known cities and their data files
    Cities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // Stderr stays quiet by default so it does not interleave with prompts.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var_os("BIKESHARE_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), data_dir);
            session.run()?;
        }
        Commands::Analyze {
            city,
            month,
            day,
            json,
        } => {
            let table = load_city(&data_dir, city, month, day)?;
            let bundle = ReportBundle::compute(city, month, day, &table);

            let mut out = std::io::stdout().lock();
            if json {
                write_json(&mut out, &bundle)?;
            } else {
                render_bundle(&mut out, &bundle)?;
            }
        }
        Commands::Cities => {
            let mut out = std::io::stdout().lock();
            for city in City::ALL {
                writeln!(out, "{city:<15} {}", city.file_name())?;
            }
        }
    }

    Ok(())
}
