//! `kalends` CLI — expand iCalendar recurrences from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Expand a calendar over January 2016, one line per event
//! kalends expand -i calendar.ics --from 2016-01-01 --to 2016-02-01
//!
//! # Same window, JSON output
//! kalends expand -i calendar.ics --from 2016-01-01 --to 2016-02-01 --json
//!
//! # Materialize the expanded events back to an ICS document
//! kalends write -i calendar.ics --from 2016-01-01 --to 2016-02-01 -o expanded.ics
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "iCalendar recurrence expansion CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand recurring events over a window and print them
    Expand {
        /// Input .ics file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Window start, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (UTC)
        #[arg(long)]
        from: String,
        /// Window end, same formats
        #[arg(long)]
        to: String,
        /// Emit a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Expand and write the events back out as an ICS document
    Write {
        /// Input .ics file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Window start, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (UTC)
        #[arg(long)]
        from: String,
        /// Window end, same formats
        #[arg(long)]
        to: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            input,
            output,
            from,
            to,
            json,
        } => {
            let data = read_input(input.as_deref())?;
            let calendar =
                kalends_ical::read_calendar(&data).context("Failed to read calendar")?;
            let events = calendar.events(parse_bound(&from)?, parse_bound(&to)?);

            let rendered = if json {
                serde_json::to_string_pretty(&events)?
            } else {
                events
                    .iter()
                    .map(|event| {
                        format!(
                            "{}  {}  {}",
                            event.date_start().to_rfc3339(),
                            event.date_end().to_rfc3339(),
                            event.title()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Write {
            input,
            output,
            from,
            to,
        } => {
            let data = read_input(input.as_deref())?;
            let calendar =
                kalends_ical::read_calendar(&data).context("Failed to read calendar")?;
            let ics =
                kalends_ical::write_calendar(&calendar, parse_bound(&from)?, parse_bound(&to)?);
            write_output(output.as_deref(), &ics)?;
        }
    }

    Ok(())
}

/// Parse a window bound as a UTC date or datetime.
fn parse_bound(value: &str) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .with_context(|| format!("Invalid window bound: {}", value))?;
    Ok(Tz::UTC.from_utc_datetime(&naive))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
