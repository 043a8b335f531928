//! `calkit` CLI — month grids, week labels and event conflict checks.
//!
//! ## Usage
//!
//! ```sh
//! # Month grid for the month containing a date (today if omitted)
//! calkit month --date 2025-07-15
//!
//! # Week label and the seven dates of the week
//! calkit week --date 2025-07-02
//!
//! # Days in a month
//! calkit days --year 2024 --month 2
//!
//! # Events on the 1st of any month (stdin → stdout)
//! cat events.json | calkit day --day 1
//!
//! # Events overlapping a proposed slot
//! calkit overlaps -i events.json --date 2025-07-01 --start 09:30 --end 10:30
//!
//! # Every conflicting pair in a file
//! calkit conflicts -i events.json
//! ```
//!
//! Set `RUST_LOG=debug` to see which inputs were rejected as invalid.

use anyhow::{Context, Result};
use calendar_kit::timestamp::{try_parse_date, try_parse_time};
use calendar_kit::{
    days_in_month, events_on_day, find_conflicts, find_overlapping_events, format_iso_date,
    format_month_label, format_week_label, load_events, week_dates_containing, weeks_in_month,
    Event,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

const WEEKDAY_HEADER: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

#[derive(Parser)]
#[command(
    name = "calkit",
    version,
    about = "Calendar grid and event overlap tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the week grid of a month
    Month {
        /// Any date in the month, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print the week label and the dates of a week
    Week {
        /// Any date in the week, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print the number of days in a month
    Days {
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        /// 1-indexed month
        #[arg(long)]
        month: u32,
    },
    /// List events falling on a day of the month
    Day {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day of month, 1-31
        #[arg(long)]
        day: u32,
    },
    /// List events overlapping a proposed time slot
    Overlaps {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Slot date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Slot start, HH:mm
        #[arg(long)]
        start: String,
        /// Slot end, HH:mm
        #[arg(long)]
        end: String,
        /// Id of the event being edited; events with this id are skipped
        #[arg(long, default_value = "")]
        id: String,
    },
    /// List every pair of overlapping events
    Conflicts {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Month { date } => {
            let date = resolve_date(date.as_deref())?;
            println!("{}", format_month_label(date));
            println!("{}", WEEKDAY_HEADER.join(" "));
            for week in weeks_in_month(date) {
                let cells: Vec<String> = week
                    .iter()
                    .map(|slot| match slot {
                        Some(day) => format!("{:>2}", day),
                        None => "  ".to_string(),
                    })
                    .collect();
                println!("{}", cells.join(" ").trim_end());
            }
        }
        Commands::Week { date } => {
            let date = resolve_date(date.as_deref())?;
            println!("{}", format_week_label(date));
            let week = week_dates_containing(date)
                .context("Week extends past the supported date range")?;
            for day in week {
                println!("{}", format_iso_date(day, None));
            }
        }
        Commands::Days { year, month } => {
            if !(1..=12).contains(&month) {
                tracing::warn!(month, "month outside 1-12");
            }
            println!("{}", days_in_month(year, month));
        }
        Commands::Day { input, day } => {
            let events = read_events(input.as_deref())?;
            for event in events_on_day(&events, day) {
                println!("{}", describe(event));
            }
        }
        Commands::Overlaps {
            input,
            date,
            start,
            end,
            id,
        } => {
            // The library treats a malformed slot as overlapping nothing; on
            // the command line that is a user error worth reporting.
            try_parse_date(&date).context("Invalid --date")?;
            try_parse_time(&start).context("Invalid --start")?;
            try_parse_time(&end).context("Invalid --end")?;

            let events = read_events(input.as_deref())?;
            let candidate = Event::new(id, date, start, end);
            let overlapping = find_overlapping_events(&candidate, &events);
            if overlapping.is_empty() {
                println!("No overlapping events");
            }
            for event in overlapping {
                println!("{}", describe(event));
            }
        }
        Commands::Conflicts { input } => {
            let events = read_events(input.as_deref())?;
            let conflicts = find_conflicts(&events);
            if conflicts.is_empty() {
                println!("No conflicts");
            }
            for conflict in conflicts {
                println!(
                    "{} <-> {}\t{} min",
                    conflict.event_a.id, conflict.event_b.id, conflict.overlap_minutes
                );
            }
        }
    }

    Ok(())
}

/// Parse a `--date` argument, falling back to today's local date.
fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => try_parse_date(s).context("Invalid --date"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn describe(event: &Event) -> String {
    format!(
        "{}\t{} {}-{}\t{}",
        event.id, event.date, event.start_time, event.end_time, event.title
    )
}

/// Load events from a JSON file, or from stdin when no path is given.
fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read events file: {}", path))?,
        None => io::read_to_string(io::stdin()).context("Failed to read events from stdin")?,
    };
    load_events(&json).context("Failed to parse events JSON")
}
