//! `meeting` CLI: find free meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for the request in a schedule file
//! meeting find -i day.json
//!
//! # Same, as JSON (reads stdin when -i is omitted)
//! cat day.json | meeting find --format json
//!
//! # Show merged busy blocks for some attendees
//! meeting busy -i day.json --attendees alice,bob
//!
//! # Trace the tier decision
//! RUST_LOG=meeting_engine=debug meeting find -i day.json
//! ```
//!
//! A schedule file looks like:
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "attendees": ["alice"], "start": "09:00", "end": "09:30" }
//!   ],
//!   "request": { "mandatory": ["alice"], "optional": ["bob"], "duration": 30 }
//! }
//! ```

mod schedule;

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_engine::{build_busy_intervals, merge_overlapping, query_detailed, EventSource, Tier};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::schedule::{CalendarDay, SlotDto};

#[derive(Parser)]
#[command(
    name = "meeting",
    version,
    about = "Find free meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "meeting_engine=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find slots that fit the schedule's request
    Find {
        /// Schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show merged busy blocks for the given attendees
    Busy {
        /// Schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Comma-separated attendee ids
        #[arg(long, value_delimiter = ',', required = true)]
        attendees: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct FindOutput {
    tier: Tier,
    slots: Vec<SlotDto>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Find { input, format } => {
            let day = CalendarDay::parse(&read_input(input.as_deref())?)?;
            let request = day.require_request()?;
            info!(events = day.events().len(), duration = request.duration(), "running query");

            let schedule = query_detailed(day.events(), request);
            let output = FindOutput {
                tier: schedule.tier,
                slots: schedule.slots.iter().map(SlotDto::from).collect(),
            };

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                Format::Text => {
                    println!("tier: {}", tier_label(output.tier));
                    for slot in &output.slots {
                        println!("{}", slot.to_line());
                    }
                }
            }
        }
        Commands::Busy {
            input,
            attendees,
            format,
        } => {
            let day = CalendarDay::parse(&read_input(input.as_deref())?)?;
            let ids: BTreeSet<String> = attendees
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();

            let busy = merge_overlapping(&build_busy_intervals(day.events(), &ids));
            let blocks: Vec<SlotDto> = busy.iter().map(SlotDto::from).collect();

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&blocks)?),
                Format::Text => {
                    for block in &blocks {
                        println!("{}", block.to_line());
                    }
                }
            }
        }
    }

    Ok(())
}

/// Send logs to stderr so stdout stays parseable. `RUST_LOG` wins over `--log-level`.
fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("Invalid --log-level '{}'", default_filter))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Everyone => "everyone",
        Tier::MandatoryOnly => "mandatory-only",
        Tier::NoFit => "no-fit",
    }
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
