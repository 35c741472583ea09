//! `slots` CLI — find open meeting times in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find open slots for the request embedded in the file (stdin → stdout)
//! slots query < day.json
//!
//! # Same, from a file, overriding the attendees and duration
//! slots query -i day.json --required alice,bob --optional carol --duration 45
//!
//! # Only the earliest open slot
//! slots query -i day.json --first
//!
//! # The merged busy view for two attendees
//! slots busy -i day.json --attendees alice,bob
//! ```
//!
//! Input is JSON: an `events` array of `{name, start, end, attendees}` with
//! minutes-of-day bounds, and an optional embedded `request` of
//! `{required, optional, duration_minutes}`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use slot_engine::{
    find_open_slots, merge_busy, Event, MeetingRequest, TimeRange,
};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Meeting-availability search over a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every open range that fits the meeting request
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated required attendees (overrides the file's request)
        #[arg(long)]
        required: Option<String>,
        /// Comma-separated optional attendees (overrides the file's request)
        #[arg(long)]
        optional: Option<String>,
        /// Minimum duration in minutes (overrides the file's request)
        #[arg(long)]
        duration: Option<u32>,
        /// Print only the earliest open slot
        #[arg(long)]
        first: bool,
    },
    /// Show the merged busy blocks for a set of attendees
    Busy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated attendees (defaults to everyone in the file)
        #[arg(long)]
        attendees: Option<String>,
    },
}

/// Top-level input document.
#[derive(Deserialize)]
struct DayFile {
    #[serde(default)]
    events: Vec<EventSpec>,
    request: Option<RequestSpec>,
}

/// One event row: flat minute bounds, validated before use.
#[derive(Deserialize)]
struct EventSpec {
    #[serde(default)]
    name: String,
    start: u32,
    end: u32,
    #[serde(default)]
    attendees: Vec<String>,
}

#[derive(Deserialize, Default)]
struct RequestSpec {
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    optional: Vec<String>,
    #[serde(default)]
    duration_minutes: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            input,
            output,
            required,
            optional,
            duration,
            first,
        } => {
            let day = read_day(input.as_deref())?;
            let events = build_events(&day)?;

            let base = day.request.unwrap_or_default();
            let request = MeetingRequest::new(
                required.as_deref().map(parse_list).unwrap_or(base.required),
                optional.as_deref().map(parse_list).unwrap_or(base.optional),
                duration.unwrap_or(base.duration_minutes),
            );

            let open = find_open_slots(&events, &request);
            let rendered = if first {
                serde_json::to_string_pretty(&open.first())?
            } else {
                serde_json::to_string_pretty(&open)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
        } => {
            let day = read_day(input.as_deref())?;
            let events = build_events(&day)?;

            let attendees: std::collections::HashSet<String> = match attendees.as_deref() {
                Some(raw) => parse_list(raw).into_iter().collect(),
                None => events
                    .iter()
                    .flat_map(|e| e.attendees.iter().cloned())
                    .collect(),
            };

            let busy = merge_busy(
                events
                    .iter()
                    .filter(|e| e.involves_any(&attendees))
                    .map(|e| e.when)
                    .collect(),
            );
            write_output(output.as_deref(), &serde_json::to_string_pretty(&busy)?)?;
        }
    }

    Ok(())
}

/// Read and parse the input document from a file or stdin.
fn read_day(path: Option<&str>) -> Result<DayFile> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse input JSON")
}

/// Validate every event row and build the domain events.
fn build_events(day: &DayFile) -> Result<Vec<Event>> {
    day.events
        .iter()
        .map(|spec| {
            let when = TimeRange::checked(spec.start, spec.end)
                .with_context(|| format!("Event '{}' has a malformed time range", spec.name))?;
            Ok(Event::new(
                spec.name.clone(),
                when,
                spec.attendees.iter().cloned(),
            ))
        })
        .collect()
}

/// Split a comma-separated flag value, trimming and dropping empty parts.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
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
