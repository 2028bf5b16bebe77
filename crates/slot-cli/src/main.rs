//! `slots` CLI: compute a staff member's bookable slots for a day, or check a
//! booking against existing reservations, from JSON on the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for one day (stdin → stdout)
//! cat day.json | slots day
//!
//! # Branch timezone and a 10-minute warning buffer, from file to file
//! slots day -i day.json -o slots.json --timezone Europe/Istanbul --buffer 10
//!
//! # Mark which slots a customer can pick right now
//! slots day -i day.json --now 2026-03-16T08:00:00Z
//!
//! # Check a booking before inserting it
//! slots check -i booking.json
//! ```
//!
//! `SLOTS_TIMEZONE` and `SLOTS_BUFFER_MINUTES` set defaults for the flags.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use slot_engine::{
    ensure_bookable, BookingHorizon, DayRequest, Reservation, Selectability, SlotConfig,
    SlotGenerator, TimeSlot,
};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Salon appointment slot calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the slots of one day for one staff member
    Day {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// JSON configuration file (buffer_minutes, timezone, dst_policy, horizon_days)
        #[arg(short, long)]
        config: Option<String>,
        /// Warning buffer in minutes before another booking
        #[arg(long, env = "SLOTS_BUFFER_MINUTES")]
        buffer: Option<u32>,
        /// IANA timezone the working hours are expressed in
        #[arg(long, env = "SLOTS_TIMEZONE")]
        timezone: Option<String>,
        /// Current time (RFC 3339); annotates each slot with its selectability
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Check that a reservation does not overlap existing ones
    Check {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Input of `slots check`.
#[derive(Deserialize)]
struct CheckRequest {
    reservation: Reservation,
    #[serde(default)]
    existing: Vec<Reservation>,
}

#[derive(Serialize)]
struct SlotOutput {
    #[serde(flatten)]
    slot: TimeSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    selectability: Option<Selectability>,
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
        Commands::Day {
            input,
            output,
            config,
            buffer,
            timezone,
            now,
        } => {
            let config = load_config(config.as_deref(), buffer, timezone)?;
            let raw = read_input(input.as_deref())?;
            let request: DayRequest =
                serde_json::from_str(&raw).context("Failed to parse day request JSON")?;

            let slots = day_slots(&request, &config, now)?;
            info!(day = %request.day, slots = slots.len(), "generated slots");

            let json = serde_json::to_string_pretty(&slots)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input } => {
            let raw = read_input(input.as_deref())?;
            let request: CheckRequest =
                serde_json::from_str(&raw).context("Failed to parse check request JSON")?;

            ensure_bookable(&request.reservation, &request.existing).with_context(|| {
                format!("Reservation {} cannot be booked", request.reservation.id)
            })?;
            println!("ok");
        }
    }

    Ok(())
}

/// Layer the configuration: file (or defaults), then flags / environment.
fn load_config(path: Option<&str>, buffer: Option<u32>, timezone: Option<String>) -> Result<SlotConfig> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            SlotConfig::from_json(&json)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => SlotConfig::default(),
    };

    if let Some(buffer) = buffer {
        config.buffer_minutes = buffer;
    }
    if let Some(timezone) = timezone {
        config.timezone = timezone;
    }
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn day_slots(request: &DayRequest, config: &SlotConfig, now: Option<DateTime<Utc>>) -> Result<Vec<SlotOutput>> {
    let generator = SlotGenerator::new(config).context("Invalid slot configuration")?;
    let horizon = now.map(|now| BookingHorizon::from_config(now, config));

    Ok(request
        .slots(&generator)
        .into_iter()
        .map(|slot| SlotOutput {
            slot,
            selectability: horizon.map(|h| h.classify(&slot)),
        })
        .collect())
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
