//! `overlap` CLI — drive the availability overlap calculator from the command line.
//!
//! This binary stands in for the HTTP layer: it reads the same JSON request
//! body the service endpoint accepts and emits the same JSON response.
//!
//! ## Usage
//!
//! ```sh
//! # Calculate overlap (stdin → stdout)
//! echo '[{"timezone":"UTC","start_local":"2026-03-16T09:00:00","end_local":"2026-03-16T11:00:00"},
//!        {"timezone":"UTC","start_local":"2026-03-16T10:00:00","end_local":"2026-03-16T12:00:00"}]' \
//!   | overlap calc
//!
//! # Calculate from file to file, pretty-printed
//! overlap calc -i request.json -o response.json --pretty
//!
//! # Evaluate the CORS allow-list check
//! overlap check-origin http://localhost:3000
//! overlap check-origin https://app.example.com --allow https://app.example.com
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use overlap_core::{calculate_overlap, AvailabilityEntry, IanaResolver, ServiceConfig};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Timezone-aware availability overlap calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the common overlap of availability entries
    Calc {
        /// Input file with the JSON entry list (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the JSON report (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
    /// Check an origin against the CORS allow-list
    CheckOrigin {
        /// The origin to check (e.g., "http://localhost:3000")
        origin: String,
        /// Allowed origin (repeatable); defaults to the service default list
        #[arg(long = "allow")]
        allow: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            input,
            output,
            pretty,
        } => {
            let body = read_input(input.as_deref())?;
            let entries: Vec<AvailabilityEntry> =
                serde_json::from_str(&body).context("Failed to parse availability entries")?;

            let report = match calculate_overlap(&entries, &IanaResolver) {
                Ok(report) => report,
                Err(err) => {
                    // Core errors carry the client-facing message; exit the way
                    // the HTTP layer would respond with a 400.
                    eprintln!("error: {err}");
                    process::exit(1);
                }
            };

            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::CheckOrigin { origin, allow } => {
            let config = if allow.is_empty() {
                ServiceConfig::default()
            } else {
                ServiceConfig::new(allow)
            };

            if config.is_origin_allowed(&origin) {
                println!("allowed");
            } else {
                println!("denied");
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Read from a file when a path is given, otherwise from stdin.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("Failed to read input file: {p}"))
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

/// Write to a file when a path is given, otherwise to stdout.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, content)
            .with_context(|| format!("Failed to write output file: {p}")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
