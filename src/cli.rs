use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "petwalk",
    version,
    about = "Is it safe to walk the dog? Weather and air quality check"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Run a single check and print the JSON result
    Check {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Print only the recommendation, without display metrics
        #[arg(long)]
        summary: bool,
    },
    /// List safety rules in priority order
    Rules,
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "petwalk=info,tower_http=info",
            1 => "petwalk=debug,tower_http=debug",
            _ => "petwalk=trace,tower_http=trace",
        }
    }
}
