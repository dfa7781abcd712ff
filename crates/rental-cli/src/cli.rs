//! CLI definition using clap

use clap::{Parser, Subcommand};
use rental_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "car-rental")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Car rental booking: availability, pricing, reservations and reports")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data file path. Uses config value or the default candidates if not specified.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all active cars
    Cars,

    /// List cars available for a date range
    Available {
        /// Start date (e.g., "2025-06-01" or "2025-06-01T10:00")
        start: String,

        /// End date (exclusive)
        end: String,
    },

    /// Check whether one car is available for a date range
    Check {
        /// License plate
        plate: String,

        start: String,

        end: String,
    },

    /// Quote the price of renting a car for a date range
    Quote {
        /// License plate
        plate: String,

        start: String,

        end: String,
    },

    /// Show the daily rate of a car
    Rate {
        /// License plate
        plate: String,
    },

    /// Book a car
    Book {
        /// Customer name
        #[arg(long, short = 'c')]
        customer: String,

        /// License plate
        plate: String,

        start: String,

        end: String,
    },

    /// Cancel the most recent reservation of a car
    Cancel {
        /// License plate
        plate: String,
    },

    /// List reservations
    Reservations {
        /// Only reservations for this customer (case-insensitive)
        #[arg(long, short = 'c')]
        customer: Option<String>,
    },

    /// Show total income, most rented car and booking count
    Report,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data file path
        #[arg(long)]
        set_data_path: Option<PathBuf>,

        /// Forget the data file path and use the default candidates
        #[arg(long)]
        clear_data_path: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
