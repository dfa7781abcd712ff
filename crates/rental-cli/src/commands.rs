//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    output_availability, output_booking, output_cancellation, output_cars, output_quote,
    output_rate, output_report, output_reservations,
};
use chrono::{NaiveDate, NaiveDateTime};
use rental_app::app::RentalManager;
use rental_app::config::Config;
use rental_app::repository::open_rental_manager;
use rental_types::{BookingError, Error, OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data) = cli.data {
        config.data_path = Some(data.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    if let Commands::Config {
        show,
        set_data_path,
        clear_data_path,
        set_output,
        reset,
    } = &cli.command
    {
        return cmd_config(
            *show,
            set_data_path.clone(),
            *clear_data_path,
            *set_output,
            *reset,
        );
    }

    let manager = open_rental_manager(&config);
    debug!(data_path = %config.data_path().display(), "rental data opened");

    match &cli.command {
        Commands::Cars => output_cars(output_format, &manager.all_cars()),

        Commands::Available { start, end } => {
            let (start, end) = parse_range(start, end)?;
            output_cars(output_format, &manager.available_cars(start, end))
        }

        Commands::Check { plate, start, end } => {
            let (start, end) = parse_range(start, end)?;
            let available = manager.is_available(plate, start, end);
            output_availability(output_format, plate, available)
        }

        Commands::Quote { plate, start, end } => {
            let (start, end) = parse_range(start, end)?;
            output_quote(output_format, plate, manager.quote(plate, start, end))
        }

        Commands::Rate { plate } => output_rate(output_format, plate, manager.daily_rate(plate)),

        Commands::Book {
            customer,
            plate,
            start,
            end,
        } => cmd_book(&manager, output_format, customer, plate, start, end),

        Commands::Cancel { plate } => {
            let removed = manager.cancel_latest(plate);
            output_cancellation(output_format, plate, removed.as_ref())
        }

        Commands::Reservations { customer } => {
            let reservations = match customer {
                Some(name) => manager.reservations_for_customer(name),
                None => manager.reservations(),
            };
            output_reservations(output_format, &reservations)
        }

        Commands::Report => output_report(output_format, &manager.report()),

        Commands::Config { .. } => Ok(()),
    }
}

fn cmd_book(
    manager: &RentalManager,
    output_format: OutputFormat,
    customer: &str,
    plate: &str,
    start: &str,
    end: &str,
) -> Result<()> {
    if customer.trim().is_empty() {
        return Err(BookingError::MissingField("Customer name").into());
    }
    if plate.trim().is_empty() {
        return Err(BookingError::MissingField("Plate").into());
    }

    let (start, end) = parse_range(start, end)?;
    if start >= end {
        return Err(BookingError::InvalidRange.into());
    }

    let reservation = manager.book(customer.trim(), plate.trim(), start, end)?;
    output_booking(output_format, &reservation)
}

fn cmd_config(
    show: bool,
    set_data_path: Option<PathBuf>,
    clear_data_path: bool,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_data_path {
        config.data_path = Some(path);
        modified = true;
    }

    if clear_data_path {
        config.data_path = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn parse_range(start: &str, end: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
    Ok((parse_date_arg(start)?, parse_date_arg(end)?))
}

/// Parse a date or date-time argument
///
/// A bare date means midnight at the start of that day.
fn parse_date_arg(arg: &str) -> Result<NaiveDateTime> {
    let arg = arg.trim();
    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(arg, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidInput(format!("Invalid date format: {}", arg)))
}
