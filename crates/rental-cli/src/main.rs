//! Car Rental - booking engine command line
//!
//! Lists cars, checks availability, quotes prices, books and cancels
//! reservations, and reports income over a JSON data file.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
