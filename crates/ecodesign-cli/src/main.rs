//! Eco-design comparator - classic vs. eco-design cost and carbon
//!
//! A CLI tool that compares the classic, mixed and eco-design variants of a
//! construction project on total cost and total carbon.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::filter::LevelFilter;

/// Warnings always reach stderr; `--verbose` adds calculation and file events
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
