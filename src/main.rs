//! Trains - route, trip and shortest-path queries over a railway graph
//!
//! Reads a one-line graph spec (`Graph: AB5, BC4, ...`) from a file or the
//! command line and answers distance, trip-count and shortest-route
//! questions about it.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use trains_core::error::TrainsError;
use trains_core::format::OutputFormat;
use trains_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&cli, &e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Errors go to stderr, as a JSON envelope when JSON output was requested
fn report_failure(cli: &Cli, error: &TrainsError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {error}"),
        OutputFormat::Human => {}
    }
}
