use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::fmt;

use cfgtree::cli::commands::execute_command;
use cfgtree::cli::{output, Cli};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match execute_command(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            output::error(&e);
            process::exit(e.exit_code());
        }
    }
}

/// Map the `-v` count to a level; warnings only by default.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn setup_logging(verbosity: u8) {
    if verbosity > 3 {
        eprintln!("Don't be crazy, max is -vvv");
    }
    let filter = level_for(verbosity);

    // stdout carries values and exports, logs go to stderr
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(filter),
        )
        .init();

    tracing::debug!(level = %filter, "logging initialized");
}
