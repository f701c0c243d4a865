//! fm2pm - Feature Model to Provisioning Model converter
//!
//! A build-time command line tool converting one feature model document into a
//! provisioning model file, resolving referenced sub-features from Maven layout
//! repositories on demand.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod artifact;
mod cli;
mod commands;
mod config;
mod converter;
mod error;
mod feature;
mod operations;
mod path_utils;
mod repository;
mod resolver;

use cli::{Cli, Commands};

/// Install the global `tracing` subscriber writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
