//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - convert: Convert command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod convert;

pub use completions::CompletionsArgs;
pub use convert::ConvertArgs;

/// fm2pm - Feature Model to Provisioning Model converter
///
/// Converts a feature model JSON document into a provisioning model file.
#[derive(Parser, Debug)]
#[command(
    name = "fm2pm",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convert feature model documents into provisioning model files",
    long_about = "fm2pm reads a feature model (JSON), resolves every referenced sub-feature \
                  from Maven layout repositories and writes the equivalent provisioning model.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fm2pm convert -i src/main/features/app.json -o target/provisioning/app.txt\n   \
                  fm2pm convert -i app.json -o out/app.txt -r ../features/target/repository\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a feature model into a provisioning model
    Convert(ConvertArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
