use std::path::PathBuf;

use clap::Parser;

use crate::config::CONFIG_ENV;

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Convert using the local repository (~/.m2/repository):\n    \
                   fm2pm convert -i app.json -o target/app.txt\n\n\
                   Search additional repositories, in order:\n    \
                   fm2pm convert -i app.json -o target/app.txt -r repo-a -r repo-b\n\n\
                   Read repositories from a configuration file:\n    \
                   fm2pm convert -i app.json -o target/app.txt --config fm2pm.yaml")]
pub struct ConvertArgs {
    /// Feature model JSON file to convert
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Provisioning model file to write (parent directories are created)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Additional Maven layout repository, searched after the local repository
    #[arg(long = "repository", short = 'r', value_name = "DIR")]
    pub repositories: Vec<PathBuf>,

    /// Local repository (defaults to $FM2PM_LOCAL_REPOSITORY or ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<PathBuf>,

    /// Configuration file with repository settings
    #[arg(long, short = 'c', value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,
}
