//! Convert operation module
//!
//! Drives one [`ConversionJob`] through
//! `NotStarted -> InputValidated -> OutputDirReady -> Converting -> Done | Failed`.
//! Any failure ends the job; nothing is retried and partial output is not
//! cleaned up.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::converter::Converter;
use crate::error::{self, Result};
use crate::path_utils;
use crate::resolver::FeatureResolver;

/// Lifecycle of a conversion job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    NotStarted,
    InputValidated,
    OutputDirReady,
    Converting,
    Done,
    Failed,
}

/// One input document to convert into one output document
#[derive(Debug, Clone)]
pub struct ConversionJob {
    input: PathBuf,
    output: PathBuf,
    state: JobState,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            state: JobState::NotStarted,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    fn transition(&mut self, state: JobState) {
        debug!("Job state {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

/// High-level convert operation
///
/// Owns the converter and the resolver handed to it; both live for the
/// duration of one job.
pub struct ConvertOperation<C, R> {
    converter: C,
    resolver: R,
}

impl<C: Converter, R: FeatureResolver> ConvertOperation<C, R> {
    pub fn new(converter: C, resolver: R) -> Self {
        Self {
            converter,
            resolver,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Execute the job, leaving it in `Done` or `Failed`
    ///
    /// # Errors
    ///
    /// - `InputNotFound` if the input does not exist (checked before anything else)
    /// - `OutputDirFailed` if the output's parent directory cannot be prepared
    /// - `ResolutionFailed` / `FeatureParseFailed` from reference resolution
    /// - `ConversionFailed` for every other failure of the conversion step
    pub fn execute(&self, job: &mut ConversionJob) -> Result<()> {
        let result = self.run_steps(job);
        match result {
            Ok(()) => job.transition(JobState::Done),
            Err(_) => job.transition(JobState::Failed),
        }
        result
    }

    fn run_steps(&self, job: &mut ConversionJob) -> Result<()> {
        validate_input(job.input())?;
        job.transition(JobState::InputValidated);

        prepare_output_dir(job.output())?;
        job.transition(JobState::OutputDirReady);

        job.transition(JobState::Converting);
        info!(
            "Writing provisioning model to: {}",
            path_utils::absolute(job.output()).display()
        );

        self.converter
            .convert(job.input(), job.output(), &self.resolver)
            .map_err(|e| {
                if e.is_reference_error() {
                    e
                } else {
                    error::conversion::wrap(job.input().display().to_string(), e)
                }
            })
    }
}

fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(error::input::not_found(input.display().to_string()));
    }
    info!(
        "Reading feature model from: {}",
        path_utils::absolute(input).display()
    );
    Ok(())
}

/// Create the output's parent directory (and ancestors) when missing
fn prepare_output_dir(output: &Path) -> Result<()> {
    let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if parent.is_dir() {
        return Ok(());
    }

    let dir = path_utils::absolute(parent).display().to_string();
    if parent.exists() {
        return Err(error::output::dir_failed(
            dir,
            "path exists and is not a directory",
        ));
    }

    info!("Creating output directory: {}", dir);
    std::fs::create_dir_all(parent).map_err(|e| error::output::dir_failed(dir, e.to_string()))
}
