//! Error types and handling for fm2pm
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Missing input documents
//! - [`output`]: Output directory and output file errors
//! - [`artifact`]: Coordinate parsing and artifact resolution errors
//! - [`feature`]: Feature document parsing and reference graph errors
//! - [`conversion`]: Conversion step failures
//! - [`config`]: Configuration errors

pub mod artifact;
pub mod config;
pub mod conversion;
pub mod feature;
pub mod input;
mod macros;
pub mod output;

pub(crate) use macros::impl_error_constructors;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fm2pm operations
#[derive(Error, Diagnostic, Debug)]
pub enum FmError {
    // Input errors
    #[error("Input file {path} not found")]
    #[diagnostic(
        code(fm2pm::input::not_found),
        help("Check the --input path; it must point to an existing feature JSON file")
    )]
    InputNotFound { path: String },

    // Output errors
    #[error("Failed to prepare output directory '{path}': {reason}")]
    #[diagnostic(
        code(fm2pm::output::dir_failed),
        help("Check permissions and that no regular file is in the way of the directory")
    )]
    OutputDirFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(fm2pm::output::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Artifact errors
    #[error("Failed to get artifact {coordinate}: {reason}")]
    #[diagnostic(
        code(fm2pm::artifact::resolution_failed),
        help("Make sure the artifact is installed in one of the configured repositories")
    )]
    ResolutionFailed { coordinate: String, reason: String },

    #[error("Invalid artifact id '{input}': {reason}")]
    #[diagnostic(
        code(fm2pm::artifact::invalid_id),
        help(
            "Valid formats: groupId:artifactId:version, groupId:artifactId:type[:classifier]:version, mvn:groupId/artifactId/version[/type[/classifier]]"
        )
    )]
    InvalidArtifactId { input: String, reason: String },

    // Feature errors
    #[error("Failed to parse feature '{path}': {reason}")]
    #[diagnostic(code(fm2pm::feature::parse_failed))]
    FeatureParseFailed { path: String, reason: String },

    #[error("Circular feature reference detected: {chain}")]
    #[diagnostic(
        code(fm2pm::feature::circular),
        help("Remove the reference that points back to a feature already being converted")
    )]
    CircularFeatureReference { chain: String },

    // Conversion errors
    #[error("Conversion of '{input}' failed: {reason}")]
    #[diagnostic(code(fm2pm::conversion::failed))]
    ConversionFailed {
        input: String,
        reason: String,
        #[source]
        source: Option<Box<FmError>>,
    },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(fm2pm::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(fm2pm::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(fm2pm::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(fm2pm::fs::io_error))]
    IoError { message: String },
}

impl FmError {
    /// Whether the error already names the coordinate or artifact path that broke
    /// and therefore passes through the conversion step unwrapped.
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            FmError::ResolutionFailed { .. }
                | FmError::FeatureParseFailed { .. }
                | FmError::ConversionFailed { .. }
        )
    }
}

impl From<std::io::Error> for FmError {
    fn from(err: std::io::Error) -> Self {
        FmError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FmError>;
