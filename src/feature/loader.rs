//! Loading feature documents from local files

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{self, Result};
use crate::path_utils;

use super::Feature;

/// Reads feature documents from disk
///
/// Every call opens its own stream, so loading is re-entrant and repeated
/// loads of one file yield equal documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureLoader;

impl FeatureLoader {
    /// Parse the feature stored at `path`
    ///
    /// The file is decoded as UTF-8 and parsed with its `file:` URI as source
    /// location. The stream is closed before this returns, on success and on
    /// every failure.
    ///
    /// # Errors
    ///
    /// Returns `FeatureParseFailed` if the file cannot be opened or read, or its
    /// content is not a feature document.
    pub fn load(&self, path: &Path) -> Result<Feature> {
        let uri = path_utils::file_uri(path);

        let file = File::open(path)
            .map_err(|e| error::feature::parse_failed(path.display().to_string(), e.to_string()))?;

        Feature::parse(BufReader::new(file), &uri)
    }
}
