//! Artifact location
//!
//! Turns an [`ArtifactId`] into the path of its file on the local filesystem.
//! Repositories are directories in Maven layout that the build system has
//! already populated; nothing is downloaded here.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::artifact::ArtifactId;
use crate::config::ConverterConfig;
use crate::error::{self, Result};

/// Resolves coordinates to local files
pub trait ArtifactLocator {
    /// Return the local path of the artifact's content
    ///
    /// # Errors
    ///
    /// Returns `ResolutionFailed` when no configured repository holds the artifact.
    fn locate(&self, id: &ArtifactId) -> Result<PathBuf>;
}

/// Locator searching an ordered chain of Maven layout repositories
#[derive(Debug, Clone)]
pub struct RepositoryLocator {
    repositories: Vec<PathBuf>,
}

impl RepositoryLocator {
    pub fn new(repositories: Vec<PathBuf>) -> Self {
        Self { repositories }
    }

    /// Locator over the configuration's search path
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.search_path())
    }

    pub fn repositories(&self) -> &[PathBuf] {
        &self.repositories
    }

    fn probe(root: &Path, relative: &Path) -> Option<PathBuf> {
        let candidate = root.join(relative);
        trace!("Probing {}", candidate.display());
        candidate.is_file().then_some(candidate)
    }
}

impl ArtifactLocator for RepositoryLocator {
    fn locate(&self, id: &ArtifactId) -> Result<PathBuf> {
        if self.repositories.is_empty() {
            return Err(error::artifact::resolution_failed(
                id.to_string(),
                "no repositories configured",
            ));
        }

        let relative = id.repository_path();
        if let Some(path) = self
            .repositories
            .iter()
            .find_map(|root| Self::probe(root, &relative))
        {
            debug!("Located {} at {}", id, path.display());
            return Ok(path);
        }

        let searched = self
            .repositories
            .iter()
            .map(|root| root.join(&relative).display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Err(error::artifact::resolution_failed(
            id.to_string(),
            format!("artifact not found in any repository (searched: {searched})"),
        ))
    }
}
