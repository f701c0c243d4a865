//! `fm2pm.yaml` configuration file
//!
//! ```yaml
//! local_repository: ~/.m2/repository
//! repositories:
//!   - ../features/target/repository
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, Result};

/// On-disk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Replaces the default local repository
    #[serde(default)]
    pub local_repository: Option<PathBuf>,

    /// Additional repositories searched after the local repository
    #[serde(default)]
    pub repositories: Vec<PathBuf>,
}

impl ConfigFile {
    /// Load configuration from `path`, resolving relative entries against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            error::config::parse_failed(path.display().to_string(), e.to_string())
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    fn relative_to(self, base: &Path) -> Self {
        let absolutize = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        Self {
            local_repository: self.local_repository.map(absolutize),
            repositories: self.repositories.into_iter().map(absolutize).collect(),
        }
    }
}
