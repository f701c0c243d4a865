//! Per-job converter configuration
//!
//! A [`ConverterConfig`] is built once per conversion job and handed down to the
//! artifact locator. Sources, lowest precedence first:
//! - the default local repository (`$FM2PM_LOCAL_REPOSITORY` or `~/.m2/repository`)
//! - an optional `fm2pm.yaml` file ([`ConfigFile`])
//! - command line overrides

pub mod file;

pub use file::ConfigFile;

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Environment variable overriding the default local repository
pub const LOCAL_REPOSITORY_ENV: &str = "FM2PM_LOCAL_REPOSITORY";

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "FM2PM_CONFIG";

/// Local repository location relative to the user's home directory
const M2_REPOSITORY: &str = ".m2/repository";

/// Repositories consulted while resolving artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Searched first
    pub local_repository: PathBuf,

    /// Searched in order after the local repository
    pub repositories: Vec<PathBuf>,
}

impl ConverterConfig {
    /// Configuration with only a local repository
    pub fn with_local_repository(local_repository: impl Into<PathBuf>) -> Self {
        Self {
            local_repository: local_repository.into(),
            repositories: Vec::new(),
        }
    }

    /// Append a repository to the search path
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<PathBuf>) -> Self {
        self.repositories.push(repository.into());
        self
    }

    /// Build the configuration from all sources
    ///
    /// # Arguments
    ///
    /// * `config_file` - Optional `fm2pm.yaml` to read
    /// * `local_repository` - Command line override of the local repository
    /// * `repositories` - Command line repositories, searched last
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if no
    /// local repository can be determined.
    pub fn load(
        config_file: Option<&Path>,
        local_repository: Option<PathBuf>,
        repositories: Vec<PathBuf>,
    ) -> Result<Self> {
        let file = match config_file {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let local_repository = match local_repository.or(file.local_repository) {
            Some(path) => path,
            None => default_local_repository()?,
        };

        let config = file
            .repositories
            .into_iter()
            .chain(repositories)
            .fold(Self::with_local_repository(local_repository), |config, repository| {
                config.with_repository(repository)
            });
        Ok(config)
    }

    /// All repositories in search order
    pub fn search_path(&self) -> Vec<PathBuf> {
        std::iter::once(self.local_repository.clone())
            .chain(self.repositories.iter().cloned())
            .collect()
    }
}

/// Get the default local repository path
///
/// Uses `~/.m2/repository`, the location the build system populates. Can be
/// overridden with the `FM2PM_LOCAL_REPOSITORY` environment variable.
pub fn default_local_repository() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(LOCAL_REPOSITORY_ENV) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| error::config::invalid("Could not determine home directory"))?;

    Ok(home.join(M2_REPOSITORY))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_search_path_order() {
        let config = ConverterConfig::with_local_repository("/local")
            .with_repository("/first")
            .with_repository("/second");
        assert_eq!(
            config.search_path(),
            vec![
                PathBuf::from("/local"),
                PathBuf::from("/first"),
                PathBuf::from("/second")
            ]
        );
    }

    #[test]
    fn test_load_cli_override_wins_over_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("fm2pm.yaml");
        std::fs::write(&path, "local_repository: /from/file\nrepositories:\n  - /file/repo\n")
            .expect("Failed to write config");

        let config = ConverterConfig::load(
            Some(&path),
            Some(PathBuf::from("/from/cli")),
            vec![PathBuf::from("/cli/repo")],
        )
        .expect("config should load");

        assert_eq!(config.local_repository, PathBuf::from("/from/cli"));
        assert_eq!(
            config.repositories,
            vec![PathBuf::from("/file/repo"), PathBuf::from("/cli/repo")]
        );
    }

    #[test]
    fn test_load_file_local_repository() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("fm2pm.yaml");
        std::fs::write(&path, "local_repository: /from/file\n").expect("Failed to write config");

        let config = ConverterConfig::load(Some(&path), None, Vec::new()).expect("config");
        assert_eq!(config.local_repository, PathBuf::from("/from/file"));
        assert!(config.repositories.is_empty());
    }

    #[test]
    #[serial]
    fn test_default_local_repository_env_override() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let original = std::env::var(LOCAL_REPOSITORY_ENV).ok();
        unsafe {
            std::env::set_var(LOCAL_REPOSITORY_ENV, temp.path());
        }

        let result = default_local_repository();

        unsafe {
            if let Some(o) = original {
                std::env::set_var(LOCAL_REPOSITORY_ENV, o);
            } else {
                std::env::remove_var(LOCAL_REPOSITORY_ENV);
            }
        }

        assert_eq!(result.expect("path"), temp.path());
    }

    #[test]
    #[serial]
    fn test_default_local_repository_under_home() {
        let original = std::env::var(LOCAL_REPOSITORY_ENV).ok();
        unsafe {
            std::env::remove_var(LOCAL_REPOSITORY_ENV);
        }

        let result = default_local_repository();

        unsafe {
            if let Some(o) = original {
                std::env::set_var(LOCAL_REPOSITORY_ENV, o);
            }
        }

        if let Ok(path) = result {
            assert!(path.ends_with(".m2/repository"));
        }
    }
}
