//! Resolution of feature references
//!
//! The converter hands every sub-feature reference it meets to a
//! [`FeatureResolver`]. The [`ResolutionBridge`] implements it by locating the
//! artifact file and loading it as a feature document.

use std::cell::Cell;

use tracing::debug;

use crate::artifact::ArtifactId;
use crate::error::{self, FmError, Result};
use crate::feature::{Feature, FeatureLoader};
use crate::repository::{ArtifactLocator, RepositoryLocator};

/// Supplies the parsed feature for a coordinate
pub trait FeatureResolver {
    /// Resolve `id` into a feature document
    ///
    /// # Errors
    ///
    /// Returns `ResolutionFailed` when the artifact cannot be located and
    /// `FeatureParseFailed` when its content is not a feature.
    fn resolve(&self, id: &ArtifactId) -> Result<Feature>;
}

impl<F> FeatureResolver for F
where
    F: Fn(&ArtifactId) -> Result<Feature>,
{
    fn resolve(&self, id: &ArtifactId) -> Result<Feature> {
        self(id)
    }
}

/// Locator plus loader behind the [`FeatureResolver`] interface
///
/// Calls are synchronous and independent: each one locates the file again and
/// parses it from a fresh stream.
#[derive(Debug)]
pub struct ResolutionBridge<L = RepositoryLocator> {
    locator: L,
    loader: FeatureLoader,
    resolutions: Cell<usize>,
}

impl<L: ArtifactLocator> ResolutionBridge<L> {
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            loader: FeatureLoader,
            resolutions: Cell::new(0),
        }
    }

    /// Number of resolve calls served so far
    pub fn resolutions(&self) -> usize {
        self.resolutions.get()
    }
}

impl<L: ArtifactLocator> FeatureResolver for ResolutionBridge<L> {
    fn resolve(&self, id: &ArtifactId) -> Result<Feature> {
        debug!("Resolving artifact: {}", id);
        self.resolutions.set(self.resolutions.get() + 1);

        let path = self.locator.locate(id).map_err(|e| match e {
            FmError::ResolutionFailed { .. } => e,
            other => error::artifact::resolution_failed(id.to_string(), other.to_string()),
        })?;

        self.loader.load(&path).map_err(|e| match e {
            FmError::FeatureParseFailed { path, reason } => {
                error::feature::parse_failed(path, format!("artifact {id}: {reason}"))
            }
            other => error::artifact::resolution_failed(id.to_string(), other.to_string()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Locator over a fixed coordinate -> path table
    struct TableLocator {
        entries: HashMap<ArtifactId, PathBuf>,
    }

    impl ArtifactLocator for TableLocator {
        fn locate(&self, id: &ArtifactId) -> Result<PathBuf> {
            self.entries
                .get(id)
                .cloned()
                .ok_or_else(|| error::artifact::resolution_failed(id.to_string(), "not in table"))
        }
    }

    /// Locator failing with a non-resolution error
    struct BrokenLocator;

    impl ArtifactLocator for BrokenLocator {
        fn locate(&self, _id: &ArtifactId) -> Result<PathBuf> {
            Err(FmError::IoError {
                message: "disk on fire".to_string(),
            })
        }
    }

    fn base_id() -> ArtifactId {
        ArtifactId::parse("g:base:slingosgifeature:1.0").expect("id")
    }

    fn bridge_with(temp: &TempDir, content: &str) -> ResolutionBridge<TableLocator> {
        let path = temp.path().join("base-1.0.slingosgifeature");
        std::fs::write(&path, content).expect("Failed to write feature");
        let mut entries = HashMap::new();
        entries.insert(base_id(), path);
        ResolutionBridge::new(TableLocator { entries })
    }

    #[test]
    fn test_resolve_loads_located_feature() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bridge = bridge_with(&temp, r#"{ "id": "g:base:1.0", "bundles": ["g:b:1"] }"#);

        let feature = bridge.resolve(&base_id()).expect("feature");
        assert_eq!(feature.id, base_id());
        assert_eq!(bridge.resolutions(), 1);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bridge = bridge_with(&temp, r#"{ "id": "g:base:1.0", "variables": { "a": "b" } }"#);

        let first = bridge.resolve(&base_id()).expect("first");
        let second = bridge.resolve(&base_id()).expect("second");
        assert_eq!(first, second);
        assert_eq!(bridge.resolutions(), 2);
    }

    #[test]
    fn test_unknown_coordinate_is_resolution_error() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bridge = bridge_with(&temp, r#"{ "id": "g:base:1.0" }"#);
        let missing = ArtifactId::parse("g:missing:slingosgifeature:2.0").expect("id");

        let err = bridge.resolve(&missing).unwrap_err();
        match err {
            FmError::ResolutionFailed { coordinate, .. } => {
                assert_eq!(coordinate, "g:missing:slingosgifeature:2.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_content_is_parse_error_naming_both() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bridge = bridge_with(&temp, "this is not json");

        let err = bridge.resolve(&base_id()).unwrap_err();
        assert!(matches!(err, FmError::FeatureParseFailed { .. }));
        let message = err.to_string();
        assert!(message.contains("base-1.0.slingosgifeature"), "{message}");
        assert!(message.contains("g:base:slingosgifeature:1.0"), "{message}");
    }

    #[test]
    fn test_other_locator_failures_name_coordinate() {
        let bridge = ResolutionBridge::new(BrokenLocator);
        let err = bridge.resolve(&base_id()).unwrap_err();
        match err {
            FmError::ResolutionFailed { coordinate, reason } => {
                assert_eq!(coordinate, base_id().to_string());
                assert!(reason.contains("disk on fire"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |id: &ArtifactId| -> Result<Feature> {
            Feature::parse(
                format!(r#"{{ "id": "{id}" }}"#).as_bytes(),
                "memory:feature",
            )
        };
        let feature = resolver.resolve(&base_id()).expect("feature");
        assert_eq!(feature.id, base_id());
    }
}
