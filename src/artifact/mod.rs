//! Artifact coordinates
//!
//! An [`ArtifactId`] identifies one retrievable build artifact by
//! `(group, artifact, version, type, classifier)`. Coordinates are created from
//! the ids found in feature documents and are never mutated afterwards.
//!
//! Accepted textual forms:
//! - `groupId:artifactId:version`
//! - `groupId:artifactId:type:version`
//! - `groupId:artifactId:type:classifier:version`
//! - `mvn:groupId/artifactId/version[/type[/classifier]]`

use std::fmt;
use std::path::PathBuf;

use crate::error::{self, Result};

/// Type assumed when an id does not name one
pub const DEFAULT_TYPE: &str = "jar";

/// Type of feature artifacts in a repository
pub const FEATURE_TYPE: &str = "slingosgifeature";

const MVN_PREFIX: &str = "mvn:";

/// Test jars are stored with this classifier unless one is given
const TEST_JAR_TYPE: &str = "test-jar";
const TEST_JAR_CLASSIFIER: &str = "tests";

/// Packaging types whose files are stored with the `jar` extension
const JAR_TYPES: &[&str] = &[
    "jar",
    "bundle",
    "maven-plugin",
    "ejb",
    "test-jar",
    "java-source",
    "javadoc",
];

/// Identity of a build artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId {
    group_id: String,
    artifact_id: String,
    version: String,
    artifact_type: String,
    classifier: Option<String>,
}

impl ArtifactId {
    /// Create a new coordinate; an empty classifier counts as no classifier
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        artifact_type: impl Into<String>,
        classifier: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: artifact_type.into(),
            classifier: classifier.filter(|c| !c.is_empty()),
        }
    }

    /// Parse a coordinate, defaulting the type to `jar`
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_default_type(input, DEFAULT_TYPE)
    }

    /// Parse a coordinate, using `default_type` when the id omits the type
    pub fn parse_with_default_type(input: &str, default_type: &str) -> Result<Self> {
        let input = input.trim();

        let (segments, mvn_url) = match input.strip_prefix(MVN_PREFIX) {
            Some(rest) => (rest.split('/').collect::<Vec<_>>(), true),
            None => (input.split(':').collect::<Vec<_>>(), false),
        };

        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(error::artifact::invalid_id(input, "empty segment"));
        }
        if let Some(segment) = segments.iter().find(|s| !is_path_safe(s.trim())) {
            return Err(error::artifact::invalid_id(
                input,
                format!("segment '{}' cannot be used in a repository path", segment.trim()),
            ));
        }

        let (group, name, version, artifact_type, classifier) = if mvn_url {
            match segments.as_slice() {
                [g, a, v] => (*g, *a, *v, default_type, None),
                [g, a, v, t] => (*g, *a, *v, *t, None),
                [g, a, v, t, c] => (*g, *a, *v, *t, Some(*c)),
                _ => {
                    return Err(error::artifact::invalid_id(
                        input,
                        "expected 3 to 5 '/' separated segments",
                    ));
                }
            }
        } else {
            match segments.as_slice() {
                [g, a, v] => (*g, *a, *v, default_type, None),
                [g, a, t, v] => (*g, *a, *v, *t, None),
                [g, a, t, c, v] => (*g, *a, *v, *t, Some(*c)),
                _ => {
                    return Err(error::artifact::invalid_id(
                        input,
                        "expected 3 to 5 ':' separated segments",
                    ));
                }
            }
        };

        Ok(Self::new(
            group.trim(),
            name.trim(),
            version.trim(),
            artifact_type.trim(),
            classifier.map(|c| c.trim().to_string()),
        ))
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// File extension of the artifact in a repository
    pub fn extension(&self) -> &str {
        if JAR_TYPES.contains(&self.artifact_type.as_str()) {
            "jar"
        } else {
            &self.artifact_type
        }
    }

    /// Provisioning notation: `g/a/v[/type[/classifier]]`
    pub fn to_mvn_path(&self) -> String {
        let mut path = format!("{}/{}/{}", self.group_id, self.artifact_id, self.version);
        match &self.classifier {
            Some(classifier) => {
                path.push('/');
                path.push_str(&self.artifact_type);
                path.push('/');
                path.push_str(classifier);
            }
            None if self.artifact_type != DEFAULT_TYPE => {
                path.push('/');
                path.push_str(&self.artifact_type);
            }
            None => {}
        }
        path
    }

    /// Classifier in the file name; `test-jar` implies `tests`
    fn file_classifier(&self) -> Option<&str> {
        self.classifier.as_deref().or_else(|| {
            (self.artifact_type == TEST_JAR_TYPE).then_some(TEST_JAR_CLASSIFIER)
        })
    }

    /// Relative path of the artifact file in a Maven layout repository
    ///
    /// e.g. `org.apache.sling:base:slingosgifeature:1.0` ->
    /// `org/apache/sling/base/1.0/base-1.0.slingosgifeature`
    pub fn repository_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group_id.split('.').collect();
        path.push(&self.artifact_id);
        path.push(&self.version);

        let file_name = match self.file_classifier() {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact_id,
                self.version,
                classifier,
                self.extension()
            ),
            None => format!(
                "{}-{}.{}",
                self.artifact_id,
                self.version,
                self.extension()
            ),
        };
        path.push(file_name);
        path
    }
}

/// A segment must map to exactly one file name component
fn is_path_safe(segment: &str) -> bool {
    segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
        && !segment.chars().any(char::is_control)
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        match &self.classifier {
            Some(classifier) => write!(f, ":{}:{}", self.artifact_type, classifier)?,
            None if self.artifact_type != DEFAULT_TYPE => write!(f, ":{}", self.artifact_type)?,
            None => {}
        }
        write!(f, ":{}", self.version)
    }
}
