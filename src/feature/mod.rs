//! Feature documents
//!
//! In-memory form of a feature model JSON document. Only the parts needed to
//! produce a provisioning model are kept; extension sections are ignored.
//!
//! ```json
//! {
//!   "id": "org.example:app:slingosgifeature:1.0.0",
//!   "prototype": { "id": "org.example:base:1.0.0" },
//!   "variables": { "port": "8080" },
//!   "framework-properties": { "org.osgi.service.http.port": "${port}" },
//!   "bundles": [
//!     "org.example:core:1.0.0",
//!     { "id": "org.example:web:1.0.0", "start-order": 20 }
//!   ],
//!   "configurations": {
//!     "org.example.Service": { "enabled": true, "name": "svc" }
//!   }
//! }
//! ```
//!
//! Sub-feature references come from `prototype` and the older `includes`
//! list. Their ids default to the `slingosgifeature` type.

pub mod loader;

pub use loader::FeatureLoader;

use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::artifact::{ArtifactId, FEATURE_TYPE};
use crate::error::{self, FmError, Result};

/// Configuration properties of one PID
pub type Configuration = IndexMap<String, serde_json::Value>;

/// One parsed feature
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: ArtifactId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub license: Option<String>,
    pub variables: IndexMap<String, Option<String>>,
    pub framework_properties: IndexMap<String, String>,
    pub bundles: Vec<Bundle>,
    pub configurations: IndexMap<String, Configuration>,
    pub prototype: Option<ArtifactId>,
    pub includes: Vec<ArtifactId>,
}

/// Bundle entry of a feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub id: ArtifactId,
    pub start_order: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawFeature {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    variables: IndexMap<String, Option<String>>,
    #[serde(default)]
    framework_properties: IndexMap<String, String>,
    #[serde(default)]
    bundles: Vec<RawBundle>,
    #[serde(default)]
    configurations: IndexMap<String, Configuration>,
    #[serde(default)]
    prototype: Option<RawReference>,
    #[serde(default)]
    includes: Vec<RawReference>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBundle {
    Id(String),
    Entry {
        id: String,
        #[serde(rename = "start-order", default)]
        start_order: Option<RawStartOrder>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStartOrder {
    Number(u32),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Id(String),
    Entry { id: String },
}

impl RawReference {
    fn id(&self) -> &str {
        match self {
            RawReference::Id(id) | RawReference::Entry { id } => id,
        }
    }
}

impl Feature {
    /// Parse a feature from a UTF-8 byte stream
    ///
    /// `source_uri` names where the bytes came from and is reported in errors.
    ///
    /// # Errors
    ///
    /// Returns `FeatureParseFailed` if the stream is not UTF-8, not JSON, or
    /// not a feature (missing `id`, malformed artifact ids, bad start orders).
    pub fn parse<R: Read>(reader: R, source_uri: &str) -> Result<Self> {
        let content = std::io::read_to_string(reader)
            .map_err(|e| error::feature::parse_failed(source_uri, e.to_string()))?;

        let raw: RawFeature = serde_json::from_str(&content)
            .map_err(|e| error::feature::parse_failed(source_uri, e.to_string()))?;

        Self::from_raw(raw).map_err(|e| match e {
            FmError::InvalidArtifactId { input, reason } => error::feature::parse_failed(
                source_uri,
                format!("invalid artifact id '{input}': {reason}"),
            ),
            other => other,
        })
    }

    fn from_raw(raw: RawFeature) -> Result<Self> {
        let id = ArtifactId::parse_with_default_type(&raw.id, FEATURE_TYPE)?;

        let bundles = raw
            .bundles
            .into_iter()
            .map(|bundle| Bundle::from_raw(bundle, &id))
            .collect::<Result<Vec<_>>>()?;

        let prototype = raw
            .prototype
            .map(|r| ArtifactId::parse_with_default_type(r.id(), FEATURE_TYPE))
            .transpose()?;

        let includes = raw
            .includes
            .iter()
            .map(|r| ArtifactId::parse_with_default_type(r.id(), FEATURE_TYPE))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id,
            title: raw.title,
            description: raw.description,
            vendor: raw.vendor,
            license: raw.license,
            variables: raw.variables,
            framework_properties: raw.framework_properties,
            bundles,
            configurations: raw.configurations,
            prototype,
            includes,
        })
    }

    /// Sub-feature references in document order: prototype first, then includes
    pub fn references(&self) -> impl Iterator<Item = &ArtifactId> {
        self.prototype.iter().chain(self.includes.iter())
    }
}

impl Bundle {
    fn from_raw(raw: RawBundle, feature: &ArtifactId) -> Result<Self> {
        let (id, start_order) = match raw {
            RawBundle::Id(id) => (id, None),
            RawBundle::Entry { id, start_order } => (id, start_order),
        };

        let start_order = match start_order {
            None => None,
            Some(RawStartOrder::Number(n)) => Some(n),
            Some(RawStartOrder::Text(text)) => Some(text.trim().parse::<u32>().map_err(|_| {
                error::artifact::invalid_id(
                    id.clone(),
                    format!("start-order '{text}' in feature {feature} is not a number"),
                )
            })?),
        };

        Ok(Self {
            id: ArtifactId::parse(&id)?,
            start_order,
        })
    }
}
