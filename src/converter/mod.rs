//! Feature model to provisioning model conversion
//!
//! A [`Converter`] reads the input feature, asks the supplied
//! [`FeatureResolver`] for every referenced sub-feature and writes the
//! provisioning model. [`FeatureToProvisioning`] is the stock implementation.

pub mod provisioning;

use std::path::Path;

use tracing::debug;

use crate::artifact::ArtifactId;
use crate::error::{self, Result};
use crate::feature::{Feature, FeatureLoader};
use crate::resolver::FeatureResolver;

/// One conversion of an input document into an output document
pub trait Converter {
    /// Convert `input` into `output`, resolving references through `resolver`
    ///
    /// # Errors
    ///
    /// Returns any error raised by the resolver unchanged, and conversion or
    /// I/O errors of its own.
    fn convert(&self, input: &Path, output: &Path, resolver: &dyn FeatureResolver) -> Result<()>;
}

/// Writes the input feature and every referenced feature as provisioning
/// model feature blocks
///
/// References are followed depth-first and resolved once per reference site,
/// so a sub-feature reached on two paths appears twice in the output.
/// Referenced features are written before the feature referencing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureToProvisioning;

impl FeatureToProvisioning {
    fn expand(
        &self,
        feature: Feature,
        resolver: &dyn FeatureResolver,
        stack: &mut Vec<ArtifactId>,
        ordered: &mut Vec<Feature>,
    ) -> Result<()> {
        let references: Vec<ArtifactId> = feature.references().cloned().collect();

        for reference in references {
            if stack.contains(&reference) {
                let chain = stack
                    .iter()
                    .chain(std::iter::once(&reference))
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                return Err(error::feature::circular(chain));
            }

            let sub_feature = resolver.resolve(&reference)?;
            debug!("{} includes {}", feature.id, sub_feature.id);

            stack.push(reference);
            self.expand(sub_feature, resolver, stack, ordered)?;
            stack.pop();
        }

        ordered.push(feature);
        Ok(())
    }
}

impl Converter for FeatureToProvisioning {
    fn convert(&self, input: &Path, output: &Path, resolver: &dyn FeatureResolver) -> Result<()> {
        let feature = FeatureLoader.load(input)?;

        let mut stack = vec![feature.id.clone()];
        let mut ordered = Vec::new();
        self.expand(feature, resolver, &mut stack, &mut ordered)?;

        let source = input
            .file_name()
            .map_or_else(|| input.display().to_string(), |n| n.to_string_lossy().into_owned());
        let text = provisioning::render(&ordered, &source)?;

        std::fs::write(output, text).map_err(|e| {
            error::output::write_failed(output.display().to_string(), e.to_string())
        })
    }
}
