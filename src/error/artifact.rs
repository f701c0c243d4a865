//! Artifact coordinate and resolution errors

use super::impl_error_constructors;

impl_error_constructors! {
    resolution_failed => ResolutionFailed { coordinate, reason },
    invalid_id => InvalidArtifactId { input, reason },
}
