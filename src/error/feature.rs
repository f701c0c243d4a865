//! Feature document errors

use super::impl_error_constructors;

impl_error_constructors! {
    parse_failed => FeatureParseFailed { path, reason },
    circular => CircularFeatureReference { chain },
}
