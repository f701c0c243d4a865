//! Input document errors

use super::impl_error_constructors;

impl_error_constructors! {
    not_found => InputNotFound { path },
}
