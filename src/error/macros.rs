//! Constructor generation for error variants
//!
//! Every error domain module exposes small constructor functions so call sites
//! read as `error::artifact::resolution_failed(id, reason)` instead of spelling
//! out the struct variant.

/// Generates `pub fn name(field: impl Into<String>, ...) -> FmError` constructors
///
/// # Example
/// ```rust,ignore
/// impl_error_constructors! {
///     not_found => InputNotFound { path },
/// }
/// ```
macro_rules! impl_error_constructors {
    ($( $name:ident => $variant:ident { $($field:ident),* $(,)? } ),* $(,)?) => {
        $(
            #[doc = concat!("Creates a `", stringify!($variant), "` error")]
            pub fn $name($($field: impl Into<String>),*) -> $crate::error::FmError {
                $crate::error::FmError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}

pub(crate) use impl_error_constructors;
