//! Conversion step errors

use super::FmError;

/// Creates a conversion failure without an underlying cause
pub fn failed(input: impl Into<String>, reason: impl Into<String>) -> FmError {
    FmError::ConversionFailed {
        input: input.into(),
        reason: reason.into(),
        source: None,
    }
}

/// Wraps an error raised while converting `input`, keeping it as the source
pub fn wrap(input: impl Into<String>, cause: FmError) -> FmError {
    FmError::ConversionFailed {
        input: input.into(),
        reason: cause.to_string(),
        source: Some(Box::new(cause)),
    }
}
