//! Command implementations for fm2pm CLI

pub mod completions;
pub mod convert;
pub mod version;
