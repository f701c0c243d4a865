//! Operations module
//!
//! High-level operations that coordinate the lower layers:
//! - `ConvertOperation`: input validation, output preparation and one
//!   conversion pass, using the converter (from converter module) and a
//!   feature resolver (from resolver module)

pub mod convert;

pub use convert::{ConversionJob, ConvertOperation};
