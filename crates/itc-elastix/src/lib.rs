#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the elastix module.
pub mod error;

/// Extraction of typed registration parameters from a transform file.
pub mod extract;

/// The generic `(Key value ...)` parameter map.
pub mod parameters;

/// The elastix transform parameter file.
pub mod transform;

pub use error::ElastixError;
pub use extract::ElastixParameters;
pub use parameters::{ParameterMap, ParameterValue};
pub use transform::{ElastixTransform, TransformKind};
