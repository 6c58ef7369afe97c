use itc_core::CoreError;

use crate::transform::TransformKind;

/// Error types for the elastix module.
#[derive(Debug, thiserror::Error)]
pub enum ElastixError {
    /// Error reading or writing file
    #[error("error reading or writing file")]
    IoError(#[from] std::io::Error),

    /// Error when a line of a parameter file cannot be parsed.
    #[error("Parse error at line {line}: {message}")]
    ParseError {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Error when a required parameter is absent.
    #[error("Missing parameter {0}")]
    MissingParameter(String),

    /// Error when a parameter has a value of the wrong type.
    #[error("Invalid value for parameter {key}: {message}")]
    InvalidValue {
        /// The parameter key.
        key: String,
        /// Description of the problem.
        message: String,
    },

    /// Error when a parameter does not have the expected number of values.
    #[error("Parameter {key} has {actual} values, expected {expected}")]
    DimensionMismatch {
        /// The parameter key.
        key: String,
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        actual: usize,
    },

    /// Error when the `Transform` parameter names an unsupported model.
    #[error("Unsupported transform {0}")]
    UnsupportedTransform(String),

    /// Error when a model is not supported in the given dimension.
    #[error("Unsupported {kind:?} transform in dimension {dimension}")]
    UnsupportedModel {
        /// The transform model.
        kind: TransformKind,
        /// The image dimension.
        dimension: usize,
    },

    /// Error when the transform is not of the requested model.
    #[error("Expected a {expected:?} transform, got {actual:?}")]
    UnexpectedTransform {
        /// The requested model.
        expected: TransformKind,
        /// The model found in the file.
        actual: TransformKind,
    },

    /// Error when the transform is not of the requested dimension.
    #[error("Expected a {expected}D transform, got {actual}D")]
    UnexpectedDimension {
        /// The requested dimension.
        expected: usize,
        /// The dimension found in the file.
        actual: usize,
    },

    /// Error from the core conversion types.
    #[error(transparent)]
    CoreError(#[from] CoreError),
}
