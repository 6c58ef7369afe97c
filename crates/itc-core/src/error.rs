/// An error type for the core module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CoreError {
    /// Error when a vector or matrix does not have the expected number of values.
    #[error("{name} has {actual} values, expected {expected}")]
    DimensionMismatch {
        /// Name of the offending quantity.
        name: &'static str,
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        actual: usize,
    },

    /// Error when a voxel spacing is zero, negative or not finite.
    #[error("Voxel spacing along axis {axis} must be strictly positive, got {value}")]
    DegenerateVoxelSpacing {
        /// Axis of the offending spacing.
        axis: usize,
        /// The offending spacing in micrometers.
        value: f64,
    },
}
