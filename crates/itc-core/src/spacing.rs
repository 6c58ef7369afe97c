use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::params::to_array;

/// Number of millimeters in one micrometer.
const MILLIMETERS_PER_MICROMETER: f64 = 0.001;

/// Physical size of a voxel along each axis, in micrometers.
///
/// PRECONDITION: the spacing is strictly positive along every axis. The
/// unchecked constructor [`VoxelSpacing3D::new`] does not verify it and a
/// zero spacing makes the unit conversion produce non-finite values. Use
/// [`VoxelSpacing3D::try_new`] to validate user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoxelSpacing3D([f64; 3]);

impl VoxelSpacing3D {
    /// Create a voxel spacing without validating it.
    pub fn new(micrometers: [f64; 3]) -> Self {
        Self(micrometers)
    }

    /// Create a voxel spacing, rejecting zero, negative and non-finite values.
    ///
    /// # Example
    ///
    /// ```
    /// use itc_core::VoxelSpacing3D;
    ///
    /// assert!(VoxelSpacing3D::try_new([0.5, 0.5, 2.0]).is_ok());
    /// assert!(VoxelSpacing3D::try_new([0.5, 0.0, 2.0]).is_err());
    /// ```
    pub fn try_new(micrometers: [f64; 3]) -> Result<Self, CoreError> {
        for (axis, &value) in micrometers.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::DegenerateVoxelSpacing { axis, value });
            }
        }
        Ok(Self(micrometers))
    }

    /// Create a validated voxel spacing from a slice of 3 values in micrometers.
    pub fn try_from_slice(micrometers: &[f64]) -> Result<Self, CoreError> {
        Self::try_new(to_array("voxel spacing", micrometers)?)
    }

    /// Create a validated voxel spacing from values in millimeters.
    pub fn try_from_millimeters(millimeters: [f64; 3]) -> Result<Self, CoreError> {
        Self::try_new(millimeters.map(|v| v / MILLIMETERS_PER_MICROMETER))
    }

    /// Create the same spacing along every axis.
    pub fn isotropic(micrometers: f64) -> Self {
        Self([micrometers; 3])
    }

    /// The spacing in micrometers.
    pub fn micrometers(&self) -> &[f64; 3] {
        &self.0
    }

    /// Convert a vector from millimeters into voxel units.
    ///
    /// Each component is divided by the spacing of its axis expressed in
    /// millimeters: `voxels[d] = mm[d] / (0.001 * spacing_um[d])`.
    pub fn to_voxels(&self, millimeters: &[f64; 3]) -> [f64; 3] {
        std::array::from_fn(|d| millimeters[d] / (MILLIMETERS_PER_MICROMETER * self.0[d]))
    }
}
