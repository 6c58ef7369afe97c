//! # Parameter conversion
//!
//! Each converter composes an affine transform from a registration parameter
//! set following the model `T(x) = A (x - c) + t + c`:
//!
//! - [`affine2d`] — 2D affine parameters, millimeters in and out
//! - [`affine3d`] — 3D affine parameters, in millimeters or voxels
//! - [`euler3d`] — 3D rigid (Euler angle) parameters, rescaled into voxels
//!
//! The converters are pure functions: they never fail and never validate
//! their input.

pub mod affine2d;
pub mod affine3d;
pub mod euler3d;

use itc_transform::{AffineTransform2D, AffineTransform3D};

use crate::params::{AffineParameters2D, AffineParameters3D, EulerParameters3D};
use crate::spacing::VoxelSpacing3D;

/// Convert 2D affine parameters in millimeters into a 2D affine transform in millimeters.
///
/// # Example
///
/// ```
/// use itc_core::convert_affine_2d;
///
/// let t = convert_affine_2d(&[[2.0, 0.0], [0.0, 1.0]], &[1.0, 1.0], &[0.0, 0.0]);
/// assert_eq!(t.apply(&[2.0, 1.0]), [3.0, 1.0]);
/// ```
pub fn convert_affine_2d(
    matrix: &[[f64; 2]; 2],
    rotation_center_mm: &[f64; 2],
    translation_mm: &[f64; 2],
) -> AffineTransform2D {
    affine2d::convert(&AffineParameters2D::new(
        *matrix,
        *rotation_center_mm,
        *translation_mm,
    ))
}

/// Convert 3D affine parameters in millimeters into a 3D affine transform in millimeters.
pub fn convert_affine_3d(
    matrix: &[[f64; 3]; 3],
    rotation_center_mm: &[f64; 3],
    translation_mm: &[f64; 3],
) -> AffineTransform3D {
    affine3d::convert(&AffineParameters3D::new(
        *matrix,
        *rotation_center_mm,
        *translation_mm,
    ))
}

/// Convert 3D Euler parameters in millimeters into a 3D affine transform in voxel units.
///
/// PRECONDITION: `voxel_spacing_um` is strictly positive along every axis.
pub fn convert_euler_3d(
    angles_rad: &[f64; 3],
    rotation_center_mm: &[f64; 3],
    translation_mm: &[f64; 3],
    voxel_spacing_um: &[f64; 3],
) -> AffineTransform3D {
    euler3d::convert(
        &EulerParameters3D::new(*angles_rad, *rotation_center_mm, *translation_mm),
        &VoxelSpacing3D::new(*voxel_spacing_um),
    )
}
