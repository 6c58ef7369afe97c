//! 3D affine parameters to [`AffineTransform3D`].

use itc_transform::AffineTransform3D;

use crate::params::AffineParameters3D;
use crate::spacing::VoxelSpacing3D;

fn compose(
    linear: &[[f64; 3]; 3],
    center: &[f64; 3],
    translation: &[f64; 3],
) -> AffineTransform3D {
    AffineTransform3D::IDENTITY
        .translate(&center.map(|v| -v))
        .pre_concatenate(&AffineTransform3D::from_linear(linear))
        .pre_concatenate(&AffineTransform3D::from_translation(center))
        .translate(translation)
}

/// Convert 3D affine parameters into a transform in millimeters.
///
/// The composition is the same as for the 2D case:
/// `T(x) = A (x - c) + t + c`.
pub fn convert(params: &AffineParameters3D) -> AffineTransform3D {
    let transform = compose(
        params.matrix(),
        params.rotation_center(),
        params.translation(),
    );
    log::debug!("affine 3d {:?} -> {}", params, transform);
    transform
}

/// Convert 3D affine parameters into a transform in voxel units.
///
/// The rotation center and the translation are rescaled into voxels with
/// [`VoxelSpacing3D::to_voxels`]; the linear coefficients are kept as given.
///
/// PRECONDITION: the spacing is strictly positive along every axis.
pub fn convert_to_voxels(params: &AffineParameters3D, spacing: &VoxelSpacing3D) -> AffineTransform3D {
    let center = spacing.to_voxels(params.rotation_center());
    let translation = spacing.to_voxels(params.translation());
    let transform = compose(params.matrix(), &center, &translation);
    log::debug!(
        "affine 3d {:?} with spacing {:?} um -> {}",
        params,
        spacing.micrometers(),
        transform
    );
    transform
}
