//! 3D Euler (rigid) parameters to [`AffineTransform3D`] in voxel units.
//!
//! elastix defines the rigid model as `T(x) = R (x - c) + t + c`, with `R` a
//! proper rotation parameterised by one Euler angle per axis, `c` the center
//! of rotation and `t` the translation. The parameters are in millimeters and
//! radians; the output is rescaled into the voxel grid of the target image.

use itc_transform::{AffineTransform3D, Axis};

use crate::params::EulerParameters3D;
use crate::spacing::VoxelSpacing3D;

/// Convert 3D Euler parameters into a transform in voxel units.
///
/// The rotation center and the translation are converted into voxels with
/// [`VoxelSpacing3D::to_voxels`]. The transform is then composed as follows:
///
/// 1. translate by `-c` so that the rotation center lies at the origin
/// 2. rotate about axis 0, then axis 1, then axis 2
/// 3. translate back by `+c`
/// 4. translate by `t`
///
/// The resulting rotation block is `R = R2 R1 R0`.
///
/// PRECONDITION: the spacing is strictly positive along every axis, otherwise
/// the translation column holds infinite or NaN values.
///
/// # Example
///
/// ```
/// use itc_core::{convert::euler3d, EulerParameters3D, VoxelSpacing3D};
///
/// let params = EulerParameters3D::new([0.0; 3], [5.0, 5.0, 5.0], [1.0, 0.0, 0.0]);
/// let spacing = VoxelSpacing3D::isotropic(500.0);
/// let transform = euler3d::convert(&params, &spacing);
///
/// // 1 mm is 2 voxels of 0.5 mm
/// assert_eq!(transform.get(0, 3), 2.0);
/// ```
pub fn convert(params: &EulerParameters3D, spacing: &VoxelSpacing3D) -> AffineTransform3D {
    let center = spacing.to_voxels(params.rotation_center());
    let translation = spacing.to_voxels(params.translation());

    let centered = AffineTransform3D::IDENTITY.translate(&center.map(|v| -v));

    let rotated = Axis::ALL
        .iter()
        .zip(params.angles())
        .fold(centered, |transform, (axis, angle)| {
            transform.rotate(*axis, *angle)
        });

    let transform = rotated
        .pre_concatenate(&AffineTransform3D::from_translation(&center))
        .translate(&translation);

    log::debug!(
        "euler 3d {:?} with spacing {:?} um -> {}",
        params,
        spacing.micrometers(),
        transform
    );

    transform
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_rows_eq(actual: [[f64; 4]; 3], expected: [[f64; 4]; 3]) {
        for i in 0..3 {
            for j in 0..4 {
                assert_relative_eq!(actual[i][j], expected[i][j], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_identity_for_any_center() {
        let spacing = VoxelSpacing3D::new([250.0, 500.0, 1000.0]);
        for center in [[0.0; 3], [10.0, -3.0, 7.5]] {
            let params = EulerParameters3D::new([0.0; 3], center, [0.0; 3]);
            assert_rows_eq(
                convert(&params, &spacing).to_row_major(),
                [
                    [1.0, 0.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0, 0.0],
                    [0.0, 0.0, 1.0, 0.0],
                ],
            );
        }
    }

    #[test]
    fn test_rotation_about_z_around_center() {
        // 1 mm voxels so that voxel and millimeter coordinates coincide
        let params = EulerParameters3D::new([0.0, 0.0, FRAC_PI_2], [1.0, 0.0, 0.0], [0.0; 3]);
        let transform = convert(&params, &VoxelSpacing3D::isotropic(1000.0));
        assert_rows_eq(
            transform.to_row_major(),
            [
                [0.0, -1.0, 0.0, 1.0],
                [1.0, 0.0, 0.0, -1.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        );
    }

    #[test]
    fn test_rotation_order_is_axis_0_then_1() {
        let params = EulerParameters3D::new([FRAC_PI_2, FRAC_PI_2, 0.0], [0.0; 3], [0.0; 3]);
        let transform = convert(&params, &VoxelSpacing3D::isotropic(1000.0));
        // R = Ry(90) Rx(90)
        assert_rows_eq(
            transform.to_row_major(),
            [
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [-1.0, 0.0, 0.0, 0.0],
            ],
        );
    }

    #[test]
    fn test_center_maps_to_center_plus_translation_in_voxels() {
        let params = EulerParameters3D::new([0.3, -1.2, 2.0], [4.0, 6.0, 1.0], [1.0, 2.0, -0.5]);
        let spacing = VoxelSpacing3D::new([500.0, 2000.0, 250.0]);
        let transform = convert(&params, &spacing);

        // center (8, 3, 4) and translation (2, 1, -2) in voxels
        let p = transform.apply(&[8.0, 3.0, 4.0]);
        assert_relative_eq!(p[0], 10.0, epsilon = 1e-9);
        assert_relative_eq!(p[1], 4.0, epsilon = 1e-9);
        assert_relative_eq!(p[2], 2.0, epsilon = 1e-9);
    }
}
