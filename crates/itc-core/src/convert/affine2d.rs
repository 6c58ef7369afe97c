//! 2D affine parameters to [`AffineTransform2D`].
//!
//! elastix defines the affine model as `T(x) = A (x - c) + t + c`, where the
//! matrix `A` has no restrictions, `c` is the center of rotation and `t` the
//! translation. elastix lengths are always millimeters and so is the output.

use itc_transform::AffineTransform2D;

use crate::params::AffineParameters2D;

/// Convert 2D affine parameters into a transform in millimeters.
///
/// The transform is composed as follows:
///
/// 1. translate by `-c` so that the rotation center lies at the origin
/// 2. apply the linear part `A`
/// 3. translate back by `+c`
/// 4. translate by `t`
///
/// # Arguments
///
/// * `params` - The affine parameters in millimeters.
///
/// # Returns
///
/// The composed affine transform.
pub fn convert(params: &AffineParameters2D) -> AffineTransform2D {
    let center = params.rotation_center();
    let negated_center = center.map(|v| -v);

    let linear = AffineTransform2D::from_linear(params.matrix());
    let translate_back_from_center = AffineTransform2D::from_translation(center);

    let transform = AffineTransform2D::IDENTITY
        .translate(&negated_center)
        .pre_concatenate(&linear)
        .pre_concatenate(&translate_back_from_center)
        .translate(params.translation());

    log::debug!("affine 2d {:?} -> {}", params, transform);

    transform
}
