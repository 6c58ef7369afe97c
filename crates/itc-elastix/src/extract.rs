use itc_core::{AffineParameters2D, AffineParameters3D, EulerParameters3D};

use crate::error::ElastixError;
use crate::transform::{ElastixTransform, TransformKind};

/// The registration parameters held by a supported transform file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElastixParameters {
    /// A 2D affine transform.
    Affine2D(AffineParameters2D),
    /// A 3D affine transform.
    Affine3D(AffineParameters3D),
    /// A 3D Euler transform.
    Euler3D(EulerParameters3D),
}

impl ElastixTransform {
    /// Check the model and dimension and return the parameter vector.
    fn expect_model(
        &self,
        kind: TransformKind,
        dimension: usize,
        num_parameters: usize,
    ) -> Result<Vec<f64>, ElastixError> {
        let actual_kind = self.transform_kind()?;
        if actual_kind != kind {
            return Err(ElastixError::UnexpectedTransform {
                expected: kind,
                actual: actual_kind,
            });
        }

        let actual_dimension = self.dimension()?;
        if actual_dimension != dimension {
            return Err(ElastixError::UnexpectedDimension {
                expected: dimension,
                actual: actual_dimension,
            });
        }

        let parameters = self.transform_parameters()?;
        if parameters.len() != num_parameters {
            return Err(ElastixError::DimensionMismatch {
                key: Self::TRANSFORM_PARAMETERS.to_string(),
                expected: num_parameters,
                actual: parameters.len(),
            });
        }

        Ok(parameters)
    }
}

/// Layout: `a11 a12 a21 a22 tx ty`.
impl TryFrom<&ElastixTransform> for AffineParameters2D {
    type Error = ElastixError;

    fn try_from(transform: &ElastixTransform) -> Result<Self, Self::Error> {
        let p = transform.expect_model(TransformKind::Affine, 2, 6)?;
        let center = transform.center_of_rotation()?;
        Ok(AffineParameters2D::from_slices(&p[..4], &center, &p[4..])?)
    }
}

/// Layout: `a11 a12 a13 a21 a22 a23 a31 a32 a33 tx ty tz`.
impl TryFrom<&ElastixTransform> for AffineParameters3D {
    type Error = ElastixError;

    fn try_from(transform: &ElastixTransform) -> Result<Self, Self::Error> {
        let p = transform.expect_model(TransformKind::Affine, 3, 12)?;
        let center = transform.center_of_rotation()?;
        Ok(AffineParameters3D::from_slices(&p[..9], &center, &p[9..])?)
    }
}

/// Layout: `θ0 θ1 θ2 tx ty tz`, angles in radians.
impl TryFrom<&ElastixTransform> for EulerParameters3D {
    type Error = ElastixError;

    fn try_from(transform: &ElastixTransform) -> Result<Self, Self::Error> {
        let p = transform.expect_model(TransformKind::Euler, 3, 6)?;
        let center = transform.center_of_rotation()?;
        Ok(EulerParameters3D::from_slices(&p[..3], &center, &p[3..])?)
    }
}

impl TryFrom<&ElastixTransform> for ElastixParameters {
    type Error = ElastixError;

    fn try_from(transform: &ElastixTransform) -> Result<Self, Self::Error> {
        let kind = transform.transform_kind()?;
        let dimension = transform.dimension()?;
        match (kind, dimension) {
            (TransformKind::Affine, 2) => Ok(Self::Affine2D(transform.try_into()?)),
            (TransformKind::Affine, 3) => Ok(Self::Affine3D(transform.try_into()?)),
            (TransformKind::Euler, 3) => Ok(Self::Euler3D(transform.try_into()?)),
            (kind, dimension) => Err(ElastixError::UnsupportedModel { kind, dimension }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itc_core::CoreError;

    #[test]
    fn test_affine2d() -> Result<(), ElastixError> {
        let transform = ElastixTransform::parse(
            "(Transform \"AffineTransform\")\n\
             (FixedImageDimension 2)\n\
             (TransformParameters 1 2 3 4 5 6)\n\
             (CenterOfRotationPoint 7 8)",
        )?;
        let params = AffineParameters2D::try_from(&transform)?;
        assert_eq!(params.matrix(), &[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(params.translation(), &[5.0, 6.0]);
        assert_eq!(params.rotation_center(), &[7.0, 8.0]);
        Ok(())
    }

    #[test]
    fn test_wrong_model() -> Result<(), ElastixError> {
        let transform = ElastixTransform::parse(
            "(Transform \"AffineTransform\")\n\
             (FixedImageDimension 3)\n\
             (TransformParameters 1 0 0 0 1 0 0 0 1 0 0 0)\n\
             (CenterOfRotationPoint 0 0 0)",
        )?;
        assert!(matches!(
            EulerParameters3D::try_from(&transform),
            Err(ElastixError::UnexpectedTransform { .. })
        ));
        assert!(matches!(
            AffineParameters2D::try_from(&transform),
            Err(ElastixError::UnexpectedDimension {
                expected: 2,
                actual: 3
            })
        ));
        Ok(())
    }

    #[test]
    fn test_center_dimension_mismatch() -> Result<(), ElastixError> {
        let transform = ElastixTransform::parse(
            "(Transform \"EulerTransform\")\n\
             (FixedImageDimension 3)\n\
             (TransformParameters 0 0 0 0 0 0)\n\
             (CenterOfRotationPoint 1 2)",
        )?;
        assert!(matches!(
            EulerParameters3D::try_from(&transform),
            Err(ElastixError::CoreError(CoreError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            }))
        ));
        Ok(())
    }

    #[test]
    fn test_euler_2d_is_unsupported() -> Result<(), ElastixError> {
        let transform = ElastixTransform::parse(
            "(Transform \"EulerTransform\")\n\
             (FixedImageDimension 2)\n\
             (TransformParameters 0 0 0)\n\
             (CenterOfRotationPoint 0 0)",
        )?;
        assert!(matches!(
            ElastixParameters::try_from(&transform),
            Err(ElastixError::UnsupportedModel {
                kind: TransformKind::Euler,
                dimension: 2
            })
        ));
        Ok(())
    }
}
