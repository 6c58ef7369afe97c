use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Copy a slice into a fixed size array, failing if the lengths differ.
pub(crate) fn to_array<const N: usize>(
    name: &'static str,
    values: &[f64],
) -> Result<[f64; N], CoreError> {
    values
        .try_into()
        .map_err(|_| CoreError::DimensionMismatch {
            name,
            expected: N,
            actual: values.len(),
        })
}

/// Parameters of a 2D affine registration: `T(x) = A (x - c) + t + c`.
///
/// All the lengths are in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineParameters2D {
    matrix: [[f64; 2]; 2],
    rotation_center: [f64; 2],
    translation: [f64; 2],
}

impl AffineParameters2D {
    /// Create a new set of 2D affine parameters.
    ///
    /// # Arguments
    ///
    /// * `matrix` - The linear part `A` in row-major order.
    /// * `rotation_center` - The center `c` in millimeters.
    /// * `translation` - The translation `t` in millimeters.
    pub fn new(matrix: [[f64; 2]; 2], rotation_center: [f64; 2], translation: [f64; 2]) -> Self {
        Self {
            matrix,
            rotation_center,
            translation,
        }
    }

    /// Create the parameters from slices, with `matrix` holding 4 row-major values.
    ///
    /// Returns [`CoreError::DimensionMismatch`] if a slice has the wrong length.
    pub fn from_slices(
        matrix: &[f64],
        rotation_center: &[f64],
        translation: &[f64],
    ) -> Result<Self, CoreError> {
        let [a11, a12, a21, a22] = to_array::<4>("matrix", matrix)?;
        Ok(Self::new(
            [[a11, a12], [a21, a22]],
            to_array("rotation center", rotation_center)?,
            to_array("translation", translation)?,
        ))
    }

    /// The linear part in row-major order.
    pub fn matrix(&self) -> &[[f64; 2]; 2] {
        &self.matrix
    }

    /// The rotation center in millimeters.
    pub fn rotation_center(&self) -> &[f64; 2] {
        &self.rotation_center
    }

    /// The translation in millimeters.
    pub fn translation(&self) -> &[f64; 2] {
        &self.translation
    }
}

/// Parameters of a 3D affine registration: `T(x) = A (x - c) + t + c`.
///
/// All the lengths are in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineParameters3D {
    matrix: [[f64; 3]; 3],
    rotation_center: [f64; 3],
    translation: [f64; 3],
}

impl AffineParameters3D {
    /// Create a new set of 3D affine parameters.
    pub fn new(matrix: [[f64; 3]; 3], rotation_center: [f64; 3], translation: [f64; 3]) -> Self {
        Self {
            matrix,
            rotation_center,
            translation,
        }
    }

    /// Create the parameters from slices, with `matrix` holding 9 row-major values.
    pub fn from_slices(
        matrix: &[f64],
        rotation_center: &[f64],
        translation: &[f64],
    ) -> Result<Self, CoreError> {
        let m = to_array::<9>("matrix", matrix)?;
        Ok(Self::new(
            [[m[0], m[1], m[2]], [m[3], m[4], m[5]], [m[6], m[7], m[8]]],
            to_array("rotation center", rotation_center)?,
            to_array("translation", translation)?,
        ))
    }

    /// The linear part in row-major order.
    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    /// The rotation center in millimeters.
    pub fn rotation_center(&self) -> &[f64; 3] {
        &self.rotation_center
    }

    /// The translation in millimeters.
    pub fn translation(&self) -> &[f64; 3] {
        &self.translation
    }
}

/// Parameters of a 3D rigid registration: `T(x) = R (x - c) + t + c`.
///
/// `R` is the rotation about axis 0, followed by the rotation about axis 1,
/// followed by the rotation about axis 2. Its orthonormality is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerParameters3D {
    angles: [f64; 3],
    rotation_center: [f64; 3],
    translation: [f64; 3],
}

impl EulerParameters3D {
    /// Create a new set of 3D Euler parameters.
    ///
    /// # Arguments
    ///
    /// * `angles` - The rotation angle about each axis in radians.
    /// * `rotation_center` - The center `c` in millimeters.
    /// * `translation` - The translation `t` in millimeters.
    pub fn new(angles: [f64; 3], rotation_center: [f64; 3], translation: [f64; 3]) -> Self {
        Self {
            angles,
            rotation_center,
            translation,
        }
    }

    /// Create the parameters from slices of 3 values each.
    pub fn from_slices(
        angles: &[f64],
        rotation_center: &[f64],
        translation: &[f64],
    ) -> Result<Self, CoreError> {
        Ok(Self::new(
            to_array("angles", angles)?,
            to_array("rotation center", rotation_center)?,
            to_array("translation", translation)?,
        ))
    }

    /// The rotation angles in radians.
    pub fn angles(&self) -> &[f64; 3] {
        &self.angles
    }

    /// The rotation center in millimeters.
    pub fn rotation_center(&self) -> &[f64; 3] {
        &self.rotation_center
    }

    /// The translation in millimeters.
    pub fn translation(&self) -> &[f64; 3] {
        &self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affine2d_from_slices() -> Result<(), CoreError> {
        let params = AffineParameters2D::from_slices(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0], &[7.0, 8.0])?;
        assert_eq!(params.matrix(), &[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(params.rotation_center(), &[5.0, 6.0]);
        assert_eq!(params.translation(), &[7.0, 8.0]);
        Ok(())
    }

    #[test]
    fn test_affine3d_from_slices_row_major() -> Result<(), CoreError> {
        let matrix = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let params = AffineParameters3D::from_slices(&matrix, &[0.0; 3], &[0.0; 3])?;
        assert_eq!(params.matrix()[1], [4.0, 5.0, 6.0]);
        assert_eq!(params.matrix()[2][0], 7.0);
        Ok(())
    }

    #[test]
    fn test_from_slices_rejects_wrong_lengths() {
        let err = AffineParameters2D::from_slices(&[1.0, 0.0, 0.0, 1.0, 0.0], &[0.0; 2], &[0.0; 2]);
        assert_eq!(
            err,
            Err(CoreError::DimensionMismatch {
                name: "matrix",
                expected: 4,
                actual: 5
            })
        );

        let err = EulerParameters3D::from_slices(&[0.0; 3], &[0.0; 2], &[0.0; 3]);
        assert_eq!(
            err,
            Err(CoreError::DimensionMismatch {
                name: "rotation center",
                expected: 3,
                actual: 2
            })
        );

        let err = AffineParameters3D::from_slices(&[0.0; 9], &[0.0; 3], &[0.0; 4]);
        assert!(matches!(
            err,
            Err(CoreError::DimensionMismatch {
                name: "translation",
                ..
            })
        ));
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let params = EulerParameters3D::new([0.1, 0.2, 0.3], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        let json = serde_json::to_string(&params)?;
        let decoded: EulerParameters3D = serde_json::from_str(&json)?;
        assert_eq!(decoded, params);
        Ok(())
    }
}
