use std::fmt;

use glam::{DMat3, DVec2, DVec3};

/// A 2D affine transform stored as a 3x3 homogeneous matrix.
///
/// The transform maps a point `x` to `A x + b`, where `A` is the upper-left
/// 2x2 block and `b` the last column. The bottom row is always `[0, 0, 1]`.
///
/// All the composition methods consume the transform and return the result,
/// so a sequence of operations reads left to right in the order in which the
/// operations are applied to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform2D {
    matrix: DMat3,
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: DMat3::IDENTITY,
    };

    /// Create a transform from the 2x3 coefficient block in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use itc_transform::AffineTransform2D;
    ///
    /// let t = AffineTransform2D::from_row_major(&[[1.0, 0.0, 5.0], [0.0, 1.0, -2.0]]);
    /// assert_eq!(t.apply(&[1.0, 1.0]), [6.0, -1.0]);
    /// ```
    pub fn from_row_major(rows: &[[f64; 3]; 2]) -> Self {
        let [r0, r1] = rows;
        Self {
            matrix: DMat3::from_cols(
                DVec3::new(r0[0], r1[0], 0.0),
                DVec3::new(r0[1], r1[1], 0.0),
                DVec3::new(r0[2], r1[2], 1.0),
            ),
        }
    }

    /// Create a pure translation.
    pub fn from_translation(translation: &[f64; 2]) -> Self {
        Self {
            matrix: DMat3::from_translation(DVec2::from_array(*translation)),
        }
    }

    /// Create a linear transform from a 2x2 matrix in row-major order.
    ///
    /// Entry `(row, col)` of `linear` becomes coefficient `(row, col)` of the
    /// transform. The translation part is zero.
    pub fn from_linear(linear: &[[f64; 2]; 2]) -> Self {
        let mut transform = Self::IDENTITY;
        for (row, values) in linear.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                transform = transform.with_coefficient(row, col, *value);
            }
        }
        transform
    }

    /// Returns the coefficient at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row > 1` or `col > 2`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 2 && col < 3, "coefficient ({row}, {col}) out of range");
        self.matrix.col(col)[row]
    }

    /// Returns a copy of the transform with the coefficient at `(row, col)` set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row > 1` or `col > 2`.
    pub fn with_coefficient(mut self, row: usize, col: usize, value: f64) -> Self {
        assert!(row < 2 && col < 3, "coefficient ({row}, {col}) out of range");
        self.matrix.col_mut(col)[row] = value;
        self
    }

    /// Translate the output of the transform by `translation`.
    pub fn translate(self, translation: &[f64; 2]) -> Self {
        self.pre_concatenate(&Self::from_translation(translation))
    }

    /// Rotate the output of the transform counter-clockwise by `angle` radians
    /// around the origin.
    pub fn rotate(self, angle: f64) -> Self {
        self.pre_concatenate(&Self {
            matrix: DMat3::from_angle(angle),
        })
    }

    /// Apply `other` after this transform, i.e. compute `other ∘ self`.
    pub fn pre_concatenate(self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Apply `other` before this transform, i.e. compute `self ∘ other`.
    pub fn concatenate(self, other: &Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Returns the inverse transform, or `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.matrix.determinant() == 0.0 {
            return None;
        }
        Some(Self {
            matrix: self.matrix.inverse(),
        })
    }

    /// Transform a point.
    pub fn apply(&self, point: &[f64; 2]) -> [f64; 2] {
        self.matrix
            .transform_point2(DVec2::from_array(*point))
            .to_array()
    }

    /// Returns the 2x3 coefficient block in row-major order.
    pub fn to_row_major(&self) -> [[f64; 3]; 2] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.get(row, col)))
    }

    /// Returns the underlying 3x3 homogeneous matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }
}

impl fmt::Display for AffineTransform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r0, r1] = self.to_row_major();
        write!(
            f,
            "2d-affine: ({}, {}, {}, {}, {}, {})",
            r0[0], r0[1], r0[2], r1[0], r1[1], r1[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let t = AffineTransform2D::default();
        assert_eq!(t.to_row_major(), [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(t.apply(&[3.0, -4.0]), [3.0, -4.0]);
    }

    #[test]
    fn test_set_and_get_coefficient() {
        let t = AffineTransform2D::IDENTITY
            .with_coefficient(0, 1, 2.5)
            .with_coefficient(1, 2, -3.0);
        assert_eq!(t.get(0, 1), 2.5);
        assert_eq!(t.get(1, 2), -3.0);
        assert_eq!(t.get(0, 0), 1.0);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range() {
        AffineTransform2D::IDENTITY.get(2, 0);
    }

    #[test]
    fn test_translate_then_rotate() {
        // translation is applied first, then the rotation
        let t = AffineTransform2D::IDENTITY
            .translate(&[1.0, 0.0])
            .rotate(std::f64::consts::FRAC_PI_2);
        let p = t.apply(&[1.0, 0.0]);
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pre_concatenate_and_concatenate_order() {
        let scale = AffineTransform2D::from_linear(&[[2.0, 0.0], [0.0, 2.0]]);
        let shift = AffineTransform2D::from_translation(&[1.0, 1.0]);

        // scale, then shift
        let a = scale.pre_concatenate(&shift);
        assert_eq!(a.apply(&[1.0, 1.0]), [3.0, 3.0]);

        // shift, then scale
        let b = scale.concatenate(&shift);
        assert_eq!(b.apply(&[1.0, 1.0]), [4.0, 4.0]);
    }

    #[test]
    fn test_inverse() {
        let t = AffineTransform2D::from_row_major(&[[2.0, 1.0, 3.0], [0.5, 1.0, -1.0]]);
        let inv = t.inverse().expect("transform is invertible");
        let p = inv.apply(&t.apply(&[0.3, -7.0]));
        assert_relative_eq!(p[0], 0.3, epsilon = 1e-12);
        assert_relative_eq!(p[1], -7.0, epsilon = 1e-12);

        let singular = AffineTransform2D::from_linear(&[[1.0, 2.0], [2.0, 4.0]]);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_display() {
        let t = AffineTransform2D::from_translation(&[1.5, 2.0]);
        assert_eq!(t.to_string(), "2d-affine: (1, 0, 1.5, 0, 1, 2)");
    }
}
