use std::fmt;

use glam::{DMat4, DVec3, DVec4};

use crate::axis::Axis;

/// A 3D affine transform stored as a 4x4 homogeneous matrix.
///
/// The transform maps a point `x` to `A x + b`, where `A` is the upper-left
/// 3x3 block and `b` the last column. The bottom row is always `[0, 0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform3D {
    matrix: DMat4,
}

impl Default for AffineTransform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: DMat4::IDENTITY,
    };

    /// Create a transform from the 3x4 coefficient block in row-major order.
    pub fn from_row_major(rows: &[[f64; 4]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self {
            matrix: DMat4::from_cols(
                DVec4::new(r0[0], r1[0], r2[0], 0.0),
                DVec4::new(r0[1], r1[1], r2[1], 0.0),
                DVec4::new(r0[2], r1[2], r2[2], 0.0),
                DVec4::new(r0[3], r1[3], r2[3], 1.0),
            ),
        }
    }

    /// Create a pure translation.
    pub fn from_translation(translation: &[f64; 3]) -> Self {
        Self {
            matrix: DMat4::from_translation(DVec3::from_array(*translation)),
        }
    }

    /// Create a linear transform from a 3x3 matrix in row-major order.
    pub fn from_linear(linear: &[[f64; 3]; 3]) -> Self {
        let mut transform = Self::IDENTITY;
        for (row, values) in linear.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                transform = transform.with_coefficient(row, col, *value);
            }
        }
        transform
    }

    /// Create a counter-clockwise rotation of `angle` radians about `axis`.
    ///
    /// For the x axis the linear part is:
    ///
    /// | 1   0     0   |
    /// | 0  cos  -sin  |
    /// | 0  sin   cos  |
    pub fn from_axis_rotation(axis: Axis, angle: f64) -> Self {
        let matrix = match axis {
            Axis::X => DMat4::from_rotation_x(angle),
            Axis::Y => DMat4::from_rotation_y(angle),
            Axis::Z => DMat4::from_rotation_z(angle),
        };
        Self { matrix }
    }

    /// Returns the coefficient at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row > 2` or `col > 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 3 && col < 4, "coefficient ({row}, {col}) out of range");
        self.matrix.col(col)[row]
    }

    /// Returns a copy of the transform with the coefficient at `(row, col)` set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row > 2` or `col > 3`.
    pub fn with_coefficient(mut self, row: usize, col: usize, value: f64) -> Self {
        assert!(row < 3 && col < 4, "coefficient ({row}, {col}) out of range");
        self.matrix.col_mut(col)[row] = value;
        self
    }

    /// Translate the output of the transform by `translation`.
    pub fn translate(self, translation: &[f64; 3]) -> Self {
        self.pre_concatenate(&Self::from_translation(translation))
    }

    /// Rotate the output of the transform by `angle` radians about `axis`.
    pub fn rotate(self, axis: Axis, angle: f64) -> Self {
        self.pre_concatenate(&Self::from_axis_rotation(axis, angle))
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
    pub fn apply(&self, point: &[f64; 3]) -> [f64; 3] {
        self.matrix
            .transform_point3(DVec3::from_array(*point))
            .to_array()
    }

    /// Returns the 3x4 coefficient block in row-major order.
    pub fn to_row_major(&self) -> [[f64; 4]; 3] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.get(row, col)))
    }

    /// Returns the underlying 4x4 homogeneous matrix.
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }
}

impl fmt::Display for AffineTransform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .to_row_major()
            .iter()
            .flatten()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        write!(f, "3d-affine: ({})", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_rows_eq(actual: [[f64; 4]; 3], expected: [[f64; 4]; 3]) {
        for i in 0..3 {
            for j in 0..4 {
                assert_relative_eq!(actual[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_from_row_major_roundtrip() {
        let rows = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        ];
        let t = AffineTransform3D::from_row_major(&rows);
        assert_eq!(t.to_row_major(), rows);
        assert_eq!(t.get(1, 3), 8.0);
    }

    #[test]
    fn test_axis_rotations() {
        let rx = AffineTransform3D::from_axis_rotation(Axis::X, FRAC_PI_2);
        assert_rows_eq(
            rx.to_row_major(),
            [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
            ],
        );

        let ry = AffineTransform3D::from_axis_rotation(Axis::Y, FRAC_PI_2);
        assert_rows_eq(
            ry.to_row_major(),
            [
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0, 0.0],
            ],
        );

        let rz = AffineTransform3D::from_axis_rotation(Axis::Z, FRAC_PI_2);
        assert_rows_eq(
            rz.to_row_major(),
            [
                [0.0, -1.0, 0.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        );
    }

    #[test]
    fn test_rotate_applies_after_accumulated() {
        // rotate about x first, then about y
        let t = AffineTransform3D::IDENTITY
            .rotate(Axis::X, FRAC_PI_2)
            .rotate(Axis::Y, FRAC_PI_2);
        assert_rows_eq(
            t.to_row_major(),
            [
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [-1.0, 0.0, 0.0, 0.0],
            ],
        );
    }

    #[test]
    fn test_translate_accumulates() {
        let t = AffineTransform3D::IDENTITY
            .translate(&[1.0, 2.0, 3.0])
            .translate(&[-1.0, 0.5, 0.0]);
        assert_eq!(t.apply(&[0.0, 0.0, 0.0]), [0.0, 2.5, 3.0]);
    }

    #[test]
    fn test_inverse() {
        let t = AffineTransform3D::IDENTITY
            .rotate(Axis::Z, 0.3)
            .translate(&[1.0, -2.0, 0.5]);
        let inv = t.inverse().expect("rigid transform is invertible");
        let p = inv.apply(&t.apply(&[4.0, 5.0, 6.0]));
        assert_relative_eq!(p[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 5.0, epsilon = 1e-12);
        assert_relative_eq!(p[2], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let t = AffineTransform3D::from_translation(&[1.0, 2.0, 3.0]);
        assert_eq!(
            t.to_string(),
            "3d-affine: (1, 0, 0, 1, 0, 1, 0, 2, 0, 0, 1, 3)"
        );
    }
}
