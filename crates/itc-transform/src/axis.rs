use crate::error::TransformError;

/// A coordinate axis of the 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first axis (x).
    X = 0,
    /// The second axis (y).
    Y = 1,
    /// The third axis (z).
    Z = 2,
}

impl Axis {
    /// All the axes in ascending index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the index of the axis.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Axis {
    type Error = TransformError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(TransformError::InvalidAxis(index)),
        }
    }
}
