#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// 2D affine transform in homogeneous coordinates.
pub mod affine2d;

/// 3D affine transform in homogeneous coordinates.
pub mod affine3d;

/// Coordinate axes used by axis-aligned rotations.
pub mod axis;

/// Error types for the transform module.
pub mod error;

pub use affine2d::AffineTransform2D;
pub use affine3d::AffineTransform3D;
pub use axis::Axis;
pub use error::TransformError;
