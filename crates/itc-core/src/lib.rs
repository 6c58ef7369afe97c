#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Converters from registration parameters to affine transforms.
pub mod convert;

/// Error types for the core module.
pub mod error;

/// Registration parameter sets.
pub mod params;

/// Voxel spacing and unit conversion.
pub mod spacing;

pub use convert::{convert_affine_2d, convert_affine_3d, convert_euler_3d};
pub use error::CoreError;
pub use params::{AffineParameters2D, AffineParameters3D, EulerParameters3D};
pub use spacing::VoxelSpacing3D;

#[doc(inline)]
pub use itc_transform::{AffineTransform2D, AffineTransform3D, Axis};
