use std::{fmt, fs, path::Path, path::PathBuf, str::FromStr};

use itc_core::VoxelSpacing3D;

use crate::error::ElastixError;
use crate::parameters::{ParameterMap, ParameterValue};

/// The transform models supported by the converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// `AffineTransform`: `T(x) = A (x - c) + t + c`.
    Affine,
    /// `EulerTransform`: `T(x) = R (x - c) + t + c`.
    Euler,
}

impl TransformKind {
    /// The value of the `Transform` parameter for this model.
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Affine => "AffineTransform",
            TransformKind::Euler => "EulerTransform",
        }
    }
}

impl FromStr for TransformKind {
    type Err = ElastixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AffineTransform" => Ok(TransformKind::Affine),
            "EulerTransform" => Ok(TransformKind::Euler),
            _ => Err(ElastixError::UnsupportedTransform(s.to_string())),
        }
    }
}

/// An elastix transform parameter file.
///
/// The transform keeps every parameter of the file, including the ones that
/// are irrelevant to the conversion, so that it can be written back unchanged.
/// Changing a parameter returns a new transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ElastixTransform {
    parameters: ParameterMap,
}

impl ElastixTransform {
    /// Key of the transform model name.
    pub const TRANSFORM: &'static str = "Transform";
    /// Key of the number of transform parameters.
    pub const NUMBER_OF_PARAMETERS: &'static str = "NumberOfParameters";
    /// Key of the transform parameter vector.
    pub const TRANSFORM_PARAMETERS: &'static str = "TransformParameters";
    /// Key of the image dimension.
    pub const FIXED_IMAGE_DIMENSION: &'static str = "FixedImageDimension";
    /// Key of the center of rotation, in millimeters.
    pub const CENTER_OF_ROTATION_POINT: &'static str = "CenterOfRotationPoint";
    /// Key of the fixed image spacing, in millimeters.
    pub const SPACING: &'static str = "Spacing";
    /// Key of the result image compression flag.
    pub const COMPRESS_RESULT_IMAGE: &'static str = "CompressResultImage";

    /// Create a transform from a parameter map.
    pub fn new(parameters: ParameterMap) -> Self {
        Self { parameters }
    }

    /// Parse the text of a transform parameter file.
    pub fn parse(text: &str) -> Result<Self, ElastixError> {
        Ok(Self::new(ParameterMap::parse(text)?))
    }

    /// Read a transform parameter file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `TransformParameters.txt` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ElastixError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let transform = Self::parse(&text)?;
        log::debug!(
            "loaded {} parameters from {}",
            transform.parameters.len(),
            path.display()
        );
        Ok(transform)
    }

    /// Write the transform to `path`, replacing an existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ElastixError> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        log::debug!("saved transform to {}", path.display());
        Ok(())
    }

    /// Write the transform into a new file in the system temporary directory.
    ///
    /// The file is kept after the call and its path is returned.
    pub fn to_temp_file(&self) -> Result<PathBuf, ElastixError> {
        let file = tempfile::Builder::new()
            .prefix("TransformParameters.")
            .suffix(".txt")
            .tempfile()?;
        fs::write(file.path(), self.to_string())?;
        let (_, path) = file.keep().map_err(|e| ElastixError::IoError(e.error))?;
        log::debug!("saved transform to {}", path.display());
        Ok(path)
    }

    /// The underlying parameter map.
    pub fn parameters(&self) -> &ParameterMap {
        &self.parameters
    }

    /// Returns a copy of the transform where `key` holds `values`.
    ///
    /// See [`ParameterMap::with_value`] for the rejected entries.
    pub fn with_value(
        self,
        key: &str,
        values: Vec<ParameterValue>,
    ) -> Result<Self, ElastixError> {
        Ok(Self::new(self.parameters.with_value(key, values)?))
    }

    /// Returns a copy of the transform where the flag `key` is set to `value`.
    pub fn with_bool(self, key: &str, value: bool) -> Result<Self, ElastixError> {
        self.with_value(key, vec![value.into()])
    }

    /// The transform model.
    pub fn transform_kind(&self) -> Result<TransformKind, ElastixError> {
        self.parameters.text(Self::TRANSFORM)?.parse()
    }

    /// The image dimension, 2 or 3.
    pub fn dimension(&self) -> Result<usize, ElastixError> {
        let value = self.parameters.number(Self::FIXED_IMAGE_DIMENSION)?;
        match value {
            v if v == 2.0 => Ok(2),
            v if v == 3.0 => Ok(3),
            v => Err(ElastixError::InvalidValue {
                key: Self::FIXED_IMAGE_DIMENSION.to_string(),
                message: format!("expected 2 or 3, got {v}"),
            }),
        }
    }

    /// The transform parameter vector.
    ///
    /// If `NumberOfParameters` is present, the vector must have that length.
    pub fn transform_parameters(&self) -> Result<Vec<f64>, ElastixError> {
        let values = self.parameters.numbers(Self::TRANSFORM_PARAMETERS)?;
        if self.parameters.get(Self::NUMBER_OF_PARAMETERS).is_some() {
            let expected = match self.parameters.number(Self::NUMBER_OF_PARAMETERS)? {
                v if v >= 0.0 && v.fract() == 0.0 => v as usize,
                v => {
                    return Err(ElastixError::InvalidValue {
                        key: Self::NUMBER_OF_PARAMETERS.to_string(),
                        message: format!("expected a non-negative integer, got {v}"),
                    })
                }
            };
            if values.len() != expected {
                return Err(ElastixError::DimensionMismatch {
                    key: Self::TRANSFORM_PARAMETERS.to_string(),
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(values)
    }

    /// The center of rotation in millimeters.
    pub fn center_of_rotation(&self) -> Result<Vec<f64>, ElastixError> {
        self.parameters.numbers(Self::CENTER_OF_ROTATION_POINT)
    }

    /// The fixed image spacing in millimeters.
    pub fn spacing(&self) -> Result<Vec<f64>, ElastixError> {
        self.parameters.numbers(Self::SPACING)
    }

    /// The fixed image spacing of a 3D transform as a voxel spacing in micrometers.
    pub fn voxel_spacing_um(&self) -> Result<VoxelSpacing3D, ElastixError> {
        let spacing = self.spacing()?;
        let millimeters: [f64; 3] =
            spacing
                .as_slice()
                .try_into()
                .map_err(|_| ElastixError::DimensionMismatch {
                    key: Self::SPACING.to_string(),
                    expected: 3,
                    actual: spacing.len(),
                })?;
        Ok(VoxelSpacing3D::try_from_millimeters(millimeters)?)
    }

    /// The value of a `"true"`/`"false"` flag.
    pub fn bool_value(&self, key: &str) -> Result<bool, ElastixError> {
        match self.parameters.text(key)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ElastixError::InvalidValue {
                key: key.to_string(),
                message: format!("expected \"true\" or \"false\", got \"{other}\""),
            }),
        }
    }

    /// Whether elastix compresses the result image.
    pub fn compress_result_image(&self) -> Result<bool, ElastixError> {
        self.bool_value(Self::COMPRESS_RESULT_IMAGE)
    }
}

impl FromStr for ElastixTransform {
    type Err = ElastixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ElastixTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parameters)
    }
}
