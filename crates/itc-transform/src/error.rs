/// An error type for the transform module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransformError {
    /// Error when an axis index is not 0, 1 or 2.
    #[error("Invalid axis index {0}, expected 0, 1 or 2")]
    InvalidAxis(usize),
}
