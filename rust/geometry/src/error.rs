use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during dimension estimation
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bounding box: {0}")]
    InvalidBox(String),

    #[error("Degenerate calibration: {0}")]
    DegenerateCalibration(String),
}
